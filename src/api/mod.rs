//! Dashboard HTTP API.
//!
//! Exposes the call batch, metrics and analysis workflow as JSON
//! endpoints. The router is composable: `api_router()` returns a `Router`
//! that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{serve, start_server_on, ApiServer, ServerSession};
pub use types::ApiContext;
