//! HTTP endpoint handlers, one module per resource.

pub mod analysis;
pub mod calls;
pub mod health;
pub mod metrics;
pub mod session;
