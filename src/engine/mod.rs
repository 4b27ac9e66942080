//! Synthetic record generation engine.
//!
//! Stateless: every generator takes the caller's RNG and, where records
//! carry timestamps, the caller's notion of "now". Seeding the RNG and
//! fixing `now` makes every output reproducible.

pub mod analysis;
pub mod calls;
pub mod lexicon;
pub mod metrics;
pub mod narrative;
pub mod sampling;
pub mod summary;
pub mod ticket;
pub mod voicemail;

pub use analysis::generate_analysis;
pub use calls::{build_batch, parse_duration_seconds};
pub use metrics::{aggregate, statistics, DashboardStatistics, MetricsSummary};
pub use narrative::compose_summary;
pub use summary::analyze_summary;
pub use ticket::{generate_metadata, generate_support_ticket};
pub use voicemail::synthesize_voicemail;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// A voicemail duration did not start with a number. Indicates a broken
    /// template, never user input.
    #[error("Malformed duration: {0:?}")]
    MalformedDuration(String),
}
