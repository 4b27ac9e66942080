pub mod analysis;
pub mod call;
pub mod enums;
pub mod summary;
pub mod ticket;
pub mod voicemail;

pub use analysis::*;
pub use call::*;
pub use enums::*;
pub use summary::*;
pub use ticket::*;
pub use voicemail::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
