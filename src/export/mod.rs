//! Export wizard: session state machine and submit controller.

pub mod controller;
pub mod session;

pub use controller::{RESET_DELAY, run_export};
pub use session::{ExportRequest, ExportSession, SelectError, Step};

use crate::error::ApiError;
use crate::filters::RangeError;

/// Errors surfaced by an export attempt.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The session is not in the configure step with a procedure chosen.
    #[error("no procedure selected")]
    NotReady,

    /// A numeric range failed validation; nothing was sent.
    #[error(transparent)]
    InvalidRange(#[from] RangeError),

    /// The remote export request failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}
