//! Errors of the checked loop filter entry points.

use blockdsp_common::BlockValidationError;
use thiserror::Error;

/// A loop filter call cannot be made with the given arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoopFilterError {
    /// The quantizer scale has no strength table entry.
    #[error("Quantizer scale {0} is out of range (must be below 32)")]
    QscaleOutOfRange(u32),

    /// The plane cannot hold the samples around the edge.
    #[error(transparent)]
    Validation(#[from] BlockValidationError),
}
