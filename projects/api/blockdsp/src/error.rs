//! Error types of the validated slice API.

use blockdsp_common::BlockValidationError;
use blockdsp_loop_filter::LoopFilterError;
use thiserror::Error;

/// A kernel cannot be run on the supplied buffers or parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DspError {
    /// A buffer, stride, height or block size does not fit the kernel.
    #[error(transparent)]
    Validation(#[from] BlockValidationError),

    /// The loop filter arguments are invalid.
    #[error(transparent)]
    LoopFilter(#[from] LoopFilterError),

    /// A quarter sample phase component is not in `0..4`.
    #[error("Invalid quarter sample phase ({mx}, {my}): both components must be below 4")]
    InvalidPhase {
        /// Horizontal quarter sample offset.
        mx: usize,
        /// Vertical quarter sample offset.
        my: usize,
    },

    /// The `try_8x8basis` scale is outside the range its fixed point arithmetic supports.
    #[error("Basis scale {0} is out of range (|scale| must be below 256)")]
    ScaleOutOfRange(i32),
}
