#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod block_io;
pub mod bytes;
pub mod context;
pub mod error;
pub mod hpel;
pub mod loop_filter;
pub mod metrics;
pub mod qpel;

#[cfg(test)]
pub mod test_prelude;

// Re-export main functionality at crate root
pub use context::DspContext;
pub use error::DspError;
pub use hpel::{L2Op, PixelOp};
pub use metrics::MetricKind;
pub use qpel::QpelOp;

pub use blockdsp_common::validate::Region;
pub use blockdsp_common::{BlockSize, BlockValidationError, CpuCapabilities, DspMask, DspTier};
pub use blockdsp_loop_filter::{EdgeDirection, LoopFilterError};
pub use blockdsp_metrics::MetricContext;
pub use blockdsp_pixels::HpelFilter;
