#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod basis;
pub mod context;
pub mod hadamard;
pub mod noise;
pub mod norm;
pub mod sse;
pub mod vsad;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
mod simd;

#[cfg(test)]
pub mod test_prelude;

pub use context::{MetricContext, MetricFn, MetricTable};
