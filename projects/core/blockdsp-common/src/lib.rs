#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

pub mod allocate;
pub mod block;
pub mod capabilities;
pub mod cpu_detect;
pub mod pixel;
pub mod validate;

pub use block::BlockSize;
pub use capabilities::{CpuCapabilities, DspMask, DspTier};
pub use validate::BlockValidationError;
