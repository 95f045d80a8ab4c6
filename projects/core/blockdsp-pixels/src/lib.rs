#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod block_io;
pub mod bytes;
pub mod hpel;
pub mod l2;

#[cfg(test)]
pub mod test_prelude;

pub use block_io::BlockIoFns;
pub use bytes::ByteRowFns;
pub use hpel::{HpelFilter, PixelsFn, PixelsTable};
pub use l2::L2Fn;
