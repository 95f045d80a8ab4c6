#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod filter;
pub mod h264;
pub mod mpeg4;
pub mod ops;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
mod simd;

#[cfg(test)]
pub mod test_prelude;

pub use filter::FilterStage;
pub use ops::{PixelOps, Portable};

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub use ops::Sse2;

/// A quarter-pel kernel for one block size and phase: `(dst, src, stride)`.
///
/// `dst` and `src` share the stride. The block size, the phase and the region of `src` read
/// around the block are fixed by the table the kernel was taken from.
///
/// # Safety
///
/// - `src` must be valid for reads of the source region of the kernel's family
/// - `dst` must be valid for reads and writes of the block
/// - The CPU must support the tier the kernel was taken from
pub type QpelMcFn = unsafe fn(dst: *mut u8, src: *const u8, stride: usize);

/// The 16 phases of one block size, indexed by [`phase_index`].
pub type QpelPhases = [QpelMcFn; 16];

/// Table index of the phase for quarter sample fractions `mx`, `my` in `0..4`.
#[inline]
pub const fn phase_index(mx: usize, my: usize) -> usize {
    debug_assert!(mx < 4 && my < 4);
    mx + 4 * my
}
