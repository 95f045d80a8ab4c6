//! # Block Statistics
//!
//! Sum and sum of squares of a 16x16 block, used for variance based decisions.

use blockdsp_common::DspTier;

pub mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod sse2;

/// `(pix, stride) -> value` over a 16x16 block.
///
/// # Safety
///
/// `pix` must be valid for 16 rows of 16 bytes, `stride` bytes apart.
pub type PixStatFn = unsafe fn(pix: *const u8, stride: usize) -> u32;

/// The block statistics of one tier.
#[derive(Debug, Clone, Copy)]
pub struct NormFns {
    /// `Σ p²`
    pub pix_norm1: PixStatFn,
    /// `Σ p`
    pub pix_sum: PixStatFn,
}

impl NormFns {
    /// Kernels of the given tier.
    pub fn for_tier(tier: DspTier) -> Self {
        match tier {
            #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
            DspTier::Sse2 | DspTier::Ssse3 => Self {
                pix_norm1: sse2::pix_norm1,
                pix_sum: sse2::pix_sum16,
            },
            _ => Self {
                pix_norm1: portable::pix_norm1,
                pix_sum: portable::pix_sum16,
            },
        }
    }
}
