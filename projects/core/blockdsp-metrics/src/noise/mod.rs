//! # Noise Preserving SSE
//!
//! `hf_noise` measures the high frequency content of a block as the absolute second order
//! difference of each 2x2 neighbourhood:
//!
//! ```text
//! hf = Σ_{y=0}^{h-2} Σ_{x=0}^{w-2} |(p[y][x] - p[y][x+1]) - (p[y+1][x] - p[y+1][x+1])|
//! ```
//!
//! `nsse` adds the change in that content to the plain SSE, so an encoder avoids smoothing
//! away film grain:
//!
//! ```text
//! nsse = sse(pix1, pix2) + |hf(pix1) - hf(pix2)| * weight
//! ```
//!
//! `weight` comes from the [`MetricContext`](crate::MetricContext), 8 without one.

use crate::context::MetricTable;
use blockdsp_common::DspTier;

pub mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod ssse3;

/// `(pix, stride, h) -> hf`
///
/// # Safety
///
/// `pix` must be valid for `h` rows of the kernel width, `stride` bytes apart.
pub type HfNoiseFn = unsafe fn(pix: *const u8, stride: usize, h: usize) -> u32;

/// Combines the parts of `nsse`, wrapping like the rest of the 32-bit cost arithmetic.
#[inline(always)]
pub(crate) fn combine(sse: u32, hf1: u32, hf2: u32, weight: u32) -> u32 {
    sse.wrapping_add(hf1.abs_diff(hf2).wrapping_mul(weight))
}

/// `hf_noise16` and `hf_noise8` of the given tier.
pub fn hf_noise_tab(tier: DspTier) -> [HfNoiseFn; 2] {
    match tier {
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        DspTier::Ssse3 => [ssse3::hf_noise::<16>, ssse3::hf_noise::<8>],
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        DspTier::Sse2 => [sse2::hf_noise::<16>, sse2::hf_noise::<8>],
        _ => [portable::hf_noise::<16>, portable::hf_noise::<8>],
    }
}

/// `nsse16` and `nsse8` of the given tier.
pub fn nsse_tab(tier: DspTier) -> MetricTable {
    match tier {
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        DspTier::Ssse3 => [ssse3::nsse::<16>, ssse3::nsse::<8>],
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        DspTier::Sse2 => [sse2::nsse::<16>, sse2::nsse::<8>],
        _ => [portable::nsse::<16>, portable::nsse::<8>],
    }
}
