//! SSSE3 high frequency noise, using `pabsw` for the absolute values.

use super::combine;
use super::sse2::{gradient, gradient_masks};
use crate::context::MetricContext;
use crate::simd::{hsum_epi32, pair_sum};
use crate::sse::sse2::sse;
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// SSSE3 implementation of [`hf_noise`](super::portable::hf_noise).
///
/// # Safety
///
/// See [`HfNoiseFn`](super::HfNoiseFn). The CPU must support SSSE3.
#[target_feature(enable = "sse2,ssse3")]
pub unsafe fn hf_noise<const W: usize>(pix: *const u8, stride: usize, h: usize) -> u32 {
    if h < 2 {
        return 0;
    }
    let (mask_lo, mask_hi) = gradient_masks::<W>();
    let mut acc = _mm_setzero_si128();
    let (mut up_lo, mut up_hi) = gradient::<W>(pix);
    for y in 1..h {
        let (lo, hi) = gradient::<W>(pix.add(y * stride));
        let noise = _mm_add_epi16(
            _mm_and_si128(_mm_abs_epi16(_mm_sub_epi16(up_lo, lo)), mask_lo),
            _mm_and_si128(_mm_abs_epi16(_mm_sub_epi16(up_hi, hi)), mask_hi),
        );
        acc = _mm_add_epi32(acc, pair_sum(noise));
        (up_lo, up_hi) = (lo, hi);
    }
    hsum_epi32(acc)
}

/// SSSE3 implementation of [`nsse`](super::portable::nsse).
///
/// # Safety
///
/// See [`MetricFn`](crate::MetricFn). The CPU must support SSSE3.
#[target_feature(enable = "sse2,ssse3")]
pub unsafe fn nsse<const W: usize>(
    ctx: Option<&MetricContext>,
    pix1: *const u8,
    pix2: *const u8,
    stride: usize,
    h: usize,
) -> u32 {
    combine(
        sse::<W>(ctx, pix1, pix2, stride, h),
        hf_noise::<W>(pix1, stride, h),
        hf_noise::<W>(pix2, stride, h),
        MetricContext::nsse_weight_of(ctx),
    )
}
