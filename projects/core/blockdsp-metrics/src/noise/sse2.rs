//! SSE2 high frequency noise and noise preserving SSE.
//!
//! Each row is turned into its horizontal gradient `p[x] - p[x+1]` once; the lane for the last
//! column, which has no right neighbour inside the block, is masked out of the sum.

use super::combine;
use crate::context::MetricContext;
use crate::simd::{abs_epi16, drop_last_lane, hsum_epi32, load_row, pair_sum, widen_hi, widen_lo};
use crate::sse::sse2::sse;
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Horizontal gradient of a `W` byte row in 16-bit lanes (columns `0..8`, `8..16`).
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn gradient<const W: usize>(row: *const u8) -> (__m128i, __m128i) {
    let cur = load_row::<W>(row);
    let next = _mm_srli_si128::<1>(cur);
    let lo = _mm_sub_epi16(widen_lo(cur), widen_lo(next));
    if W == 16 {
        (lo, _mm_sub_epi16(widen_hi(cur), widen_hi(next)))
    } else {
        (lo, _mm_setzero_si128())
    }
}

/// Masks for the `(lo, hi)` gradient lanes that lie inside `0..W - 1`.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn gradient_masks<const W: usize>() -> (__m128i, __m128i) {
    if W == 16 {
        (_mm_set1_epi16(-1), drop_last_lane())
    } else {
        (drop_last_lane(), _mm_setzero_si128())
    }
}

/// SSE2 implementation of [`hf_noise`](super::portable::hf_noise).
///
/// # Safety
///
/// See [`HfNoiseFn`](super::HfNoiseFn). The CPU must support SSE2.
#[target_feature(enable = "sse2")]
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
            _mm_and_si128(abs_epi16(_mm_sub_epi16(up_lo, lo)), mask_lo),
            _mm_and_si128(abs_epi16(_mm_sub_epi16(up_hi, hi)), mask_hi),
        );
        acc = _mm_add_epi32(acc, pair_sum(noise));
        (up_lo, up_hi) = (lo, hi);
    }
    hsum_epi32(acc)
}

/// SSE2 implementation of [`nsse`](super::portable::nsse).
///
/// # Safety
///
/// See [`MetricFn`](crate::MetricFn). The CPU must support SSE2.
#[target_feature(enable = "sse2")]
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
