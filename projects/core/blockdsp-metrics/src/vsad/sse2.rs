//! SSE2 vertical SAD.

use crate::context::MetricContext;
use crate::simd::{abs_epi16, hsum_epi32, hsum_sad, pair_sum, widen_hi, widen_lo};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

#[inline]
#[target_feature(enable = "sse2")]
unsafe fn row_difference(pix1: *const u8, pix2: *const u8) -> (__m128i, __m128i) {
    let a = _mm_loadu_si128(pix1 as *const __m128i);
    let b = _mm_loadu_si128(pix2 as *const __m128i);
    (
        _mm_sub_epi16(widen_lo(a), widen_lo(b)),
        _mm_sub_epi16(widen_hi(a), widen_hi(b)),
    )
}

/// SSE2 implementation of [`vsad16`](super::portable::vsad16).
///
/// # Safety
///
/// See [`MetricFn`](crate::MetricFn). The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn vsad16(
    _ctx: Option<&MetricContext>,
    pix1: *const u8,
    pix2: *const u8,
    stride: usize,
    h: usize,
) -> u32 {
    if h == 0 {
        return 0;
    }
    let mut acc = _mm_setzero_si128();
    let (mut up_lo, mut up_hi) = row_difference(pix1, pix2);
    for y in 1..h {
        let (lo, hi) = row_difference(pix1.add(y * stride), pix2.add(y * stride));
        let step = _mm_add_epi16(
            abs_epi16(_mm_sub_epi16(lo, up_lo)),
            abs_epi16(_mm_sub_epi16(hi, up_hi)),
        );
        acc = _mm_add_epi32(acc, pair_sum(step));
        (up_lo, up_hi) = (lo, hi);
    }
    hsum_epi32(acc)
}

/// SSE2 implementation of [`vsad_intra16`](super::portable::vsad_intra16).
///
/// # Safety
///
/// See [`MetricFn`](crate::MetricFn). The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn vsad_intra16(
    _ctx: Option<&MetricContext>,
    pix: *const u8,
    _pix2: *const u8,
    stride: usize,
    h: usize,
) -> u32 {
    if h == 0 {
        return 0;
    }
    let mut acc = _mm_setzero_si128();
    let mut up = _mm_loadu_si128(pix as *const __m128i);
    for y in 1..h {
        let row = _mm_loadu_si128(pix.add(y * stride) as *const __m128i);
        acc = _mm_add_epi64(acc, _mm_sad_epu8(row, up));
        up = row;
    }
    hsum_sad(acc)
}
