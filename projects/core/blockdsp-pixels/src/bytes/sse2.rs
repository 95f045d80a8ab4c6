//! SSE2 byte row kernels.

use super::portable;
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// SSE2 implementation of [`add_bytes`](super::portable::add_bytes).
///
/// # Safety
///
/// See [`portable::add_bytes`]. The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn add_bytes(dst: *mut u8, src: *const u8, w: usize) {
    let vectorized = w & !15;
    let mut i = 0;
    while i < vectorized {
        let a = _mm_loadu_si128(dst.add(i) as *const __m128i);
        let b = _mm_loadu_si128(src.add(i) as *const __m128i);
        _mm_storeu_si128(dst.add(i) as *mut __m128i, _mm_add_epi8(a, b));
        i += 16;
    }
    portable::add_bytes(dst.add(i), src.add(i), w - i);
}

/// SSE2 implementation of [`diff_bytes`](super::portable::diff_bytes).
///
/// # Safety
///
/// See [`portable::diff_bytes`]. The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn diff_bytes(dst: *mut u8, src1: *const u8, src2: *const u8, w: usize) {
    let vectorized = w & !15;
    let mut i = 0;
    while i < vectorized {
        let a = _mm_loadu_si128(src1.add(i) as *const __m128i);
        let b = _mm_loadu_si128(src2.add(i) as *const __m128i);
        _mm_storeu_si128(dst.add(i) as *mut __m128i, _mm_sub_epi8(a, b));
        i += 16;
    }
    portable::diff_bytes(dst.add(i), src1.add(i), src2.add(i), w - i);
}

/// SSE2 implementation of
/// [`sub_hfyu_median_prediction`](super::portable::sub_hfyu_median_prediction).
///
/// The predictor for sample `i` only depends on the inputs at `i - 1` and `i`, so 16 samples are
/// predicted at once from the rows shifted by one byte.
///
/// # Safety
///
/// See [`portable::sub_hfyu_median_prediction`]. The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn sub_hfyu_median_prediction(
    dst: *mut u8,
    src1: *const u8,
    src2: *const u8,
    w: usize,
    left: &mut u8,
    left_top: &mut u8,
) {
    if w <= 16 {
        portable::sub_hfyu_median_prediction(dst, src1, src2, w, left, left_top);
        return;
    }

    // The first sample takes its neighbours from the caller.
    portable::sub_hfyu_median_prediction(dst, src1, src2, 1, left, left_top);

    let mut i = 1;
    while i + 16 <= w {
        let top = _mm_loadu_si128(src1.add(i) as *const __m128i);
        let top_left = _mm_loadu_si128(src1.add(i - 1) as *const __m128i);
        let l = _mm_loadu_si128(src2.add(i - 1) as *const __m128i);
        let cur = _mm_loadu_si128(src2.add(i) as *const __m128i);

        let gradient = _mm_sub_epi8(_mm_add_epi8(l, top), top_left);
        let lo = _mm_min_epu8(l, top);
        let hi = _mm_max_epu8(l, top);
        let pred = _mm_max_epu8(lo, _mm_min_epu8(hi, gradient));
        _mm_storeu_si128(dst.add(i) as *mut __m128i, _mm_sub_epi8(cur, pred));
        i += 16;
    }

    *left = *src2.add(i - 1);
    *left_top = *src1.add(i - 1);
    portable::sub_hfyu_median_prediction(
        dst.add(i),
        src1.add(i),
        src2.add(i),
        w - i,
        left,
        left_top,
    );
}
