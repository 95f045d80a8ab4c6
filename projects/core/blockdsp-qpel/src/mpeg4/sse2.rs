//! SSE2 MPEG-4 lowpass filters.
//!
//! The horizontal filter copies each row into a small buffer with the mirrored samples
//! materialized, so the taps become plain unaligned loads.

use super::{mirror, Mpeg4Lowpass};
use crate::filter::FilterStage;
use crate::ops::Sse2;
use crate::simd::{round_shift, store, widen};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// 8-tap filter over eight 16-bit lanes; `t[k]` holds the samples at offset `k - 3`.
#[inline]
#[target_feature(enable = "sse2")]
unsafe fn filter8(t: &[__m128i; 8], bias: __m128i) -> __m128i {
    let c20 = _mm_mullo_epi16(_mm_add_epi16(t[3], t[4]), _mm_set1_epi16(20));
    let c6 = _mm_mullo_epi16(_mm_add_epi16(t[2], t[5]), _mm_set1_epi16(6));
    let c3 = _mm_mullo_epi16(_mm_add_epi16(t[1], t[6]), _mm_set1_epi16(3));
    let c1 = _mm_add_epi16(t[0], t[7]);
    let sum = _mm_sub_epi16(_mm_add_epi16(c20, c3), _mm_add_epi16(c6, c1));
    round_shift::<5>(sum, bias)
}

/// SSE2 implementation of [`h_lowpass`](super::portable::h_lowpass).
///
/// # Safety
///
/// See [`Mpeg4Lowpass::h_lowpass`]. The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn h_lowpass<const N: usize, const AVG: bool, const NO_RND: bool>(
    mut dst: *mut u8,
    mut src: *const u8,
    dst_stride: usize,
    src_stride: usize,
    h: usize,
) {
    let bias = _mm_set1_epi16(FilterStage::mpeg4(NO_RND).bias as i16);
    // extended[k] holds sample k - 3.
    let mut extended = [0u8; 16 + 8];
    for _ in 0..h {
        for (k, sample) in extended.iter_mut().enumerate().take(N + 7) {
            *sample = *src.add(mirror(k as isize - 3, N));
        }
        let row = extended.as_ptr();

        let mut lanes = [_mm_setzero_si128(); 2];
        for (half, out) in lanes.iter_mut().enumerate().take(N / 8) {
            let base = row.add(half * 8);
            let taps = [
                widen::<8>(base),
                widen::<8>(base.add(1)),
                widen::<8>(base.add(2)),
                widen::<8>(base.add(3)),
                widen::<8>(base.add(4)),
                widen::<8>(base.add(5)),
                widen::<8>(base.add(6)),
                widen::<8>(base.add(7)),
            ];
            *out = filter8(&taps, bias);
        }
        store::<N, AVG>(dst, lanes[0], lanes[1]);

        src = src.add(src_stride);
        dst = dst.add(dst_stride);
    }
}

/// SSE2 implementation of [`v_lowpass`](super::portable::v_lowpass).
///
/// # Safety
///
/// See [`Mpeg4Lowpass::v_lowpass`]. The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn v_lowpass<const N: usize, const AVG: bool, const NO_RND: bool>(
    dst: *mut u8,
    src: *const u8,
    dst_stride: usize,
    src_stride: usize,
) {
    let bias = _mm_set1_epi16(FilterStage::mpeg4(NO_RND).bias as i16);
    for y in 0..N {
        let mut rows = [src; 8];
        for (k, row) in rows.iter_mut().enumerate() {
            *row = src.add(mirror(y as isize + k as isize - 3, N) * src_stride);
        }

        let mut lanes = [_mm_setzero_si128(); 2];
        for (half, out) in lanes.iter_mut().enumerate().take(N / 8) {
            let x = half * 8;
            let taps = [
                widen::<8>(rows[0].add(x)),
                widen::<8>(rows[1].add(x)),
                widen::<8>(rows[2].add(x)),
                widen::<8>(rows[3].add(x)),
                widen::<8>(rows[4].add(x)),
                widen::<8>(rows[5].add(x)),
                widen::<8>(rows[6].add(x)),
                widen::<8>(rows[7].add(x)),
            ];
            *out = filter8(&taps, bias);
        }
        store::<N, AVG>(dst.add(y * dst_stride), lanes[0], lanes[1]);
    }
}

impl Mpeg4Lowpass for Sse2 {
    #[inline(always)]
    unsafe fn h_lowpass<const N: usize, const AVG: bool, const NO_RND: bool>(
        dst: *mut u8,
        src: *const u8,
        dst_stride: usize,
        src_stride: usize,
        h: usize,
    ) {
        h_lowpass::<N, AVG, NO_RND>(dst, src, dst_stride, src_stride, h);
    }

    #[inline(always)]
    unsafe fn v_lowpass<const N: usize, const AVG: bool, const NO_RND: bool>(
        dst: *mut u8,
        src: *const u8,
        dst_stride: usize,
        src_stride: usize,
    ) {
        v_lowpass::<N, AVG, NO_RND>(dst, src, dst_stride, src_stride);
    }
}
