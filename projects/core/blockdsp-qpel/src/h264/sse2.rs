//! SSE2 H.264 lowpass filters.
//!
//! The two dimensional filter needs 32-bit intermediates and uses the scalar kernel.

use super::{portable, H264Lowpass};
use crate::filter::FilterStage;
use crate::ops::Sse2;
use crate::simd::{round_shift, store, widen};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// 6-tap filter over eight 16-bit lanes; `t[k]` holds the samples at offset `k - 2`.
#[inline]
#[target_feature(enable = "sse2")]
unsafe fn filter6(t: &[__m128i; 6], bias: __m128i) -> __m128i {
    let c20 = _mm_mullo_epi16(_mm_add_epi16(t[2], t[3]), _mm_set1_epi16(20));
    let c5 = _mm_mullo_epi16(_mm_add_epi16(t[1], t[4]), _mm_set1_epi16(5));
    let c1 = _mm_add_epi16(t[0], t[5]);
    round_shift::<5>(_mm_add_epi16(_mm_sub_epi16(c20, c5), c1), bias)
}

/// SSE2 implementation of [`h_lowpass`](super::portable::h_lowpass).
///
/// # Safety
///
/// See [`H264Lowpass`]. The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn h_lowpass<const N: usize, const AVG: bool>(
    dst: *mut u8,
    src: *const u8,
    dst_stride: usize,
    src_stride: usize,
) {
    let bias = _mm_set1_epi16(FilterStage::H264.bias as i16);
    for y in 0..N {
        let row = src.add(y * src_stride).sub(2);
        let mut lanes = [_mm_setzero_si128(); 2];
        for (half, out) in lanes.iter_mut().enumerate().take(N.div_ceil(8)) {
            let base = row.add(half * 8);
            let taps = [
                widen::<N>(base),
                widen::<N>(base.add(1)),
                widen::<N>(base.add(2)),
                widen::<N>(base.add(3)),
                widen::<N>(base.add(4)),
                widen::<N>(base.add(5)),
            ];
            *out = filter6(&taps, bias);
        }
        store::<N, AVG>(dst.add(y * dst_stride), lanes[0], lanes[1]);
    }
}

/// SSE2 implementation of [`v_lowpass`](super::portable::v_lowpass).
///
/// # Safety
///
/// See [`H264Lowpass`]. The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn v_lowpass<const N: usize, const AVG: bool>(
    dst: *mut u8,
    src: *const u8,
    dst_stride: usize,
    src_stride: usize,
) {
    let bias = _mm_set1_epi16(FilterStage::H264.bias as i16);
    let top = src.sub(2 * src_stride);
    for y in 0..N {
        let rows = [
            top.add(y * src_stride),
            top.add((y + 1) * src_stride),
            top.add((y + 2) * src_stride),
            top.add((y + 3) * src_stride),
            top.add((y + 4) * src_stride),
            top.add((y + 5) * src_stride),
        ];
        let mut lanes = [_mm_setzero_si128(); 2];
        for (half, out) in lanes.iter_mut().enumerate().take(N.div_ceil(8)) {
            let x = half * 8;
            let taps = [
                widen::<N>(rows[0].add(x)),
                widen::<N>(rows[1].add(x)),
                widen::<N>(rows[2].add(x)),
                widen::<N>(rows[3].add(x)),
                widen::<N>(rows[4].add(x)),
                widen::<N>(rows[5].add(x)),
            ];
            *out = filter6(&taps, bias);
        }
        store::<N, AVG>(dst.add(y * dst_stride), lanes[0], lanes[1]);
    }
}

impl H264Lowpass for Sse2 {
    #[inline(always)]
    unsafe fn h_lowpass<const N: usize, const AVG: bool>(
        dst: *mut u8,
        src: *const u8,
        dst_stride: usize,
        src_stride: usize,
    ) {
        h_lowpass::<N, AVG>(dst, src, dst_stride, src_stride);
    }

    #[inline(always)]
    unsafe fn v_lowpass<const N: usize, const AVG: bool>(
        dst: *mut u8,
        src: *const u8,
        dst_stride: usize,
        src_stride: usize,
    ) {
        v_lowpass::<N, AVG>(dst, src, dst_stride, src_stride);
    }

    #[inline(always)]
    unsafe fn hv_lowpass<const N: usize, const AVG: bool>(
        dst: *mut u8,
        src: *const u8,
        dst_stride: usize,
        src_stride: usize,
    ) {
        portable::hv_lowpass::<N, AVG>(dst, src, dst_stride, src_stride);
    }
}
