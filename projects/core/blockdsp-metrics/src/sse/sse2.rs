//! SSE2 sum of squared differences.

use crate::context::MetricContext;
use crate::simd::{hsum_epi32, load_row, widen_hi, widen_lo};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// SSE2 implementation of [`sse`](super::portable::sse).
///
/// # Safety
///
/// See [`MetricFn`](crate::MetricFn). The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn sse<const W: usize>(
    _ctx: Option<&MetricContext>,
    pix1: *const u8,
    pix2: *const u8,
    stride: usize,
    h: usize,
) -> u32 {
    let mut acc = _mm_setzero_si128();
    for y in 0..h {
        let a = load_row::<W>(pix1.add(y * stride));
        let b = load_row::<W>(pix2.add(y * stride));
        let lo = _mm_sub_epi16(widen_lo(a), widen_lo(b));
        acc = _mm_add_epi32(acc, _mm_madd_epi16(lo, lo));
        if W == 16 {
            let hi = _mm_sub_epi16(widen_hi(a), widen_hi(b));
            acc = _mm_add_epi32(acc, _mm_madd_epi16(hi, hi));
        }
    }
    hsum_epi32(acc)
}
