//! SSE2 block statistics.

use crate::simd::{hsum_epi32, hsum_sad, widen_hi, widen_lo};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// SSE2 implementation of [`pix_norm1`](super::portable::pix_norm1).
///
/// # Safety
///
/// See [`PixStatFn`](super::PixStatFn). The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn pix_norm1(pix: *const u8, stride: usize) -> u32 {
    let mut acc = _mm_setzero_si128();
    for y in 0..16 {
        let row = _mm_loadu_si128(pix.add(y * stride) as *const __m128i);
        let (lo, hi) = (widen_lo(row), widen_hi(row));
        acc = _mm_add_epi32(acc, _mm_madd_epi16(lo, lo));
        acc = _mm_add_epi32(acc, _mm_madd_epi16(hi, hi));
    }
    hsum_epi32(acc)
}

/// SSE2 implementation of [`pix_sum16`](super::portable::pix_sum16).
///
/// # Safety
///
/// See [`PixStatFn`](super::PixStatFn). The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn pix_sum16(pix: *const u8, stride: usize) -> u32 {
    let zero = _mm_setzero_si128();
    let mut acc = _mm_setzero_si128();
    for y in 0..16 {
        let row = _mm_loadu_si128(pix.add(y * stride) as *const __m128i);
        acc = _mm_add_epi64(acc, _mm_sad_epu8(row, zero));
    }
    hsum_sad(acc)
}
