//! SSE2 Hadamard SATD.
//!
//! The columns are transformed first, eight lanes at a time, then the block is transposed and
//! the rows go through the same butterflies. The coefficient set is the same as the scalar
//! row-then-column order.

use crate::context::MetricContext;
use crate::simd::{abs_epi16, butterfly8, hsum_epi32, pair_sum, transpose8x8_epi16, widen_lo};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Loads the 8x8 difference block and runs both transform passes.
#[inline(always)]
pub(crate) unsafe fn transform8x8(pix1: *const u8, pix2: *const u8, stride: usize) -> [__m128i; 8] {
    let mut rows = [_mm_setzero_si128(); 8];
    for (y, row) in rows.iter_mut().enumerate() {
        let a = widen_lo(_mm_loadl_epi64(pix1.add(y * stride) as *const __m128i));
        let b = widen_lo(_mm_loadl_epi64(pix2.add(y * stride) as *const __m128i));
        *row = _mm_sub_epi16(a, b);
    }
    butterfly8(&mut rows);
    transpose8x8_epi16(&mut rows);
    butterfly8(&mut rows);
    rows
}

/// SSE2 implementation of [`hadamard8x8`](super::portable::hadamard8x8).
///
/// # Safety
///
/// Both pointers must be valid for 8 rows of 8 bytes. The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn hadamard8x8(pix1: *const u8, pix2: *const u8, stride: usize) -> u32 {
    let coefficients = transform8x8(pix1, pix2, stride);
    let mut acc = _mm_setzero_si128();
    for c in coefficients {
        acc = _mm_add_epi32(acc, pair_sum(abs_epi16(c)));
    }
    hsum_epi32(acc)
}

/// SSE2 implementation of [`hadamard8_diff`](super::portable::hadamard8_diff).
///
/// # Safety
///
/// See [`MetricFn`](crate::MetricFn). `h` must be 8, or 16 when `W` is 16. The CPU must
/// support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn hadamard8_diff<const W: usize>(
    _ctx: Option<&MetricContext>,
    pix1: *const u8,
    pix2: *const u8,
    stride: usize,
    h: usize,
) -> u32 {
    debug_assert!(h == 8 || (W == 16 && h == 16));
    let mut sum = 0;
    for y in (0..h).step_by(8) {
        for x in (0..W).step_by(8) {
            let offset = y * stride + x;
            sum += hadamard8x8(pix1.add(offset), pix2.add(offset), stride);
        }
    }
    sum
}
