//! SSSE3 Hadamard SATD, using `pabsw` for the absolute values.

use super::sse2::transform8x8;
use crate::context::MetricContext;
use crate::simd::{hsum_epi32, pair_sum};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// SSSE3 implementation of [`hadamard8x8`](super::portable::hadamard8x8).
///
/// # Safety
///
/// Both pointers must be valid for 8 rows of 8 bytes. The CPU must support SSSE3.
#[target_feature(enable = "sse2,ssse3")]
pub unsafe fn hadamard8x8(pix1: *const u8, pix2: *const u8, stride: usize) -> u32 {
    let coefficients = transform8x8(pix1, pix2, stride);
    let mut acc = _mm_setzero_si128();
    for c in coefficients {
        acc = _mm_add_epi32(acc, pair_sum(_mm_abs_epi16(c)));
    }
    hsum_epi32(acc)
}

/// SSSE3 implementation of [`hadamard8_diff`](super::portable::hadamard8_diff).
///
/// # Safety
///
/// See [`MetricFn`](crate::MetricFn). `h` must be 8, or 16 when `W` is 16. The CPU must
/// support SSSE3.
#[target_feature(enable = "sse2,ssse3")]
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
