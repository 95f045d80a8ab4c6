//! SSE2 basis helpers.
//!
//! The products `basis * scale` need 32 bits; they are rebuilt from `pmullw`/`pmulhw` halves,
//! rounded, then packed back, which cannot saturate for `|scale| < 256`. Larger scales take the
//! scalar loop.

use super::{portable, BASIS_SHIFT, MAX_SCALE, RECON_SHIFT};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// SSE2 implementation of [`add_8x8basis`](super::portable::add_8x8basis).
///
/// # Safety
///
/// See [`AddBasisFn`](super::AddBasisFn). The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn add_8x8basis(rem: *mut i16, basis: *const i16, scale: i32) {
    const SHIFT: i32 = (BASIS_SHIFT - RECON_SHIFT) as i32;
    if scale.unsigned_abs() >= MAX_SCALE as u32 {
        portable::add_8x8basis(rem, basis, scale);
        return;
    }
    let scale = _mm_set1_epi16(scale as i16);
    let bias = _mm_set1_epi32(1 << (SHIFT - 1));
    for i in (0..64).step_by(8) {
        let b = _mm_loadu_si128(basis.add(i) as *const __m128i);
        let lo = _mm_mullo_epi16(b, scale);
        let hi = _mm_mulhi_epi16(b, scale);
        let product_lo = _mm_srai_epi32::<SHIFT>(_mm_add_epi32(_mm_unpacklo_epi16(lo, hi), bias));
        let product_hi = _mm_srai_epi32::<SHIFT>(_mm_add_epi32(_mm_unpackhi_epi16(lo, hi), bias));
        let step = _mm_packs_epi32(product_lo, product_hi);

        let r = rem.add(i) as *mut __m128i;
        _mm_storeu_si128(r, _mm_add_epi16(_mm_loadu_si128(r), step));
    }
}
