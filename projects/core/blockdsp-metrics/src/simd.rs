//! SSE2 helpers shared by the metric kernels.
//!
//! Differences and transforms run in 16-bit lanes; sums are widened to 32 bits with `pmaddwd`
//! before they can overflow.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Loads a `W` byte row (16 or 8). The upper half is zero for 8 byte rows.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn load_row<const W: usize>(src: *const u8) -> __m128i {
    if W == 16 {
        _mm_loadu_si128(src as *const __m128i)
    } else {
        _mm_loadl_epi64(src as *const __m128i)
    }
}

/// Zero extends bytes `0..8` to 16-bit lanes.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn widen_lo(v: __m128i) -> __m128i {
    _mm_unpacklo_epi8(v, _mm_setzero_si128())
}

/// Zero extends bytes `8..16` to 16-bit lanes.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn widen_hi(v: __m128i) -> __m128i {
    _mm_unpackhi_epi8(v, _mm_setzero_si128())
}

/// `|v|` per 16-bit lane. Lanes never hold `i16::MIN`.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn abs_epi16(v: __m128i) -> __m128i {
    _mm_max_epi16(v, _mm_sub_epi16(_mm_setzero_si128(), v))
}

/// Adds adjacent 16-bit lanes into 32-bit lanes.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn pair_sum(v: __m128i) -> __m128i {
    _mm_madd_epi16(v, _mm_set1_epi16(1))
}

/// Sum of the four 32-bit lanes.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn hsum_epi32(v: __m128i) -> u32 {
    let v = _mm_add_epi32(v, _mm_shuffle_epi32::<0b01_00_11_10>(v));
    let v = _mm_add_epi32(v, _mm_shuffle_epi32::<0b10_11_00_01>(v));
    _mm_cvtsi128_si32(v) as u32
}

/// Sum of the two 64-bit lanes produced by `psadbw`, truncated to 32 bits.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn hsum_sad(v: __m128i) -> u32 {
    _mm_cvtsi128_si32(_mm_add_epi64(v, _mm_srli_si128::<8>(v))) as u32
}

/// 8-point Hadamard butterflies across the eight registers, lane by lane.
#[inline(always)]
pub(crate) unsafe fn butterfly8(r: &mut [__m128i; 8]) {
    for span in [1, 2, 4] {
        for base in (0..8).step_by(2 * span) {
            for j in base..base + span {
                let (a, b) = (r[j], r[j + span]);
                r[j] = _mm_add_epi16(a, b);
                r[j + span] = _mm_sub_epi16(a, b);
            }
        }
    }
}

/// Transposes an 8x8 matrix of 16-bit values held one row per register.
#[inline(always)]
pub(crate) unsafe fn transpose8x8_epi16(r: &mut [__m128i; 8]) {
    let a0 = _mm_unpacklo_epi16(r[0], r[1]);
    let a1 = _mm_unpackhi_epi16(r[0], r[1]);
    let a2 = _mm_unpacklo_epi16(r[2], r[3]);
    let a3 = _mm_unpackhi_epi16(r[2], r[3]);
    let a4 = _mm_unpacklo_epi16(r[4], r[5]);
    let a5 = _mm_unpackhi_epi16(r[4], r[5]);
    let a6 = _mm_unpacklo_epi16(r[6], r[7]);
    let a7 = _mm_unpackhi_epi16(r[6], r[7]);

    let b0 = _mm_unpacklo_epi32(a0, a2);
    let b1 = _mm_unpackhi_epi32(a0, a2);
    let b2 = _mm_unpacklo_epi32(a1, a3);
    let b3 = _mm_unpackhi_epi32(a1, a3);
    let b4 = _mm_unpacklo_epi32(a4, a6);
    let b5 = _mm_unpackhi_epi32(a4, a6);
    let b6 = _mm_unpacklo_epi32(a5, a7);
    let b7 = _mm_unpackhi_epi32(a5, a7);

    r[0] = _mm_unpacklo_epi64(b0, b4);
    r[1] = _mm_unpackhi_epi64(b0, b4);
    r[2] = _mm_unpacklo_epi64(b1, b5);
    r[3] = _mm_unpackhi_epi64(b1, b5);
    r[4] = _mm_unpacklo_epi64(b2, b6);
    r[5] = _mm_unpackhi_epi64(b2, b6);
    r[6] = _mm_unpacklo_epi64(b3, b7);
    r[7] = _mm_unpackhi_epi64(b3, b7);
}

/// Mask keeping 16-bit lanes `0..7` and clearing lane 7.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn drop_last_lane() -> __m128i {
    _mm_set_epi16(0, -1, -1, -1, -1, -1, -1, -1)
}
