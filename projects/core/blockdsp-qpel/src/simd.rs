//! SSE2 helpers shared by the lowpass kernels.
//!
//! Filters run in 16-bit lanes, eight outputs per register. Every intermediate of the 6 and
//! 8-tap filters over 8-bit input stays within `i16`.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Loads `min(W, 8)` bytes and widens them to 16-bit lanes.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn widen<const W: usize>(src: *const u8) -> __m128i {
    let bytes = if W >= 8 {
        _mm_loadl_epi64(src as *const __m128i)
    } else {
        _mm_cvtsi32_si128((src as *const i32).read_unaligned())
    };
    _mm_unpacklo_epi8(bytes, _mm_setzero_si128())
}

/// Packs 16-bit results with unsigned saturation and stores `N` bytes, merging them into `dst`
/// with the rounding average when `AVG` is set. `hi` is only used for 16 wide rows.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn store<const N: usize, const AVG: bool>(
    dst: *mut u8,
    lo: __m128i,
    hi: __m128i,
) {
    let packed = _mm_packus_epi16(lo, hi);
    match N {
        16 => {
            let value = if AVG {
                _mm_avg_epu8(_mm_loadu_si128(dst as *const __m128i), packed)
            } else {
                packed
            };
            _mm_storeu_si128(dst as *mut __m128i, value);
        }
        8 => {
            let value = if AVG {
                _mm_avg_epu8(_mm_loadl_epi64(dst as *const __m128i), packed)
            } else {
                packed
            };
            _mm_storel_epi64(dst as *mut __m128i, value);
        }
        _ => {
            let value = if AVG {
                let current = _mm_cvtsi32_si128((dst as *const i32).read_unaligned());
                _mm_avg_epu8(current, packed)
            } else {
                packed
            };
            (dst as *mut i32).write_unaligned(_mm_cvtsi128_si32(value));
        }
    }
}

/// `(sum + bias) >> shift` with an arithmetic shift, as the scalar filters do.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn round_shift<const SHIFT: i32>(sum: __m128i, bias: __m128i) -> __m128i {
    _mm_srai_epi16::<SHIFT>(_mm_add_epi16(sum, bias))
}
