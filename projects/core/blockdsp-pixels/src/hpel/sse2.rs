//! SSE2 half-pel kernels.
//!
//! One register holds a full row for every width; 8 and 4 wide rows use the low half or low
//! dword. The rounding average is `pavgb`; the truncating one subtracts the carry bit back out
//! (`pavgb(a, b) - ((a ^ b) & 1)`). `xy2` sums in 16-bit lanes.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Loads a `W` byte row into the low bytes of a register.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn load_row<const W: usize>(src: *const u8) -> __m128i {
    match W {
        16 => _mm_loadu_si128(src as *const __m128i),
        8 => _mm_loadl_epi64(src as *const __m128i),
        _ => _mm_cvtsi32_si128((src as *const i32).read_unaligned()),
    }
}

/// Stores the low `W` bytes of a register.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn store_row<const W: usize>(dst: *mut u8, value: __m128i) {
    match W {
        16 => _mm_storeu_si128(dst as *mut __m128i, value),
        8 => _mm_storel_epi64(dst as *mut __m128i, value),
        _ => (dst as *mut i32).write_unaligned(_mm_cvtsi128_si32(value)),
    }
}

/// Stores a row, merging it with the destination first when `AVG` is set.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn put_row<const W: usize, const AVG: bool>(dst: *mut u8, value: __m128i) {
    let value = if AVG {
        _mm_avg_epu8(load_row::<W>(dst), value)
    } else {
        value
    };
    store_row::<W>(dst, value);
}

/// Per byte average with the selected rounding.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn average<const NO_RND: bool>(a: __m128i, b: __m128i) -> __m128i {
    let rounded = _mm_avg_epu8(a, b);
    if NO_RND {
        let carry = _mm_and_si128(_mm_xor_si128(a, b), _mm_set1_epi8(1));
        _mm_sub_epi8(rounded, carry)
    } else {
        rounded
    }
}

/// SSE2 implementation of [`copy`](super::portable::copy).
///
/// # Safety
///
/// See [`PixelsFn`](super::PixelsFn). The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn copy<const W: usize, const AVG: bool>(
    mut dst: *mut u8,
    mut src: *const u8,
    stride: usize,
    h: usize,
) {
    debug_assert!(stride >= W);
    for _ in 0..h {
        put_row::<W, AVG>(dst, load_row::<W>(src));
        src = src.add(stride);
        dst = dst.add(stride);
    }
}

/// SSE2 implementation of [`x2`](super::portable::x2).
///
/// # Safety
///
/// See [`PixelsFn`](super::PixelsFn). The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn x2<const W: usize, const AVG: bool, const NO_RND: bool>(
    mut dst: *mut u8,
    mut src: *const u8,
    stride: usize,
    h: usize,
) {
    debug_assert!(stride >= W);
    for _ in 0..h {
        let a = load_row::<W>(src);
        let b = load_row::<W>(src.add(1));
        put_row::<W, AVG>(dst, average::<NO_RND>(a, b));
        src = src.add(stride);
        dst = dst.add(stride);
    }
}

/// SSE2 implementation of [`y2`](super::portable::y2).
///
/// # Safety
///
/// See [`PixelsFn`](super::PixelsFn). The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn y2<const W: usize, const AVG: bool, const NO_RND: bool>(
    mut dst: *mut u8,
    mut src: *const u8,
    stride: usize,
    h: usize,
) {
    debug_assert!(stride >= W);
    let mut above = load_row::<W>(src);
    for _ in 0..h {
        src = src.add(stride);
        let below = load_row::<W>(src);
        put_row::<W, AVG>(dst, average::<NO_RND>(above, below));
        above = below;
        dst = dst.add(stride);
    }
}

/// Horizontal pair sums of a row, widened to 16 bits: `(low 8 lanes, high 8 lanes)`.
#[inline]
#[target_feature(enable = "sse2")]
unsafe fn pair_sums<const W: usize>(src: *const u8) -> (__m128i, __m128i) {
    let zero = _mm_setzero_si128();
    let a = load_row::<W>(src);
    let b = load_row::<W>(src.add(1));
    (
        _mm_add_epi16(_mm_unpacklo_epi8(a, zero), _mm_unpacklo_epi8(b, zero)),
        _mm_add_epi16(_mm_unpackhi_epi8(a, zero), _mm_unpackhi_epi8(b, zero)),
    )
}

/// SSE2 implementation of [`xy2`](super::portable::xy2).
///
/// # Safety
///
/// See [`PixelsFn`](super::PixelsFn). The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn xy2<const W: usize, const AVG: bool, const NO_RND: bool>(
    mut dst: *mut u8,
    mut src: *const u8,
    stride: usize,
    h: usize,
) {
    debug_assert!(stride >= W);
    let bias = _mm_set1_epi16(if NO_RND { 1 } else { 2 });
    let (mut above_lo, mut above_hi) = pair_sums::<W>(src);
    for _ in 0..h {
        src = src.add(stride);
        let (below_lo, below_hi) = pair_sums::<W>(src);
        let lo = _mm_srli_epi16(_mm_add_epi16(_mm_add_epi16(above_lo, below_lo), bias), 2);
        let hi = _mm_srli_epi16(_mm_add_epi16(_mm_add_epi16(above_hi, below_hi), bias), 2);
        put_row::<W, AVG>(dst, _mm_packus_epi16(lo, hi));
        above_lo = below_lo;
        above_hi = below_hi;
        dst = dst.add(stride);
    }
}
