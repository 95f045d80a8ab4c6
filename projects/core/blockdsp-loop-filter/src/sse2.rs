//! SSE2 loop filter.
//!
//! The eight positions along the edge are filtered at once in 16-bit lanes; the corrected
//! samples are saturated back to bytes by `packuswb`. The horizontal filter transposes the 8x4
//! strip into four registers first, like the scalar tile.

use crate::strength::STRENGTH;
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Arithmetic shift right by `SHIFT` rounding towards zero, as integer division does.
#[inline]
#[target_feature(enable = "sse2")]
unsafe fn div_trunc<const SHIFT: i32>(v: __m128i) -> __m128i {
    let negative = _mm_srai_epi16::<15>(v);
    let bias = _mm_and_si128(negative, _mm_set1_epi16(((1 << SHIFT) - 1) as i16));
    _mm_srai_epi16::<SHIFT>(_mm_add_epi16(v, bias))
}

/// Filters `p0, p1 | p2, p3` in 16-bit lanes.
///
/// See [`filter_samples`](crate::portable::filter_samples).
#[inline]
#[target_feature(enable = "sse2")]
unsafe fn filter_lanes(p: [__m128i; 4], strength: i16) -> [__m128i; 4] {
    let [p0, p1, p2, p3] = p;
    let zero = _mm_setzero_si128();
    let outer = _mm_sub_epi16(p0, p3);

    let d = div_trunc::<3>(_mm_add_epi16(outer, _mm_slli_epi16::<2>(_mm_sub_epi16(p2, p1))));
    let sign = _mm_srai_epi16::<15>(d);
    let ad = _mm_sub_epi16(_mm_xor_si128(d, sign), sign);

    // |d1| = min(|d|, max(2S - |d|, 0)), with the sign of d.
    let fold = _mm_max_epi16(_mm_sub_epi16(_mm_set1_epi16(2 * strength), ad), zero);
    let magnitude = _mm_min_epi16(ad, fold);
    let d1 = _mm_sub_epi16(_mm_xor_si128(magnitude, sign), sign);

    let ad1 = _mm_srli_epi16::<1>(magnitude);
    let d2 = _mm_max_epi16(
        _mm_min_epi16(div_trunc::<2>(outer), ad1),
        _mm_sub_epi16(zero, ad1),
    );

    [
        _mm_sub_epi16(p0, d2),
        _mm_add_epi16(p1, d1),
        _mm_sub_epi16(p2, d1),
        _mm_add_epi16(p3, d2),
    ]
}

/// SSE2 implementation of [`h263_v_loop_filter`](crate::portable::h263_v_loop_filter).
///
/// # Safety
///
/// See [`LoopFilterFn`](crate::LoopFilterFn). The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn h263_v_loop_filter(src: *mut u8, stride: usize, qscale: u32) {
    debug_assert!(qscale < crate::MAX_QSCALE);
    let strength = STRENGTH[qscale as usize] as i16;
    let top = src.sub(2 * stride);
    let zero = _mm_setzero_si128();

    let mut rows = [zero; 4];
    for (r, row) in rows.iter_mut().enumerate() {
        let bytes = _mm_loadl_epi64(top.add(r * stride) as *const __m128i);
        *row = _mm_unpacklo_epi8(bytes, zero);
    }
    let filtered = filter_lanes(rows, strength);
    for (r, row) in filtered.into_iter().enumerate() {
        let packed = _mm_packus_epi16(row, row);
        _mm_storel_epi64(top.add(r * stride) as *mut __m128i, packed);
    }
}

/// SSE2 implementation of [`h263_h_loop_filter`](crate::portable::h263_h_loop_filter).
///
/// # Safety
///
/// See [`LoopFilterFn`](crate::LoopFilterFn). The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn h263_h_loop_filter(src: *mut u8, stride: usize, qscale: u32) {
    debug_assert!(qscale < crate::MAX_QSCALE);
    let strength = STRENGTH[qscale as usize] as i16;
    let left = src.sub(2);
    let zero = _mm_setzero_si128();

    let load = |y: usize| _mm_cvtsi32_si128((left.add(y * stride) as *const i32).read_unaligned());
    let a0 = _mm_unpacklo_epi8(load(0), load(1));
    let a1 = _mm_unpacklo_epi8(load(2), load(3));
    let a2 = _mm_unpacklo_epi8(load(4), load(5));
    let a3 = _mm_unpacklo_epi8(load(6), load(7));
    let b0 = _mm_unpacklo_epi16(a0, a1);
    let b1 = _mm_unpacklo_epi16(a2, a3);
    // c01 holds columns 0 and 1 of the strip, c23 columns 2 and 3, eight rows each.
    let c01 = _mm_unpacklo_epi32(b0, b1);
    let c23 = _mm_unpackhi_epi32(b0, b1);

    let [p0, p1, p2, p3] = filter_lanes(
        [
            _mm_unpacklo_epi8(c01, zero),
            _mm_unpackhi_epi8(c01, zero),
            _mm_unpacklo_epi8(c23, zero),
            _mm_unpackhi_epi8(c23, zero),
        ],
        strength,
    );

    let q01 = _mm_packus_epi16(p0, p1);
    let q23 = _mm_packus_epi16(p2, p3);
    let d0 = _mm_unpacklo_epi8(q01, q23);
    let d1 = _mm_unpackhi_epi8(q01, q23);
    // Four bytes per row: rows 0..4 in the first register, 4..8 in the second.
    let mut halves = [_mm_unpacklo_epi8(d0, d1), _mm_unpackhi_epi8(d0, d1)];
    for (half, rows) in halves.iter_mut().enumerate() {
        for y in 0..4 {
            let row = left.add((half * 4 + y) * stride) as *mut i32;
            row.write_unaligned(_mm_cvtsi128_si32(*rows));
            *rows = _mm_srli_si128::<4>(*rows);
        }
    }
}
