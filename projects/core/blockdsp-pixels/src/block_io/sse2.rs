//! SSE2 block I/O kernels.

use super::{BLOCK_LEN, MACROBLOCK_BLOCKS};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// SSE2 implementation of [`put_pixels_clamped`](super::portable::put_pixels_clamped).
///
/// # Safety
///
/// Same requirements as the portable kernel. The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn put_pixels_clamped(block: *const i16, pixels: *mut u8, stride: usize) {
    debug_assert!(stride >= 8);
    let block = block as *const __m128i;
    // Two rows per iteration; packus saturates to 0..=255.
    for pair in 0..4 {
        let row0 = _mm_loadu_si128(block.add(pair * 2));
        let row1 = _mm_loadu_si128(block.add(pair * 2 + 1));
        let packed = _mm_packus_epi16(row0, row1);
        let dst = pixels.add(pair * 2 * stride);
        _mm_storel_epi64(dst as *mut __m128i, packed);
        _mm_storel_epi64(dst.add(stride) as *mut __m128i, _mm_srli_si128(packed, 8));
    }
}

/// SSE2 implementation of
/// [`put_signed_pixels_clamped`](super::portable::put_signed_pixels_clamped).
///
/// # Safety
///
/// Same requirements as the portable kernel. The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn put_signed_pixels_clamped(block: *const i16, pixels: *mut u8, stride: usize) {
    debug_assert!(stride >= 8);
    let block = block as *const __m128i;
    let bias = _mm_set1_epi8(-128);
    for pair in 0..4 {
        let row0 = _mm_loadu_si128(block.add(pair * 2));
        let row1 = _mm_loadu_si128(block.add(pair * 2 + 1));
        // Signed saturation to -128..=127, then flip the sign bit.
        let packed = _mm_add_epi8(_mm_packs_epi16(row0, row1), bias);
        let dst = pixels.add(pair * 2 * stride);
        _mm_storel_epi64(dst as *mut __m128i, packed);
        _mm_storel_epi64(dst.add(stride) as *mut __m128i, _mm_srli_si128(packed, 8));
    }
}

/// SSE2 implementation of [`add_pixels_clamped`](super::portable::add_pixels_clamped).
///
/// # Safety
///
/// Same requirements as the portable kernel. The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn add_pixels_clamped(block: *const i16, pixels: *mut u8, stride: usize) {
    debug_assert!(stride >= 8);
    let block = block as *const __m128i;
    let zero = _mm_setzero_si128();
    for pair in 0..4 {
        let dst0 = pixels.add(pair * 2 * stride);
        let dst1 = dst0.add(stride);
        let p0 = _mm_unpacklo_epi8(_mm_loadl_epi64(dst0 as *const __m128i), zero);
        let p1 = _mm_unpacklo_epi8(_mm_loadl_epi64(dst1 as *const __m128i), zero);
        let sum0 = _mm_adds_epi16(p0, _mm_loadu_si128(block.add(pair * 2)));
        let sum1 = _mm_adds_epi16(p1, _mm_loadu_si128(block.add(pair * 2 + 1)));
        let packed = _mm_packus_epi16(sum0, sum1);
        _mm_storel_epi64(dst0 as *mut __m128i, packed);
        _mm_storel_epi64(dst1 as *mut __m128i, _mm_srli_si128(packed, 8));
    }
}

/// SSE2 implementation of [`get_pixels`](super::portable::get_pixels).
///
/// # Safety
///
/// Same requirements as the portable kernel. The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn get_pixels(block: *mut i16, pixels: *const u8, stride: usize) {
    debug_assert!(stride >= 8);
    let block = block as *mut __m128i;
    let zero = _mm_setzero_si128();
    for y in 0..8 {
        let row = _mm_loadl_epi64(pixels.add(y * stride) as *const __m128i);
        _mm_storeu_si128(block.add(y), _mm_unpacklo_epi8(row, zero));
    }
}

/// SSE2 implementation of [`diff_pixels`](super::portable::diff_pixels).
///
/// # Safety
///
/// Same requirements as the portable kernel. The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn diff_pixels(block: *mut i16, s1: *const u8, s2: *const u8, stride: usize) {
    debug_assert!(stride >= 8);
    let block = block as *mut __m128i;
    let zero = _mm_setzero_si128();
    for y in 0..8 {
        let a = _mm_unpacklo_epi8(_mm_loadl_epi64(s1.add(y * stride) as *const __m128i), zero);
        let b = _mm_unpacklo_epi8(_mm_loadl_epi64(s2.add(y * stride) as *const __m128i), zero);
        _mm_storeu_si128(block.add(y), _mm_sub_epi16(a, b));
    }
}

/// SSE2 implementation of [`clear_blocks`](super::portable::clear_blocks).
///
/// # Safety
///
/// Same requirements as the portable kernel. The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn clear_blocks(blocks: *mut i16) {
    let blocks = blocks as *mut __m128i;
    let zero = _mm_setzero_si128();
    // 8 coefficients per register.
    for i in 0..BLOCK_LEN * MACROBLOCK_BLOCKS / 8 {
        _mm_storeu_si128(blocks.add(i), zero);
    }
}
