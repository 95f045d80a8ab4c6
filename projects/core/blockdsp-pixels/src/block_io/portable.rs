//! Scalar block I/O kernels.

use super::{BLOCK_LEN, MACROBLOCK_BLOCKS};
use blockdsp_common::pixel::{clip, clip_u8};

/// Writes `clamp(c, 0, 255)` for every coefficient of the block.
///
/// # Safety
///
/// - `block` must be valid for reads of 64 `i16` values
/// - `pixels` must be valid for writes of an 8x8 region with row stride `stride`
pub unsafe fn put_pixels_clamped(block: *const i16, pixels: *mut u8, stride: usize) {
    debug_assert!(stride >= 8);
    for y in 0..8 {
        let row = pixels.add(y * stride);
        for x in 0..8 {
            *row.add(x) = clip_u8(*block.add(y * 8 + x) as i32);
        }
    }
}

/// Writes `clamp(c, -128, 127) + 128` for every coefficient of the block.
///
/// # Safety
///
/// Same requirements as [`put_pixels_clamped`].
pub unsafe fn put_signed_pixels_clamped(block: *const i16, pixels: *mut u8, stride: usize) {
    debug_assert!(stride >= 8);
    for y in 0..8 {
        let row = pixels.add(y * stride);
        for x in 0..8 {
            *row.add(x) = (clip(*block.add(y * 8 + x) as i32, -128, 127) + 128) as u8;
        }
    }
}

/// Adds the block onto the pixels, saturating to `0..=255`.
///
/// # Safety
///
/// - `block` must be valid for reads of 64 `i16` values
/// - `pixels` must be valid for reads and writes of an 8x8 region with row stride `stride`
pub unsafe fn add_pixels_clamped(block: *const i16, pixels: *mut u8, stride: usize) {
    debug_assert!(stride >= 8);
    for y in 0..8 {
        let row = pixels.add(y * stride);
        for x in 0..8 {
            let p = row.add(x);
            *p = clip_u8(*p as i32 + *block.add(y * 8 + x) as i32);
        }
    }
}

/// Widens an 8x8 pixel region into the block.
///
/// # Safety
///
/// - `block` must be valid for writes of 64 `i16` values
/// - `pixels` must be valid for reads of an 8x8 region with row stride `stride`
pub unsafe fn get_pixels(block: *mut i16, pixels: *const u8, stride: usize) {
    debug_assert!(stride >= 8);
    for y in 0..8 {
        let row = pixels.add(y * stride);
        for x in 0..8 {
            *block.add(y * 8 + x) = *row.add(x) as i16;
        }
    }
}

/// Stores `s1 - s2` for two 8x8 regions sharing a stride.
///
/// # Safety
///
/// - `block` must be valid for writes of 64 `i16` values
/// - `s1` and `s2` must be valid for reads of an 8x8 region with row stride `stride`
pub unsafe fn diff_pixels(block: *mut i16, s1: *const u8, s2: *const u8, stride: usize) {
    debug_assert!(stride >= 8);
    for y in 0..8 {
        let a = s1.add(y * stride);
        let b = s2.add(y * stride);
        for x in 0..8 {
            *block.add(y * 8 + x) = *a.add(x) as i16 - *b.add(x) as i16;
        }
    }
}

/// Zeroes six consecutive blocks.
///
/// # Safety
///
/// `blocks` must be valid for writes of 384 `i16` values.
pub unsafe fn clear_blocks(blocks: *mut i16) {
    core::ptr::write_bytes(blocks, 0, BLOCK_LEN * MACROBLOCK_BLOCKS);
}
