//! Scalar half-pel kernels. These define the exact output of every tier.

use blockdsp_common::pixel::rnd_avg;

#[inline(always)]
unsafe fn store<const AVG: bool>(dst: *mut u8, value: u8) {
    *dst = if AVG { rnd_avg(*dst, value) } else { value };
}

/// Copies (or averages into `dst`) a `W x h` block.
///
/// # Safety
///
/// See [`PixelsFn`](super::PixelsFn).
pub unsafe fn copy<const W: usize, const AVG: bool>(
    mut dst: *mut u8,
    mut src: *const u8,
    stride: usize,
    h: usize,
) {
    debug_assert!(stride >= W);
    for _ in 0..h {
        for x in 0..W {
            store::<AVG>(dst.add(x), *src.add(x));
        }
        src = src.add(stride);
        dst = dst.add(stride);
    }
}

/// Horizontal half sample.
///
/// # Safety
///
/// See [`PixelsFn`](super::PixelsFn). Reads `W + 1` columns.
pub unsafe fn x2<const W: usize, const AVG: bool, const NO_RND: bool>(
    mut dst: *mut u8,
    mut src: *const u8,
    stride: usize,
    h: usize,
) {
    debug_assert!(stride >= W);
    let bias = if NO_RND { 0 } else { 1 };
    for _ in 0..h {
        for x in 0..W {
            let sum = *src.add(x) as u16 + *src.add(x + 1) as u16 + bias;
            store::<AVG>(dst.add(x), (sum >> 1) as u8);
        }
        src = src.add(stride);
        dst = dst.add(stride);
    }
}

/// Vertical half sample.
///
/// # Safety
///
/// See [`PixelsFn`](super::PixelsFn). Reads `h + 1` rows.
pub unsafe fn y2<const W: usize, const AVG: bool, const NO_RND: bool>(
    mut dst: *mut u8,
    mut src: *const u8,
    stride: usize,
    h: usize,
) {
    debug_assert!(stride >= W);
    let bias = if NO_RND { 0 } else { 1 };
    for _ in 0..h {
        let below = src.add(stride);
        for x in 0..W {
            let sum = *src.add(x) as u16 + *below.add(x) as u16 + bias;
            store::<AVG>(dst.add(x), (sum >> 1) as u8);
        }
        src = below;
        dst = dst.add(stride);
    }
}

/// Diagonal half sample.
///
/// # Safety
///
/// See [`PixelsFn`](super::PixelsFn). Reads `W + 1` columns of `h + 1` rows.
pub unsafe fn xy2<const W: usize, const AVG: bool, const NO_RND: bool>(
    mut dst: *mut u8,
    mut src: *const u8,
    stride: usize,
    h: usize,
) {
    debug_assert!(stride >= W);
    let bias = if NO_RND { 1 } else { 2 };
    for _ in 0..h {
        let below = src.add(stride);
        for x in 0..W {
            let sum = *src.add(x) as u16
                + *src.add(x + 1) as u16
                + *below.add(x) as u16
                + *below.add(x + 1) as u16
                + bias;
            store::<AVG>(dst.add(x), (sum >> 2) as u8);
        }
        src = below;
        dst = dst.add(stride);
    }
}
