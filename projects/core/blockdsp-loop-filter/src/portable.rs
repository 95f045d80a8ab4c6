//! Scalar loop filter.

use crate::strength::STRENGTH;
use blockdsp_common::pixel::clip_u8;

/// Filters one set of samples `p0, p1 | p2, p3` across an edge with strength `s`.
#[inline(always)]
pub fn filter_samples(p: [u8; 4], s: i32) -> [u8; 4] {
    let [p0, p1, p2, p3] = p.map(i32::from);

    let d = (p0 - p3 + 4 * (p2 - p1)) / 8;
    let d1 = if d < -2 * s {
        0
    } else if d < -s {
        -2 * s - d
    } else if d < s {
        d
    } else if d < 2 * s {
        2 * s - d
    } else {
        0
    };

    let ad1 = d1.abs() >> 1;
    let d2 = ((p0 - p3) / 4).clamp(-ad1, ad1);

    // p0 and p3 move towards each other by at most a quarter of their distance.
    [
        (p0 - d2) as u8,
        clip_u8(p1 + d1),
        clip_u8(p2 - d1),
        (p3 + d2) as u8,
    ]
}

/// Filters the 8 columns of a tile held as four rows `p0..p3`.
#[inline(always)]
fn filter_tile(tile: &mut [[u8; 8]; 4], s: i32) {
    for x in 0..8 {
        let out = filter_samples([tile[0][x], tile[1][x], tile[2][x], tile[3][x]], s);
        for (row, value) in tile.iter_mut().zip(out) {
            row[x] = value;
        }
    }
}

/// Filters the horizontal edge above `src`: rows `-2..=1`, columns `0..8`.
///
/// # Safety
///
/// See [`LoopFilterFn`](crate::LoopFilterFn).
pub unsafe fn h263_v_loop_filter(src: *mut u8, stride: usize, qscale: u32) {
    debug_assert!(qscale < crate::MAX_QSCALE);
    let s = STRENGTH[qscale as usize] as i32;
    let top = src.sub(2 * stride);

    let mut tile = [[0u8; 8]; 4];
    for (r, row) in tile.iter_mut().enumerate() {
        core::ptr::copy_nonoverlapping(top.add(r * stride), row.as_mut_ptr(), 8);
    }
    filter_tile(&mut tile, s);
    for (r, row) in tile.iter().enumerate() {
        core::ptr::copy_nonoverlapping(row.as_ptr(), top.add(r * stride), 8);
    }
}

/// Filters the vertical edge left of `src`: columns `-2..=1`, rows `0..8`.
///
/// The four columns are transposed into a tile, filtered like a horizontal edge and written back.
///
/// # Safety
///
/// See [`LoopFilterFn`](crate::LoopFilterFn).
pub unsafe fn h263_h_loop_filter(src: *mut u8, stride: usize, qscale: u32) {
    debug_assert!(qscale < crate::MAX_QSCALE);
    let s = STRENGTH[qscale as usize] as i32;
    let left = src.sub(2);

    let mut tile = [[0u8; 8]; 4];
    for y in 0..8 {
        let row = left.add(y * stride);
        for (c, column) in tile.iter_mut().enumerate() {
            column[y] = *row.add(c);
        }
    }
    filter_tile(&mut tile, s);
    for y in 0..8 {
        let row = left.add(y * stride);
        for (c, column) in tile.iter().enumerate() {
            *row.add(c) = column[y];
        }
    }
}
