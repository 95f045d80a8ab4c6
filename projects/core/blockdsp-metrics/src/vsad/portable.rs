//! Scalar vertical SAD.

use crate::context::MetricContext;

/// `vsad16`.
///
/// # Safety
///
/// See [`MetricFn`](crate::MetricFn).
pub unsafe fn vsad16(
    _ctx: Option<&MetricContext>,
    pix1: *const u8,
    pix2: *const u8,
    stride: usize,
    h: usize,
) -> u32 {
    let mut score = 0u32;
    for y in 1..h {
        let (a, a_up) = (pix1.add(y * stride), pix1.add((y - 1) * stride));
        let (b, b_up) = (pix2.add(y * stride), pix2.add((y - 1) * stride));
        for x in 0..16 {
            let d = *a.add(x) as i32 - *b.add(x) as i32;
            let d_up = *a_up.add(x) as i32 - *b_up.add(x) as i32;
            score += (d - d_up).unsigned_abs();
        }
    }
    score
}

/// `vsad_intra16`; `pix2` is not read.
///
/// # Safety
///
/// See [`MetricFn`](crate::MetricFn).
pub unsafe fn vsad_intra16(
    _ctx: Option<&MetricContext>,
    pix: *const u8,
    _pix2: *const u8,
    stride: usize,
    h: usize,
) -> u32 {
    let mut score = 0u32;
    for y in 1..h {
        let (row, up) = (pix.add(y * stride), pix.add((y - 1) * stride));
        for x in 0..16 {
            score += (*row.add(x)).abs_diff(*up.add(x)) as u32;
        }
    }
    score
}
