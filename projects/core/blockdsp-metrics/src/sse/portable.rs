//! Scalar sum of squared differences.

use crate::context::MetricContext;

/// `Σ (a - b)²` over `W x h`.
///
/// # Safety
///
/// See [`MetricFn`](crate::MetricFn).
pub unsafe fn sse<const W: usize>(
    _ctx: Option<&MetricContext>,
    pix1: *const u8,
    pix2: *const u8,
    stride: usize,
    h: usize,
) -> u32 {
    let mut sum = 0u32;
    for y in 0..h {
        let a = pix1.add(y * stride);
        let b = pix2.add(y * stride);
        for x in 0..W {
            let d = *a.add(x) as i32 - *b.add(x) as i32;
            sum += (d * d) as u32;
        }
    }
    sum
}
