//! Scalar high frequency noise and noise preserving SSE.

use super::combine;
use crate::context::MetricContext;
use crate::sse::portable::sse;

/// High frequency noise of a `W x h` block.
///
/// # Safety
///
/// See [`HfNoiseFn`](super::HfNoiseFn).
pub unsafe fn hf_noise<const W: usize>(pix: *const u8, stride: usize, h: usize) -> u32 {
    let mut score = 0u32;
    for y in 0..h.saturating_sub(1) {
        let row = pix.add(y * stride);
        let below = row.add(stride);
        for x in 0..W - 1 {
            let top = *row.add(x) as i32 - *row.add(x + 1) as i32;
            let bottom = *below.add(x) as i32 - *below.add(x + 1) as i32;
            score += (top - bottom).unsigned_abs();
        }
    }
    score
}

/// Noise preserving SSE of a `W x h` block.
///
/// # Safety
///
/// See [`MetricFn`](crate::MetricFn).
pub unsafe fn nsse<const W: usize>(
    ctx: Option<&MetricContext>,
    pix1: *const u8,
    pix2: *const u8,
    stride: usize,
    h: usize,
) -> u32 {
    combine(
        sse::<W>(ctx, pix1, pix2, stride, h),
        hf_noise::<W>(pix1, stride, h),
        hf_noise::<W>(pix2, stride, h),
        MetricContext::nsse_weight_of(ctx),
    )
}
