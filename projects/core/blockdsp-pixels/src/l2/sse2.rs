//! SSE2 two source averages.

use crate::hpel::sse2::{average, load_row, put_row};

/// SSE2 implementation of [`pixels_l2`](super::portable::pixels_l2).
///
/// # Safety
///
/// See [`L2Fn`](super::L2Fn). The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn pixels_l2<const W: usize, const AVG: bool, const NO_RND: bool>(
    mut dst: *mut u8,
    mut src1: *const u8,
    mut src2: *const u8,
    dst_stride: usize,
    src1_stride: usize,
    src2_stride: usize,
    h: usize,
) {
    for _ in 0..h {
        let a = load_row::<W>(src1);
        let b = load_row::<W>(src2);
        put_row::<W, AVG>(dst, average::<NO_RND>(a, b));
        dst = dst.add(dst_stride);
        src1 = src1.add(src1_stride);
        src2 = src2.add(src2_stride);
    }
}
