//! Scalar two source averages.

use blockdsp_common::pixel::{avg, rnd_avg};

/// Averages two `W x h` blocks into `dst`.
///
/// # Safety
///
/// See [`L2Fn`](super::L2Fn).
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
        for x in 0..W {
            let value = avg::<NO_RND>(*src1.add(x), *src2.add(x));
            let out = dst.add(x);
            *out = if AVG { rnd_avg(*out, value) } else { value };
        }
        dst = dst.add(dst_stride);
        src1 = src1.add(src1_stride);
        src2 = src2.add(src2_stride);
    }
}
