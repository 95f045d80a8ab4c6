//! Scalar MPEG-4 lowpass filters.

use super::{mirror, Mpeg4Lowpass};
use crate::filter::FilterStage;
use crate::ops::Portable;
use blockdsp_common::pixel::rnd_avg;

#[inline(always)]
unsafe fn store<const AVG: bool>(dst: *mut u8, value: u8) {
    *dst = if AVG { rnd_avg(*dst, value) } else { value };
}

/// Horizontal lowpass, see [`Mpeg4Lowpass::h_lowpass`].
///
/// # Safety
///
/// See [`Mpeg4Lowpass::h_lowpass`].
pub unsafe fn h_lowpass<const N: usize, const AVG: bool, const NO_RND: bool>(
    mut dst: *mut u8,
    mut src: *const u8,
    dst_stride: usize,
    src_stride: usize,
    h: usize,
) {
    let stage = FilterStage::mpeg4(NO_RND);
    for _ in 0..h {
        for x in 0..N {
            let sum = stage.sum(|k| *src.add(mirror(x as isize + k, N)) as i32);
            store::<AVG>(dst.add(x), stage.finish(sum));
        }
        src = src.add(src_stride);
        dst = dst.add(dst_stride);
    }
}

/// Vertical lowpass, see [`Mpeg4Lowpass::v_lowpass`].
///
/// # Safety
///
/// See [`Mpeg4Lowpass::v_lowpass`].
pub unsafe fn v_lowpass<const N: usize, const AVG: bool, const NO_RND: bool>(
    dst: *mut u8,
    src: *const u8,
    dst_stride: usize,
    src_stride: usize,
) {
    let stage = FilterStage::mpeg4(NO_RND);
    for y in 0..N {
        let out = dst.add(y * dst_stride);
        for x in 0..N {
            let column = src.add(x);
            let sum = stage.sum(|k| *column.add(mirror(y as isize + k, N) * src_stride) as i32);
            store::<AVG>(out.add(x), stage.finish(sum));
        }
    }
}

impl Mpeg4Lowpass for Portable {
    #[inline(always)]
    unsafe fn h_lowpass<const N: usize, const AVG: bool, const NO_RND: bool>(
        dst: *mut u8,
        src: *const u8,
        dst_stride: usize,
        src_stride: usize,
        h: usize,
    ) {
        h_lowpass::<N, AVG, NO_RND>(dst, src, dst_stride, src_stride, h);
    }

    #[inline(always)]
    unsafe fn v_lowpass<const N: usize, const AVG: bool, const NO_RND: bool>(
        dst: *mut u8,
        src: *const u8,
        dst_stride: usize,
        src_stride: usize,
    ) {
        v_lowpass::<N, AVG, NO_RND>(dst, src, dst_stride, src_stride);
    }
}
