//! Scalar H.264 lowpass filters.

use super::{H264Lowpass, MAX_N};
use crate::filter::FilterStage;
use crate::ops::Portable;
use blockdsp_common::pixel::rnd_avg;

#[inline(always)]
unsafe fn store<const AVG: bool>(dst: *mut u8, value: u8) {
    *dst = if AVG { rnd_avg(*dst, value) } else { value };
}

/// Horizontal lowpass, see [`H264Lowpass::h_lowpass`].
///
/// # Safety
///
/// See [`H264Lowpass`].
pub unsafe fn h_lowpass<const N: usize, const AVG: bool>(
    dst: *mut u8,
    src: *const u8,
    dst_stride: usize,
    src_stride: usize,
) {
    let stage = FilterStage::H264;
    for y in 0..N {
        let row = src.add(y * src_stride);
        let out = dst.add(y * dst_stride);
        for x in 0..N {
            let sum = stage.sum(|k| *row.offset(x as isize + k) as i32);
            store::<AVG>(out.add(x), stage.finish(sum));
        }
    }
}

/// Vertical lowpass, see [`H264Lowpass::v_lowpass`].
///
/// # Safety
///
/// See [`H264Lowpass`].
pub unsafe fn v_lowpass<const N: usize, const AVG: bool>(
    dst: *mut u8,
    src: *const u8,
    dst_stride: usize,
    src_stride: usize,
) {
    let stage = FilterStage::H264;
    let stride = src_stride as isize;
    for y in 0..N {
        let out = dst.add(y * dst_stride);
        for x in 0..N {
            let column = src.add(x);
            let sum = stage.sum(|k| *column.offset((y as isize + k) * stride) as i32);
            store::<AVG>(out.add(x), stage.finish(sum));
        }
    }
}

/// Two dimensional lowpass, see [`H264Lowpass::hv_lowpass`].
///
/// The horizontal pass is kept at full precision for rows `-2..N + 3`; the vertical pass then
/// rounds once with [`FilterStage::H264_HV`].
///
/// # Safety
///
/// See [`H264Lowpass`].
pub unsafe fn hv_lowpass<const N: usize, const AVG: bool>(
    dst: *mut u8,
    src: *const u8,
    dst_stride: usize,
    src_stride: usize,
) {
    let first = FilterStage::H264;
    let second = FilterStage::H264_HV;
    let stride = src_stride as isize;

    // Row r of the intermediate holds source row r - 2.
    let mut tmp = [0i32; (MAX_N + 5) * MAX_N];
    for r in 0..N + 5 {
        let row = src.offset((r as isize - 2) * stride);
        for x in 0..N {
            tmp[r * N + x] = first.sum(|k| *row.offset(x as isize + k) as i32);
        }
    }

    for y in 0..N {
        let out = dst.add(y * dst_stride);
        for x in 0..N {
            let sum = second.sum(|k| tmp[(y as isize + 2 + k) as usize * N + x]);
            store::<AVG>(out.add(x), second.finish(sum));
        }
    }
}

impl H264Lowpass for Portable {
    #[inline(always)]
    unsafe fn h_lowpass<const N: usize, const AVG: bool>(
        dst: *mut u8,
        src: *const u8,
        dst_stride: usize,
        src_stride: usize,
    ) {
        h_lowpass::<N, AVG>(dst, src, dst_stride, src_stride);
    }

    #[inline(always)]
    unsafe fn v_lowpass<const N: usize, const AVG: bool>(
        dst: *mut u8,
        src: *const u8,
        dst_stride: usize,
        src_stride: usize,
    ) {
        v_lowpass::<N, AVG>(dst, src, dst_stride, src_stride);
    }

    #[inline(always)]
    unsafe fn hv_lowpass<const N: usize, const AVG: bool>(
        dst: *mut u8,
        src: *const u8,
        dst_stride: usize,
        src_stride: usize,
    ) {
        hv_lowpass::<N, AVG>(dst, src, dst_stride, src_stride);
    }
}
