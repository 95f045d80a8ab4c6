//! Kernel sets the quarter-pel phases are composed from.
//!
//! A phase is a short sequence of lowpass passes and two source averages. The sequence is written
//! once, generically over a kernel set; each tier provides one as a zero sized type.

use blockdsp_pixels::{hpel, l2};

/// The block copy and two source average every quarter-pel family needs.
///
/// # Safety
///
/// Same requirements as [`hpel::PixelsFn`] and [`l2::L2Fn`]; implementations may require CPU
/// features.
pub trait PixelOps {
    /// Copies an `N x N` block (merging it into `dst` when `AVG` is set).
    ///
    /// # Safety
    ///
    /// See [`hpel::PixelsFn`].
    unsafe fn copy<const N: usize, const AVG: bool>(dst: *mut u8, src: *const u8, stride: usize);

    /// Averages two `N x h` blocks into `dst`.
    ///
    /// # Safety
    ///
    /// See [`l2::L2Fn`].
    #[allow(clippy::too_many_arguments)]
    unsafe fn l2<const N: usize, const AVG: bool, const NO_RND: bool>(
        dst: *mut u8,
        src1: *const u8,
        src2: *const u8,
        dst_stride: usize,
        src1_stride: usize,
        src2_stride: usize,
        h: usize,
    );
}

/// Scalar kernels.
#[derive(Debug, Clone, Copy, Default)]
pub struct Portable;

impl PixelOps for Portable {
    #[inline(always)]
    unsafe fn copy<const N: usize, const AVG: bool>(dst: *mut u8, src: *const u8, stride: usize) {
        hpel::portable::copy::<N, AVG>(dst, src, stride, N);
    }

    #[inline(always)]
    unsafe fn l2<const N: usize, const AVG: bool, const NO_RND: bool>(
        dst: *mut u8,
        src1: *const u8,
        src2: *const u8,
        dst_stride: usize,
        src1_stride: usize,
        src2_stride: usize,
        h: usize,
    ) {
        l2::portable::pixels_l2::<N, AVG, NO_RND>(
            dst,
            src1,
            src2,
            dst_stride,
            src1_stride,
            src2_stride,
            h,
        );
    }
}

/// SSE2 kernels. Only usable on CPUs with SSE2.
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct Sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
impl PixelOps for Sse2 {
    #[inline(always)]
    unsafe fn copy<const N: usize, const AVG: bool>(dst: *mut u8, src: *const u8, stride: usize) {
        hpel::sse2::copy::<N, AVG>(dst, src, stride, N);
    }

    #[inline(always)]
    unsafe fn l2<const N: usize, const AVG: bool, const NO_RND: bool>(
        dst: *mut u8,
        src1: *const u8,
        src2: *const u8,
        dst_stride: usize,
        src1_stride: usize,
        src2_stride: usize,
        h: usize,
    ) {
        l2::sse2::pixels_l2::<N, AVG, NO_RND>(
            dst,
            src1,
            src2,
            dst_stride,
            src1_stride,
            src2_stride,
            h,
        );
    }
}
