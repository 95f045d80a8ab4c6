//! # H.264 Quarter-pel
//!
//! H.264 luma quarter sample interpolation for 4x4, 8x8 and 16x16 blocks.
//!
//! Half samples come from the 6-tap `[1, -5, 20, 20, -5, 1] / 32` filter, horizontal (`H`),
//! vertical (`V`) or both (`HV`). `HV` keeps the first pass unshifted and divides once by 1024 at
//! the end. Quarter samples are the rounding average (`l2`) of the two nearest full or half
//! samples:
//!
//! | | `mx = 0` | `1` | `2` | `3` |
//! |---|---|---|---|---|
//! | `my = 0` | copy | `l2(G, H)` | `H` | `l2(G+1, H)` |
//! | `1` | `l2(G, V)` | `l2(H, V)` | `l2(H, HV)` | `l2(H, V+1)` |
//! | `2` | `V` | `l2(V, HV)` | `HV` | `l2(V+1, HV)` |
//! | `3` | `l2(G+s, V)` | `l2(H+s, V)` | `l2(H+s, HV)` | `l2(H+s, V+1)` |
//!
//! `G` is the full sample block, `+1` shifts a plane one column right and `+s` one row down.
//!
//! The source region read is columns `-2..n+3` and rows `-2..n+3` around the block.

use crate::ops::PixelOps;
use crate::{QpelMcFn, QpelPhases};
use blockdsp_common::validate::Region;
use blockdsp_common::{BlockSize, DspTier};

pub mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod sse2;

/// Largest block size of the family.
const MAX_N: usize = 16;

/// H.264 kernels indexed by [`BlockSize::table_index`].
pub type H264Table = [QpelPhases; 3];

/// The lowpass filters of a tier.
///
/// All of them filter an `N x N` block. `src` must be readable from 2 rows and columns before the
/// block to 3 rows and columns after it (only along the filtered direction for `H` and `V`).
pub trait H264Lowpass: PixelOps {
    /// Horizontal half sample.
    ///
    /// # Safety
    ///
    /// See the trait documentation. The CPU must support the tier.
    unsafe fn h_lowpass<const N: usize, const AVG: bool>(
        dst: *mut u8,
        src: *const u8,
        dst_stride: usize,
        src_stride: usize,
    );

    /// Vertical half sample.
    ///
    /// # Safety
    ///
    /// See the trait documentation. The CPU must support the tier.
    unsafe fn v_lowpass<const N: usize, const AVG: bool>(
        dst: *mut u8,
        src: *const u8,
        dst_stride: usize,
        src_stride: usize,
    );

    /// Centre half sample.
    ///
    /// # Safety
    ///
    /// See the trait documentation. The CPU must support the tier.
    unsafe fn hv_lowpass<const N: usize, const AVG: bool>(
        dst: *mut u8,
        src: *const u8,
        dst_stride: usize,
        src_stride: usize,
    );
}

/// Source region read by every phase, relative to the block origin.
#[inline]
pub const fn source_region(size: BlockSize) -> Region {
    let n = size.width();
    Region::new(n, n).with_halo(2, 2, 3, 3)
}

/// One phase of one block size and operation.
///
/// # Safety
///
/// See [`QpelMcFn`]. `src` must be readable for [`source_region`].
pub unsafe fn qpel_mc<
    K: H264Lowpass,
    const N: usize,
    const AVG: bool,
    const MX: usize,
    const MY: usize,
>(
    dst: *mut u8,
    src: *const u8,
    stride: usize,
) {
    let mut first = [0u8; MAX_N * MAX_N];
    let mut second = [0u8; MAX_N * MAX_N];
    let a = first.as_mut_ptr();
    let b = second.as_mut_ptr();

    // Sources of the horizontal and vertical half samples nearest to the quarter position.
    let h_src = if MY == 3 { src.add(stride) } else { src };
    let v_src = if MX == 3 { src.add(1) } else { src };

    match (MX, MY) {
        (0, 0) => K::copy::<N, AVG>(dst, src, stride),
        (2, 0) => K::h_lowpass::<N, AVG>(dst, src, stride, stride),
        (0, 2) => K::v_lowpass::<N, AVG>(dst, src, stride, stride),
        (2, 2) => K::hv_lowpass::<N, AVG>(dst, src, stride, stride),
        (_, 0) => {
            K::h_lowpass::<N, false>(a, src, N, stride);
            K::l2::<N, AVG, false>(dst, v_src, a, stride, stride, N, N);
        }
        (0, _) => {
            K::v_lowpass::<N, false>(a, src, N, stride);
            K::l2::<N, AVG, false>(dst, h_src, a, stride, stride, N, N);
        }
        (2, _) => {
            K::h_lowpass::<N, false>(a, h_src, N, stride);
            K::hv_lowpass::<N, false>(b, src, N, stride);
            K::l2::<N, AVG, false>(dst, a, b, stride, N, N, N);
        }
        (_, 2) => {
            K::v_lowpass::<N, false>(a, v_src, N, stride);
            K::hv_lowpass::<N, false>(b, src, N, stride);
            K::l2::<N, AVG, false>(dst, a, b, stride, N, N, N);
        }
        _ => {
            K::h_lowpass::<N, false>(a, h_src, N, stride);
            K::v_lowpass::<N, false>(b, v_src, N, stride);
            K::l2::<N, AVG, false>(dst, a, b, stride, N, N, N);
        }
    }
}

fn phases<K: H264Lowpass, const N: usize, const AVG: bool>() -> QpelPhases {
    let table: [QpelMcFn; 16] = [
        qpel_mc::<K, N, AVG, 0, 0>,
        qpel_mc::<K, N, AVG, 1, 0>,
        qpel_mc::<K, N, AVG, 2, 0>,
        qpel_mc::<K, N, AVG, 3, 0>,
        qpel_mc::<K, N, AVG, 0, 1>,
        qpel_mc::<K, N, AVG, 1, 1>,
        qpel_mc::<K, N, AVG, 2, 1>,
        qpel_mc::<K, N, AVG, 3, 1>,
        qpel_mc::<K, N, AVG, 0, 2>,
        qpel_mc::<K, N, AVG, 1, 2>,
        qpel_mc::<K, N, AVG, 2, 2>,
        qpel_mc::<K, N, AVG, 3, 2>,
        qpel_mc::<K, N, AVG, 0, 3>,
        qpel_mc::<K, N, AVG, 1, 3>,
        qpel_mc::<K, N, AVG, 2, 3>,
        qpel_mc::<K, N, AVG, 3, 3>,
    ];
    table
}

fn table<const AVG: bool>(tier: DspTier) -> H264Table {
    match tier {
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        DspTier::Sse2 | DspTier::Ssse3 => [
            phases::<crate::Sse2, 16, AVG>(),
            phases::<crate::Sse2, 8, AVG>(),
            phases::<crate::Sse2, 4, AVG>(),
        ],
        _ => [
            phases::<crate::Portable, 16, AVG>(),
            phases::<crate::Portable, 8, AVG>(),
            phases::<crate::Portable, 4, AVG>(),
        ],
    }
}

/// `put` kernels.
pub fn put_h264_qpel_pixels_tab(tier: DspTier) -> H264Table {
    table::<false>(tier)
}

/// `avg` kernels.
pub fn avg_h264_qpel_pixels_tab(tier: DspTier) -> H264Table {
    table::<true>(tier)
}
