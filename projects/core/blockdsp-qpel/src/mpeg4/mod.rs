//! # MPEG-4 Quarter-pel
//!
//! MPEG-4 part 2 quarter sample interpolation for 8x8 and 16x16 blocks.
//!
//! The half sample filter is the 8-tap `[-1, 3, -6, 20, 20, -6, 3, -1] / 32` lowpass. It never
//! reads outside the `(n + 1) x (n + 1)` source block: samples before column 0 or after column
//! `n` are mirrored back into it (`i < 0` reads `-1 - i`, `i > n` reads `2n + 1 - i`), and the
//! vertical filter mirrors rows the same way.
//!
//! Quarter positions average a half sample plane with its nearest full or half sample neighbour
//! (`l2`). Diagonal positions filter horizontally over `n + 1` rows first, then vertically.
//! Inner passes always `put` with the rounding of the family; only the last pass applies the
//! requested operation.
//!
//! | Family | Lowpass rounding | `l2` | Final op |
//! |---|---|---|---|
//! | put | `+16` | rounding | store |
//! | avg | `+16` | rounding | `(dst + p + 1) >> 1` |
//! | put_no_rnd | `+15` | truncating | store |

use crate::ops::PixelOps;
use crate::{QpelMcFn, QpelPhases};
use blockdsp_common::validate::Region;
use blockdsp_common::{BlockSize, DspTier};

pub mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod sse2;

/// Largest block size of the family.
const MAX_N: usize = 16;

/// MPEG-4 kernels for 16x16 (`[0]`) and 8x8 (`[1]`) blocks.
pub type Mpeg4Table = [QpelPhases; 2];

/// The two lowpass directions of a tier.
pub trait Mpeg4Lowpass: PixelOps {
    /// Horizontal lowpass of `h` rows of width `N`, reading columns `0..=N` of each row.
    ///
    /// # Safety
    ///
    /// `src` must be readable for `(N + 1) x h` bytes with `src_stride`; `dst` writable for
    /// `N x h` with `dst_stride`. The CPU must support the tier.
    unsafe fn h_lowpass<const N: usize, const AVG: bool, const NO_RND: bool>(
        dst: *mut u8,
        src: *const u8,
        dst_stride: usize,
        src_stride: usize,
        h: usize,
    );

    /// Vertical lowpass of an `N x N` block, reading rows `0..=N`.
    ///
    /// # Safety
    ///
    /// `src` must be readable for `N x (N + 1)` bytes with `src_stride`; `dst` writable for
    /// `N x N` with `dst_stride`. The CPU must support the tier.
    unsafe fn v_lowpass<const N: usize, const AVG: bool, const NO_RND: bool>(
        dst: *mut u8,
        src: *const u8,
        dst_stride: usize,
        src_stride: usize,
    );
}

/// Index of a sample mirrored into `0..=n`.
#[inline(always)]
pub(crate) const fn mirror(i: isize, n: usize) -> usize {
    if i < 0 {
        (-1 - i) as usize
    } else if i as usize > n {
        2 * n + 1 - i as usize
    } else {
        i as usize
    }
}

/// Source region read by every phase, relative to the block origin.
#[inline]
pub const fn source_region(size: BlockSize) -> Region {
    let n = size.width();
    Region::new(n + 1, n + 1)
}

/// One phase of one block size and family.
///
/// # Safety
///
/// See [`QpelMcFn`]. `src` must be readable for [`source_region`].
pub unsafe fn qpel_mc<
    K: Mpeg4Lowpass,
    const N: usize,
    const AVG: bool,
    const NO_RND: bool,
    const MX: usize,
    const MY: usize,
>(
    dst: *mut u8,
    src: *const u8,
    stride: usize,
) {
    let mut half_h = [0u8; (MAX_N + 1) * MAX_N];
    let mut half_hv = [0u8; MAX_N * MAX_N];
    let hh = half_h.as_mut_ptr();
    let hv = half_hv.as_mut_ptr();

    // Full sample column averaged into quarter positions 1 and 3.
    let column = if MX == 3 { src.add(1) } else { src };

    match (MX, MY) {
        (0, 0) => K::copy::<N, AVG>(dst, src, stride),
        (2, 0) => K::h_lowpass::<N, AVG, NO_RND>(dst, src, stride, stride, N),
        (0, 2) => K::v_lowpass::<N, AVG, NO_RND>(dst, src, stride, stride),
        (_, 0) => {
            K::h_lowpass::<N, false, NO_RND>(hh, src, N, stride, N);
            K::l2::<N, AVG, NO_RND>(dst, column, hh, stride, stride, N, N);
        }
        (0, _) => {
            K::v_lowpass::<N, false, NO_RND>(hh, src, N, stride);
            let row = if MY == 3 { src.add(stride) } else { src };
            K::l2::<N, AVG, NO_RND>(dst, row, hh, stride, stride, N, N);
        }
        _ => {
            K::h_lowpass::<N, false, NO_RND>(hh, src, N, stride, N + 1);
            if MX != 2 {
                K::l2::<N, false, NO_RND>(hh, hh, column, N, N, stride, N + 1);
            }
            if MY == 2 {
                K::v_lowpass::<N, AVG, NO_RND>(dst, hh, stride, N);
            } else {
                K::v_lowpass::<N, false, NO_RND>(hv, hh, N, N);
                let row = if MY == 3 { hh.add(N) } else { hh };
                K::l2::<N, AVG, NO_RND>(dst, row, hv, stride, N, N, N);
            }
        }
    }
}

fn phases<K: Mpeg4Lowpass, const N: usize, const AVG: bool, const NO_RND: bool>() -> QpelPhases {
    let table: [QpelMcFn; 16] = [
        qpel_mc::<K, N, AVG, NO_RND, 0, 0>,
        qpel_mc::<K, N, AVG, NO_RND, 1, 0>,
        qpel_mc::<K, N, AVG, NO_RND, 2, 0>,
        qpel_mc::<K, N, AVG, NO_RND, 3, 0>,
        qpel_mc::<K, N, AVG, NO_RND, 0, 1>,
        qpel_mc::<K, N, AVG, NO_RND, 1, 1>,
        qpel_mc::<K, N, AVG, NO_RND, 2, 1>,
        qpel_mc::<K, N, AVG, NO_RND, 3, 1>,
        qpel_mc::<K, N, AVG, NO_RND, 0, 2>,
        qpel_mc::<K, N, AVG, NO_RND, 1, 2>,
        qpel_mc::<K, N, AVG, NO_RND, 2, 2>,
        qpel_mc::<K, N, AVG, NO_RND, 3, 2>,
        qpel_mc::<K, N, AVG, NO_RND, 0, 3>,
        qpel_mc::<K, N, AVG, NO_RND, 1, 3>,
        qpel_mc::<K, N, AVG, NO_RND, 2, 3>,
        qpel_mc::<K, N, AVG, NO_RND, 3, 3>,
    ];
    table
}

fn table<const AVG: bool, const NO_RND: bool>(tier: DspTier) -> Mpeg4Table {
    match tier {
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        DspTier::Sse2 | DspTier::Ssse3 => [
            phases::<crate::Sse2, 16, AVG, NO_RND>(),
            phases::<crate::Sse2, 8, AVG, NO_RND>(),
        ],
        _ => [
            phases::<crate::Portable, 16, AVG, NO_RND>(),
            phases::<crate::Portable, 8, AVG, NO_RND>(),
        ],
    }
}

/// `put` kernels with rounding.
pub fn put_qpel_pixels_tab(tier: DspTier) -> Mpeg4Table {
    table::<false, false>(tier)
}

/// `put` kernels without rounding.
pub fn put_no_rnd_qpel_pixels_tab(tier: DspTier) -> Mpeg4Table {
    table::<false, true>(tier)
}

/// `avg` kernels with rounding.
pub fn avg_qpel_pixels_tab(tier: DspTier) -> Mpeg4Table {
    table::<true, false>(tier)
}

/// Table slot of a block size, if the family has one.
#[inline]
pub const fn size_index(size: BlockSize) -> Option<usize> {
    match size {
        BlockSize::Size16 => Some(0),
        BlockSize::Size8 => Some(1),
        BlockSize::Size4 => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase_index;
    use crate::test_prelude::*;
    use blockdsp_pixels::hpel;

    type TableFn = fn(DspTier) -> Mpeg4Table;

    fn families() -> [(TableFn, &'static str); 3] {
        [
            (put_qpel_pixels_tab, "put"),
            (put_no_rnd_qpel_pixels_tab, "put_no_rnd"),
            (avg_qpel_pixels_tab, "avg"),
        ]
    }

    #[rstest]
    #[case(BlockSize::Size16, 1)]
    #[case(BlockSize::Size16, 2)]
    #[case(BlockSize::Size8, 3)]
    #[case(BlockSize::Size8, 4)]
    fn tiers_match_portable(#[case] size: BlockSize, #[case] seed: u32) {
        let n = size.width();
        let index = size_index(size).unwrap();
        let src = TestPlane::random(n, 3, seed);
        let dst = TestPlane::random(n, 3, seed + 100);

        for (family, name) in families() {
            let reference = family(DspTier::Portable)[index];
            for tier in supported_tiers() {
                let tested = family(tier)[index];
                for phase in 0..16 {
                    let mut expected = dst.data.clone();
                    let mut actual = dst.data.clone();
                    unsafe {
                        reference[phase](
                            expected.as_mut_ptr().add(dst.origin),
                            src.data.as_ptr().add(src.origin),
                            src.stride,
                        );
                        tested[phase](
                            actual.as_mut_ptr().add(dst.origin),
                            src.data.as_ptr().add(src.origin),
                            src.stride,
                        );
                    }
                    assert_implementation_matches_reference(
                        &expected,
                        &actual,
                        tier.name(),
                        &format!("{name} {size:?} mc{}{}", phase % 4, phase / 4),
                    );
                }
            }
        }
    }

    #[rstest]
    #[case(BlockSize::Size16)]
    #[case(BlockSize::Size8)]
    fn full_sample_phase_is_copy(#[case] size: BlockSize) {
        let n = size.width();
        let src = TestPlane::random(n, 2, 9);
        for tier in supported_tiers() {
            let copy = hpel::lookup(&hpel::put_pixels_tab(tier), size, hpel::HpelFilter::Copy);
            for (family, name) in families() {
                if name == "avg" {
                    continue;
                }
                let mut expected = vec![0u8; src.data.len()];
                let mut actual = vec![0u8; src.data.len()];
                unsafe {
                    copy(
                        expected.as_mut_ptr().add(src.origin),
                        src.data.as_ptr().add(src.origin),
                        src.stride,
                        n,
                    );
                    family(tier)[size_index(size).unwrap()][phase_index(0, 0)](
                        actual.as_mut_ptr().add(src.origin),
                        src.data.as_ptr().add(src.origin),
                        src.stride,
                    );
                }
                assert_eq!(expected, actual, "{} {name}", tier.name());
            }
        }
    }

    #[test]
    fn flat_input_stays_flat() {
        for value in [0u8, 1, 128, 254, 255] {
            let src = TestPlane::filled(16, 2, value);
            for tier in supported_tiers() {
                for (family, name) in families() {
                    for phase in 0..16 {
                        let mut dst = TestPlane::filled(16, 2, value);
                        unsafe {
                            family(tier)[0][phase](
                                dst.data.as_mut_ptr().add(dst.origin),
                                src.data.as_ptr().add(src.origin),
                                src.stride,
                            )
                        };
                        assert!(
                            dst.block(16).iter().all(|&p| p == value),
                            "{} {name} phase {phase} value {value}",
                            tier.name()
                        );
                    }
                }
            }
        }
    }

    #[rstest]
    #[case(3, [24, 0, 159, 159, 0, 24, 0, 0])]
    #[case(8, [0, 0, 0, 0, 0, 16, 0, 112])]
    fn horizontal_impulse_response(#[case] column: usize, #[case] expected: [u8; 8]) {
        // Column 8 is the extra column past the block; it is also reached through mirroring.
        let stride = 16;
        let mut src = vec![0u8; stride * 9];
        for y in 0..9 {
            src[y * stride + column] = 255;
        }
        for tier in supported_tiers() {
            let mut dst = vec![0u8; stride * 8];
            let kernel = put_qpel_pixels_tab(tier)[1][phase_index(2, 0)];
            unsafe { kernel(dst.as_mut_ptr(), src.as_ptr(), stride) };
            for y in 0..8 {
                let row = &dst[y * stride..y * stride + 8];
                assert_eq!(row, expected, "{} row {y}", tier.name());
            }
        }
    }

    #[test]
    fn vertical_matches_transposed_horizontal() {
        let n = 8;
        let stride = 16;
        let mut src = vec![0u8; stride * 16];
        fill_random(&mut src, 42);
        let mut transposed = vec![0u8; stride * 16];
        for y in 0..=n {
            for x in 0..=n {
                transposed[x * stride + y] = src[y * stride + x];
            }
        }
        for tier in supported_tiers() {
            let table = put_qpel_pixels_tab(tier);
            let mut vertical = vec![0u8; stride * n];
            let mut horizontal = vec![0u8; stride * n];
            unsafe {
                table[1][phase_index(0, 2)](vertical.as_mut_ptr(), src.as_ptr(), stride);
                table[1][phase_index(2, 0)](horizontal.as_mut_ptr(), transposed.as_ptr(), stride);
            }
            for y in 0..n {
                for x in 0..n {
                    let pair = (vertical[y * stride + x], horizontal[x * stride + y]);
                    assert_eq!(pair.0, pair.1, "{}", tier.name());
                }
            }
        }
    }

    #[rstest]
    #[case(-3, 8, 2)]
    #[case(-1, 8, 0)]
    #[case(0, 8, 0)]
    #[case(8, 8, 8)]
    #[case(9, 8, 8)]
    #[case(11, 8, 6)]
    #[case(20, 16, 13)]
    fn mirrors_into_block(#[case] i: isize, #[case] n: usize, #[case] expected: usize) {
        assert_eq!(mirror(i, n), expected);
    }

    #[test]
    fn region_covers_extra_row_and_column() {
        assert_eq!(source_region(BlockSize::Size8), Region::new(9, 9));
        assert_eq!(source_region(BlockSize::Size16), Region::new(17, 17));
    }
}
