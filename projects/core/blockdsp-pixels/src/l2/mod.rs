//! # Two Source Average
//!
//! `dst = avg(src1, src2)` over a `W x h` block, where the two sources and the destination each
//! have their own stride. Quarter-pel interpolation builds most of its phases from this.
//!
//! `avg` variants merge the result into `dst` with the rounding average afterwards, like the
//! [`hpel`](crate::hpel) kernels.

use blockdsp_common::{BlockSize, DspTier};

pub mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod sse2;

/// A two source average: `(dst, src1, src2, dst_stride, src1_stride, src2_stride, h)`.
///
/// # Safety
///
/// - `src1` and `src2` must be valid for reads of `W x h` bytes with their strides
/// - `dst` must be valid for reads and writes of `W x h` bytes with `dst_stride`
/// - `dst` may only alias a source if it is the same pointer with the same stride
/// - The CPU must support the tier the kernel was taken from
pub type L2Fn = unsafe fn(
    dst: *mut u8,
    src1: *const u8,
    src2: *const u8,
    dst_stride: usize,
    src1_stride: usize,
    src2_stride: usize,
    h: usize,
);

/// Two source averages indexed by [`BlockSize::table_index`].
pub type L2Table = [L2Fn; 3];

/// `put` with rounding.
pub fn put_l2_tab(tier: DspTier) -> L2Table {
    table::<false, false>(tier)
}

/// `put` without rounding.
pub fn put_no_rnd_l2_tab(tier: DspTier) -> L2Table {
    table::<false, true>(tier)
}

/// `avg` with rounding.
pub fn avg_l2_tab(tier: DspTier) -> L2Table {
    table::<true, false>(tier)
}

/// Looks up the kernel for one block size.
#[inline]
pub fn lookup(table: &L2Table, size: BlockSize) -> L2Fn {
    table[size.table_index()]
}

fn table<const AVG: bool, const NO_RND: bool>(tier: DspTier) -> L2Table {
    match tier {
        DspTier::Portable => [
            portable::pixels_l2::<16, AVG, NO_RND>,
            portable::pixels_l2::<8, AVG, NO_RND>,
            portable::pixels_l2::<4, AVG, NO_RND>,
        ],
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        DspTier::Sse2 | DspTier::Ssse3 => [
            sse2::pixels_l2::<16, AVG, NO_RND>,
            sse2::pixels_l2::<8, AVG, NO_RND>,
            sse2::pixels_l2::<4, AVG, NO_RND>,
        ],
        #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
        _ => table::<AVG, NO_RND>(DspTier::Portable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(BlockSize::Size16, 16, 0, 32, 16, 24)]
    #[case(BlockSize::Size16, 17, 1, 17, 40, 16)]
    #[case(BlockSize::Size8, 8, 3, 8, 9, 33)]
    #[case(BlockSize::Size8, 9, 0, 24, 8, 8)]
    #[case(BlockSize::Size4, 4, 5, 4, 7, 12)]
    fn tiers_match_portable(
        #[case] size: BlockSize,
        #[case] height: usize,
        #[case] offset: usize,
        #[case] dst_stride: usize,
        #[case] src1_stride: usize,
        #[case] src2_stride: usize,
    ) {
        let mut src1 = vec![0u8; src1_stride * height + offset];
        let mut src2 = vec![0u8; src2_stride * height + offset];
        let mut dst = vec![0u8; dst_stride * height + offset];
        fill_random(&mut src1, 11);
        fill_random(&mut src2, 12);
        fill_random(&mut dst, 13);

        let families: [(fn(DspTier) -> L2Table, &str); 3] = [
            (put_l2_tab, "put"),
            (put_no_rnd_l2_tab, "put_no_rnd"),
            (avg_l2_tab, "avg"),
        ];
        for (family, name) in families {
            let reference = lookup(&family(DspTier::Portable), size);
            for tier in supported_tiers() {
                let tested = lookup(&family(tier), size);
                let mut expected = dst.clone();
                let mut actual = dst.clone();
                unsafe {
                    reference(
                        expected.as_mut_ptr().add(offset),
                        src1.as_ptr().add(offset),
                        src2.as_ptr().add(offset),
                        dst_stride,
                        src1_stride,
                        src2_stride,
                        height,
                    );
                    tested(
                        actual.as_mut_ptr().add(offset),
                        src1.as_ptr().add(offset),
                        src2.as_ptr().add(offset),
                        dst_stride,
                        src1_stride,
                        src2_stride,
                        height,
                    );
                }
                assert_implementation_matches_reference(
                    &expected,
                    &actual,
                    tier.name(),
                    &std::format!("{name} {size:?} h={height}"),
                );
            }
        }
    }

    #[rstest]
    #[case(false, 4)]
    #[case(true, 3)]
    fn rounding(#[case] no_rnd: bool, #[case] expected: u8) {
        let src1 = [3u8; 16];
        let src2 = [4u8; 16];
        for tier in supported_tiers() {
            let table = if no_rnd {
                put_no_rnd_l2_tab(tier)
            } else {
                put_l2_tab(tier)
            };
            let mut dst = [0u8; 16];
            unsafe {
                lookup(&table, BlockSize::Size4)(
                    dst.as_mut_ptr(),
                    src1.as_ptr(),
                    src2.as_ptr(),
                    4,
                    4,
                    4,
                    4,
                )
            };
            assert!(dst.iter().all(|&p| p == expected), "{}", tier.name());
        }
    }
}
