//! # Half-pel Interpolation
//!
//! Copies or averages a `W x h` block taken at a half sample offset of the source.
//!
//! | Filter | Rounding | No rounding | Reads |
//! |---|---|---|---|
//! | copy | `a` | `a` | `W x h` |
//! | x2 | `(a + b + 1) >> 1` | `(a + b) >> 1` | `(W + 1) x h` |
//! | y2 | `(a + c + 1) >> 1` | `(a + c) >> 1` | `W x (h + 1)` |
//! | xy2 | `(a + b + c + d + 2) >> 2` | `(a + b + c + d + 1) >> 2` | `(W + 1) x (h + 1)` |
//!
//! where `b` is the sample to the right of `a`, `c` the one below and `d` the one diagonally below.
//!
//! The `avg` variants then merge the prediction into the destination with
//! `dst = (dst + pred + 1) >> 1`, regardless of the rounding family.
//!
//! Kernels are monomorphized over width (16, 8, 4), the `avg` merge and the rounding family.
//! The tables returned by [`put_pixels_tab`] and friends index them as `[size][filter]`.

use blockdsp_common::{BlockSize, DspTier};
use derive_enum_all_values::AllValues;

pub mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod sse2;

/// A half-pel kernel: `(dst, src, stride, h)`.
///
/// # Safety
///
/// - `src` must be valid for reads of the region listed for the kernel's filter, rows spaced
///   `stride` bytes apart
/// - `dst` must be valid for reads and writes of `W x h` bytes, rows spaced `stride` apart
/// - `src` and `dst` may not overlap
/// - The CPU must support the tier the kernel was taken from
pub type PixelsFn = unsafe fn(dst: *mut u8, src: *const u8, stride: usize, h: usize);

/// Half-pel kernels indexed by `[BlockSize::table_index()][HpelFilter::index()]`.
pub type PixelsTable = [[PixelsFn; 4]; 3];

/// Half sample position of a half-pel kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum HpelFilter {
    /// Full sample position.
    Copy,
    /// Half sample to the right.
    X2,
    /// Half sample down.
    Y2,
    /// Half sample right and down.
    Xy2,
}

impl HpelFilter {
    /// Index of this filter in a [`PixelsTable`] row.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Filter for a motion vector's half sample bits (`dx`, `dy` in `0..=1`).
    #[inline]
    pub const fn from_fraction(dx: usize, dy: usize) -> Self {
        match (dx & 1, dy & 1) {
            (0, 0) => HpelFilter::Copy,
            (1, 0) => HpelFilter::X2,
            (0, _) => HpelFilter::Y2,
            _ => HpelFilter::Xy2,
        }
    }

    /// Extra columns and rows read past the `W x h` block: `(right, bottom)`.
    #[inline]
    pub const fn halo(self) -> (usize, usize) {
        match self {
            HpelFilter::Copy => (0, 0),
            HpelFilter::X2 => (1, 0),
            HpelFilter::Y2 => (0, 1),
            HpelFilter::Xy2 => (1, 1),
        }
    }
}

/// `put` kernels with rounding.
pub fn put_pixels_tab(tier: DspTier) -> PixelsTable {
    table::<false, false>(tier)
}

/// `put` kernels without rounding.
pub fn put_no_rnd_pixels_tab(tier: DspTier) -> PixelsTable {
    table::<false, true>(tier)
}

/// `avg` kernels with rounding.
pub fn avg_pixels_tab(tier: DspTier) -> PixelsTable {
    table::<true, false>(tier)
}

/// `avg` kernels without rounding in the interpolation step.
pub fn avg_no_rnd_pixels_tab(tier: DspTier) -> PixelsTable {
    table::<true, true>(tier)
}

/// Looks up a single kernel.
#[inline]
pub fn lookup(table: &PixelsTable, size: BlockSize, filter: HpelFilter) -> PixelsFn {
    table[size.table_index()][filter.index()]
}

fn table<const AVG: bool, const NO_RND: bool>(tier: DspTier) -> PixelsTable {
    match tier {
        DspTier::Portable => portable_table::<AVG, NO_RND>(),
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        DspTier::Sse2 | DspTier::Ssse3 => sse2_table::<AVG, NO_RND>(),
        #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
        _ => portable_table::<AVG, NO_RND>(),
    }
}

fn portable_table<const AVG: bool, const NO_RND: bool>() -> PixelsTable {
    [
        [
            portable::copy::<16, AVG>,
            portable::x2::<16, AVG, NO_RND>,
            portable::y2::<16, AVG, NO_RND>,
            portable::xy2::<16, AVG, NO_RND>,
        ],
        [
            portable::copy::<8, AVG>,
            portable::x2::<8, AVG, NO_RND>,
            portable::y2::<8, AVG, NO_RND>,
            portable::xy2::<8, AVG, NO_RND>,
        ],
        [
            portable::copy::<4, AVG>,
            portable::x2::<4, AVG, NO_RND>,
            portable::y2::<4, AVG, NO_RND>,
            portable::xy2::<4, AVG, NO_RND>,
        ],
    ]
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
fn sse2_table<const AVG: bool, const NO_RND: bool>() -> PixelsTable {
    [
        [
            sse2::copy::<16, AVG>,
            sse2::x2::<16, AVG, NO_RND>,
            sse2::y2::<16, AVG, NO_RND>,
            sse2::xy2::<16, AVG, NO_RND>,
        ],
        [
            sse2::copy::<8, AVG>,
            sse2::x2::<8, AVG, NO_RND>,
            sse2::y2::<8, AVG, NO_RND>,
            sse2::xy2::<8, AVG, NO_RND>,
        ],
        [
            sse2::copy::<4, AVG>,
            sse2::x2::<4, AVG, NO_RND>,
            sse2::y2::<4, AVG, NO_RND>,
            sse2::xy2::<4, AVG, NO_RND>,
        ],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    const STRIDE: usize = 40;

    type TableFn = fn(DspTier) -> PixelsTable;

    fn families() -> [(TableFn, &'static str); 4] {
        [
            (put_pixels_tab, "put"),
            (put_no_rnd_pixels_tab, "put_no_rnd"),
            (avg_pixels_tab, "avg"),
            (avg_no_rnd_pixels_tab, "avg_no_rnd"),
        ]
    }

    #[rstest]
    #[case(BlockSize::Size16, 16, 0)]
    #[case(BlockSize::Size16, 8, 3)]
    #[case(BlockSize::Size8, 8, 0)]
    #[case(BlockSize::Size8, 4, 1)]
    #[case(BlockSize::Size8, 16, 5)]
    #[case(BlockSize::Size4, 4, 2)]
    #[case(BlockSize::Size4, 2, 0)]
    #[case(BlockSize::Size4, 1, 7)]
    fn tiers_match_portable(#[case] size: BlockSize, #[case] height: usize, #[case] offset: usize) {
        let mut src = vec![0u8; STRIDE * (height + 1) + offset + 1];
        fill_random(&mut src, 0xBEEF + height as u32);
        let mut dst = vec![0u8; STRIDE * height + offset];
        fill_random(&mut dst, 0xF00D + offset as u32);

        for (family, family_name) in families() {
            let reference = family(DspTier::Portable);
            for tier in supported_tiers() {
                let tested = family(tier);
                for filter in HpelFilter::all_values() {
                    let mut expected = dst.clone();
                    let mut actual = dst.clone();
                    unsafe {
                        lookup(&reference, size, *filter)(
                            expected.as_mut_ptr().add(offset),
                            src.as_ptr().add(offset),
                            STRIDE,
                            height,
                        );
                        lookup(&tested, size, *filter)(
                            actual.as_mut_ptr().add(offset),
                            src.as_ptr().add(offset),
                            STRIDE,
                            height,
                        );
                    }
                    assert_implementation_matches_reference(
                        &expected,
                        &actual,
                        tier.name(),
                        &std::format!("{family_name} {size:?} {filter:?} h={height}"),
                    );
                }
            }
        }
    }

    #[test]
    fn avg_of_flat_block_is_unchanged() {
        let src = vec![100u8; 16 * 9];
        for tier in supported_tiers() {
            let mut dst = vec![100u8; 16 * 8];
            let kernel = lookup(&avg_pixels_tab(tier), BlockSize::Size8, HpelFilter::X2);
            unsafe { kernel(dst.as_mut_ptr(), src.as_ptr(), 16, 8) };
            assert!(dst.iter().all(|&p| p == 100), "{}", tier.name());
        }
    }

    #[rstest]
    #[case(HpelFilter::X2, false, 2)]
    #[case(HpelFilter::X2, true, 1)]
    #[case(HpelFilter::Y2, false, 2)]
    #[case(HpelFilter::Y2, true, 1)]
    #[case(HpelFilter::Xy2, false, 2)]
    #[case(HpelFilter::Xy2, true, 1)]
    fn rounding_families_differ_on_ties(
        #[case] filter: HpelFilter,
        #[case] no_rnd: bool,
        #[case] expected: u8,
    ) {
        // Columns and rows alternate 1 and 2, so every tap pair and quad sums to an odd or
        // half-way value: x2 and y2 see 1+2, xy2 sees 1+2+2+1 or 2+1+1+2.
        let mut src = vec![0u8; 8 * 5];
        for y in 0..5 {
            for x in 0..8 {
                src[y * 8 + x] = 1 + ((x + y) % 2) as u8;
            }
        }
        for tier in supported_tiers() {
            let table = if no_rnd {
                put_no_rnd_pixels_tab(tier)
            } else {
                put_pixels_tab(tier)
            };
            let mut dst = vec![0u8; 8 * 4];
            let kernel = lookup(&table, BlockSize::Size4, filter);
            unsafe { kernel(dst.as_mut_ptr(), src.as_ptr(), 8, 4) };
            let block = read_block(&dst, 0, 8, 4, 4);
            let flat = block.iter().all(|&p| p == expected);
            assert!(flat, "{} {filter:?}", tier.name());
        }
    }

    #[test]
    fn no_rnd_copy_is_plain_copy() {
        let mut src = vec![0u8; 16 * 16];
        fill_random(&mut src, 3);
        for tier in supported_tiers() {
            let mut dst = vec![0u8; 16 * 16];
            let table = put_no_rnd_pixels_tab(tier);
            let kernel = lookup(&table, BlockSize::Size16, HpelFilter::Copy);
            unsafe { kernel(dst.as_mut_ptr(), src.as_ptr(), 16, 16) };
            assert_eq!(src, dst, "{}", tier.name());
        }
    }

    #[test]
    fn writes_stay_inside_block() {
        let src = vec![200u8; STRIDE * 17];
        for tier in supported_tiers() {
            for (family, name) in families() {
                for filter in HpelFilter::all_values() {
                    let mut dst = vec![7u8; STRIDE * 8];
                    let kernel = lookup(&family(tier), BlockSize::Size4, *filter);
                    unsafe { kernel(dst.as_mut_ptr(), src.as_ptr(), STRIDE, 8) };
                    for (i, &p) in dst.iter().enumerate() {
                        if i % STRIDE >= 4 {
                            let label = std::format!("{} {name} {filter:?}", tier.name());
                            assert_eq!(p, 7, "{label} wrote past the block");
                        }
                    }
                }
            }
        }
    }

    #[rstest]
    #[case(0, 0, HpelFilter::Copy)]
    #[case(1, 0, HpelFilter::X2)]
    #[case(0, 1, HpelFilter::Y2)]
    #[case(3, 5, HpelFilter::Xy2)]
    fn filter_from_fraction(#[case] dx: usize, #[case] dy: usize, #[case] expected: HpelFilter) {
        assert_eq!(HpelFilter::from_fraction(dx, dy), expected);
    }
}
