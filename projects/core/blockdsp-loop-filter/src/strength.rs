//! Strength table and edge geometry.

use crate::error::LoopFilterError;
use blockdsp_common::validate::Region;

/// Number of quantizer scales the strength table covers.
pub const MAX_QSCALE: u32 = 32;

/// Filter strength by quantizer scale (H.263 Annex J, Table J.2).
pub const STRENGTH: [u8; MAX_QSCALE as usize] = [
    0, 1, 1, 2, 2, 3, 3, 4, 4, 4, 5, 5, 6, 6, 7, 7, 7, 8, 8, 8, 9, 9, 9, 10, 10, 10, 11, 11, 11,
    12, 12, 12,
];

/// Strength for `qscale`.
#[inline]
pub fn strength(qscale: u32) -> Result<u8, LoopFilterError> {
    STRENGTH
        .get(qscale as usize)
        .copied()
        .ok_or(LoopFilterError::QscaleOutOfRange(qscale))
}

/// Orientation of the block edge being filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeDirection {
    /// Edge between the row above `src` and the row of `src`; filtered by `h263_v_loop_filter`.
    Horizontal,
    /// Edge between the column left of `src` and the column of `src`; filtered by
    /// `h263_h_loop_filter`.
    Vertical,
}

impl EdgeDirection {
    /// Samples read and written around the edge origin.
    pub const fn region(self) -> Region {
        match self {
            EdgeDirection::Horizontal => Region::new(8, 2).with_halo(0, 2, 0, 0),
            EdgeDirection::Vertical => Region::new(2, 8).with_halo(2, 0, 0, 0),
        }
    }

    /// Checks a plane of `len` bytes with the edge origin at `origin` and the quantizer scale.
    pub fn validate(
        self,
        len: usize,
        origin: usize,
        stride: usize,
        qscale: u32,
    ) -> Result<(), LoopFilterError> {
        strength(qscale)?;
        self.region().validate(len, origin, stride)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use blockdsp_common::BlockValidationError;

    #[test]
    fn table_is_monotonic() {
        assert!(STRENGTH.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(STRENGTH[31], 12);
    }

    #[rstest]
    #[case(0, Ok(0))]
    #[case(5, Ok(3))]
    #[case(31, Ok(12))]
    #[case(32, Err(LoopFilterError::QscaleOutOfRange(32)))]
    fn strength_lookup(#[case] qscale: u32, #[case] expected: Result<u8, LoopFilterError>) {
        assert_eq!(strength(qscale), expected);
    }

    #[rstest]
    #[case(EdgeDirection::Horizontal, 2, 0, 8, 4)]
    #[case(EdgeDirection::Vertical, 0, 2, 4, 8)]
    fn regions(
        #[case] direction: EdgeDirection,
        #[case] top: usize,
        #[case] left: usize,
        #[case] width: usize,
        #[case] height: usize,
    ) {
        let region = direction.region();
        assert_eq!(
            (region.top, region.left, region.width, region.height),
            (top, left, width, height)
        );
    }

    #[test]
    fn validate_reports_both_kinds() {
        assert_eq!(
            EdgeDirection::Horizontal.validate(256, 32, 16, 40),
            Err(LoopFilterError::QscaleOutOfRange(40))
        );
        assert_eq!(
            EdgeDirection::Horizontal.validate(256, 16, 16, 4),
            Err(LoopFilterError::Validation(BlockValidationError::HaloOutOfBounds {
                needed: 32,
                origin: 16,
            }))
        );
        assert_eq!(EdgeDirection::Vertical.validate(256, 2, 16, 4), Ok(()));
    }
}
