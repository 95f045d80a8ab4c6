//! Validated half-pel interpolation and two source averages.

use crate::{DspContext, DspError};
use blockdsp_common::validate::{validate_height, Region};
use blockdsp_common::BlockSize;
use blockdsp_pixels::{hpel, l2, HpelFilter, PixelsTable};
use derive_enum_all_values::AllValues;

/// Which half-pel table a call uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum PixelOp {
    /// Store the interpolation, rounding half up.
    Put,
    /// Store the interpolation, rounding half down.
    PutNoRnd,
    /// Average the rounded interpolation into `dst`.
    Avg,
    /// Average the interpolation (rounded half down) into `dst`.
    AvgNoRnd,
}

/// Which two source average a call uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum L2Op {
    /// Store the average, rounding half up.
    Put,
    /// Store the average, rounding half down.
    PutNoRnd,
    /// Average the rounded average into `dst`.
    Avg,
}

impl DspContext {
    /// The half-pel table of `op`.
    #[inline]
    pub fn pixels_table(&self, op: PixelOp) -> &PixelsTable {
        match op {
            PixelOp::Put => &self.put_pixels_tab,
            PixelOp::PutNoRnd => &self.put_no_rnd_pixels_tab,
            PixelOp::Avg => &self.avg_pixels_tab,
            PixelOp::AvgNoRnd => &self.avg_no_rnd_pixels_tab,
        }
    }

    /// Interpolates a `size` wide, `h` tall block at half sample position `filter`.
    ///
    /// `src` and `dst` start at the block origin and share `stride`. `src` must also hold the
    /// extra column and/or row the filter reads (see [`HpelFilter::halo`]).
    ///
    /// # Errors
    ///
    /// - [`DspError::Validation`] if `h` is zero or a buffer is too small for its region
    #[allow(clippy::too_many_arguments)]
    pub fn pixels_slice(
        &self,
        op: PixelOp,
        size: BlockSize,
        filter: HpelFilter,
        dst: &mut [u8],
        src: &[u8],
        stride: usize,
        h: usize,
    ) -> Result<(), DspError> {
        validate_height(h, 1)?;
        let block = Region::new(size.width(), h);
        let (right, bottom) = filter.halo();
        block.validate(dst.len(), 0, stride)?;
        block
            .with_halo(0, 0, right, bottom)
            .validate(src.len(), 0, stride)?;

        let kernel = hpel::lookup(self.pixels_table(op), size, filter);
        // Safety: We've validated all preconditions
        unsafe { kernel(dst.as_mut_ptr(), src.as_ptr(), stride, h) };
        Ok(())
    }

    /// Averages `src1` and `src2` into `dst` over a `size` wide, `h` tall block.
    ///
    /// # Errors
    ///
    /// - [`DspError::Validation`] if `h` is zero or a buffer is too small for its region
    #[allow(clippy::too_many_arguments)]
    pub fn pixels_l2_slice(
        &self,
        op: L2Op,
        size: BlockSize,
        dst: &mut [u8],
        dst_stride: usize,
        src1: &[u8],
        src1_stride: usize,
        src2: &[u8],
        src2_stride: usize,
        h: usize,
    ) -> Result<(), DspError> {
        validate_height(h, 1)?;
        let block = Region::new(size.width(), h);
        block.validate(dst.len(), 0, dst_stride)?;
        block.validate(src1.len(), 0, src1_stride)?;
        block.validate(src2.len(), 0, src2_stride)?;

        let table = match op {
            L2Op::Put => &self.put_pixels_l2_tab,
            L2Op::PutNoRnd => &self.put_no_rnd_pixels_l2_tab,
            L2Op::Avg => &self.avg_pixels_l2_tab,
        };
        // Safety: We've validated all preconditions
        unsafe {
            l2::lookup(table, size)(
                dst.as_mut_ptr(),
                src1.as_ptr(),
                src2.as_ptr(),
                dst_stride,
                src1_stride,
                src2_stride,
                h,
            )
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;
    use blockdsp_common::BlockValidationError;

    #[rstest]
    #[case(HpelFilter::Copy, 15 * 17 + 16)]
    #[case(HpelFilter::X2, 15 * 17 + 17)]
    #[case(HpelFilter::Y2, 16 * 17 + 16)]
    #[case(HpelFilter::Xy2, 16 * 17 + 17)]
    fn source_must_cover_the_halo(#[case] filter: HpelFilter, #[case] needed: usize) {
        let dsp = DspContext::detect();
        let stride = 17;
        let mut dst = vec![0u8; stride * 16];
        let short = vec![0u8; needed - 1];
        let exact = vec![0u8; needed];
        let mut put = |src: &[u8]| {
            dsp.pixels_slice(
                PixelOp::Put,
                BlockSize::Size16,
                filter,
                &mut dst,
                src,
                stride,
                16,
            )
        };

        assert_eq!(
            put(&short),
            Err(DspError::Validation(BlockValidationError::BufferTooSmall {
                needed,
                actual: needed - 1,
            }))
        );
        assert!(put(&exact).is_ok());
    }

    #[test]
    fn zero_height_is_rejected() {
        let dsp = DspContext::detect();
        let mut dst = vec![0u8; 64];
        let src = vec![0u8; 64];
        let result = dsp.pixels_slice(
            PixelOp::Avg,
            BlockSize::Size8,
            HpelFilter::Copy,
            &mut dst,
            &src,
            8,
            0,
        );
        assert_eq!(
            result,
            Err(DspError::Validation(BlockValidationError::InvalidHeight(0)))
        );
    }

    #[test]
    fn l2_averages_with_independent_strides() {
        for dsp in supported_contexts() {
            let src1 = vec![10u8; 8 * 4];
            let src2 = vec![21u8; 12 * 4];
            let mut dst = vec![0u8; 16 * 4];
            let average = |op: L2Op, dst: &mut [u8]| {
                dsp.pixels_l2_slice(op, BlockSize::Size8, dst, 16, &src1, 8, &src2, 12, 4)
            };

            average(L2Op::Put, &mut dst).unwrap();
            for row in dst.chunks(16) {
                assert!(row[..8].iter().all(|&p| p == 16));
                assert!(row[8..].iter().all(|&p| p == 0));
            }

            average(L2Op::PutNoRnd, &mut dst).unwrap();
            assert_eq!(dst[0], 15);
        }
    }
}
