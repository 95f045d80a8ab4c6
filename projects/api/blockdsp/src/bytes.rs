//! Validated byte row prediction.

use crate::{DspContext, DspError};
use blockdsp_common::BlockValidationError;

/// Checks that a source row covers the `needed` bytes of the destination row.
#[inline]
fn check_source(needed: usize, source: &[u8]) -> Result<(), BlockValidationError> {
    if source.len() < needed {
        return Err(BlockValidationError::BufferTooSmall {
            needed,
            actual: source.len(),
        });
    }
    Ok(())
}

impl DspContext {
    /// `dst[i] += src[i]` for every byte of `dst`, wrapping.
    ///
    /// # Errors
    ///
    /// - [`DspError::Validation`] if `src` is shorter than `dst`
    pub fn add_bytes_slice(&self, dst: &mut [u8], src: &[u8]) -> Result<(), DspError> {
        check_source(dst.len(), src)?;
        // Safety: We've validated all preconditions
        unsafe { (self.add_bytes)(dst.as_mut_ptr(), src.as_ptr(), dst.len()) };
        Ok(())
    }

    /// `dst[i] = src1[i] - src2[i]` for every byte of `dst`, wrapping.
    ///
    /// # Errors
    ///
    /// - [`DspError::Validation`] if a source is shorter than `dst`
    pub fn diff_bytes_slice(
        &self,
        dst: &mut [u8],
        src1: &[u8],
        src2: &[u8],
    ) -> Result<(), DspError> {
        check_source(dst.len(), src1)?;
        check_source(dst.len(), src2)?;
        // Safety: We've validated all preconditions
        unsafe { (self.diff_bytes)(dst.as_mut_ptr(), src1.as_ptr(), src2.as_ptr(), dst.len()) };
        Ok(())
    }

    /// Median prediction residual of row `src2`, with `src1` the row above it.
    ///
    /// `left` and `left_top` carry the left and top-left neighbours in and out, so a long row can
    /// be split across calls.
    ///
    /// # Errors
    ///
    /// - [`DspError::Validation`] if a source is shorter than `dst`
    pub fn sub_hfyu_median_prediction_slice(
        &self,
        dst: &mut [u8],
        src1: &[u8],
        src2: &[u8],
        left: &mut u8,
        left_top: &mut u8,
    ) -> Result<(), DspError> {
        check_source(dst.len(), src1)?;
        check_source(dst.len(), src2)?;
        // Safety: We've validated all preconditions
        unsafe {
            (self.sub_hfyu_median_prediction)(
                dst.as_mut_ptr(),
                src1.as_ptr(),
                src2.as_ptr(),
                dst.len(),
                left,
                left_top,
            )
        };
        Ok(())
    }
}
