//! Validated block I/O.
//!
//! Pixel slices start at the top left sample of the 8x8 block; `stride` is the distance between
//! rows.

use crate::{DspContext, DspError};
use blockdsp_common::validate::Region;
use blockdsp_pixels::block_io::{BLOCK_LEN, MACROBLOCK_BLOCKS};

const BLOCK: Region = Region::new(8, 8);

impl DspContext {
    /// Stores `block` into `dst`, clamping every coefficient to `0..=255`.
    ///
    /// # Errors
    ///
    /// - [`DspError::Validation`] if `dst` cannot hold 8 rows of 8 pixels with `stride`
    pub fn put_pixels_clamped_slice(
        &self,
        block: &[i16; BLOCK_LEN],
        dst: &mut [u8],
        stride: usize,
    ) -> Result<(), DspError> {
        BLOCK.validate(dst.len(), 0, stride)?;
        // Safety: We've validated all preconditions
        unsafe { (self.put_pixels_clamped)(block.as_ptr(), dst.as_mut_ptr(), stride) };
        Ok(())
    }

    /// Stores `block` into `dst`, clamping every coefficient to `-128..=127` and adding 128.
    ///
    /// # Errors
    ///
    /// - [`DspError::Validation`] if `dst` cannot hold 8 rows of 8 pixels with `stride`
    pub fn put_signed_pixels_clamped_slice(
        &self,
        block: &[i16; BLOCK_LEN],
        dst: &mut [u8],
        stride: usize,
    ) -> Result<(), DspError> {
        BLOCK.validate(dst.len(), 0, stride)?;
        // Safety: We've validated all preconditions
        unsafe { (self.put_signed_pixels_clamped)(block.as_ptr(), dst.as_mut_ptr(), stride) };
        Ok(())
    }

    /// Adds `block` to the pixels of `dst`, clamping the sums to `0..=255`.
    ///
    /// # Errors
    ///
    /// - [`DspError::Validation`] if `dst` cannot hold 8 rows of 8 pixels with `stride`
    pub fn add_pixels_clamped_slice(
        &self,
        block: &[i16; BLOCK_LEN],
        dst: &mut [u8],
        stride: usize,
    ) -> Result<(), DspError> {
        BLOCK.validate(dst.len(), 0, stride)?;
        // Safety: We've validated all preconditions
        unsafe { (self.add_pixels_clamped)(block.as_ptr(), dst.as_mut_ptr(), stride) };
        Ok(())
    }

    /// Widens the 8x8 pixels of `src` into `block`.
    ///
    /// # Errors
    ///
    /// - [`DspError::Validation`] if `src` cannot hold 8 rows of 8 pixels with `stride`
    pub fn get_pixels_slice(
        &self,
        block: &mut [i16; BLOCK_LEN],
        src: &[u8],
        stride: usize,
    ) -> Result<(), DspError> {
        BLOCK.validate(src.len(), 0, stride)?;
        // Safety: We've validated all preconditions
        unsafe { (self.get_pixels)(block.as_mut_ptr(), src.as_ptr(), stride) };
        Ok(())
    }

    /// Stores `src1 - src2` into `block`.
    ///
    /// # Errors
    ///
    /// - [`DspError::Validation`] if either source cannot hold 8 rows of 8 pixels with `stride`
    pub fn diff_pixels_slice(
        &self,
        block: &mut [i16; BLOCK_LEN],
        src1: &[u8],
        src2: &[u8],
        stride: usize,
    ) -> Result<(), DspError> {
        BLOCK.validate(src1.len(), 0, stride)?;
        BLOCK.validate(src2.len(), 0, stride)?;
        // Safety: We've validated all preconditions
        unsafe { (self.diff_pixels)(block.as_mut_ptr(), src1.as_ptr(), src2.as_ptr(), stride) };
        Ok(())
    }

    /// Zeroes the coefficient blocks of a macroblock.
    pub fn clear_blocks_slice(&self, blocks: &mut [[i16; BLOCK_LEN]; MACROBLOCK_BLOCKS]) {
        // Safety: The array is contiguous and exactly six blocks long.
        unsafe { (self.clear_blocks)(blocks.as_mut_ptr() as *mut i16) };
    }
}
