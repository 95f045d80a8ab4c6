//! Validated metrics, block statistics and basis helpers.

use crate::{DspContext, DspError};
use blockdsp_common::validate::{validate_height, Region};
use blockdsp_common::{BlockSize, BlockValidationError};
use blockdsp_metrics::basis::MAX_SCALE;
use blockdsp_metrics::{MetricContext, MetricFn};
use derive_enum_all_values::AllValues;

/// Which block comparison a call uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum MetricKind {
    /// Sum of squared differences.
    Sse,
    /// SSE plus the weighted change in high frequency noise.
    Nsse,
    /// Sum of absolute Hadamard transformed differences.
    Hadamard8Diff,
    /// Vertical SAD of the difference; 16 wide only.
    Vsad,
    /// Vertical SAD of the first block alone; 16 wide only.
    VsadIntra,
}

impl MetricKind {
    /// Whether the metric reads the second block.
    #[inline]
    pub const fn reads_second_block(self) -> bool {
        !matches!(self, MetricKind::VsadIntra)
    }
}

impl DspContext {
    /// The kernel of `kind` for blocks `size` wide, or [`None`] if there is none.
    pub fn metric_fn(&self, kind: MetricKind, size: BlockSize) -> Option<MetricFn> {
        let index = match size {
            BlockSize::Size16 => 0,
            BlockSize::Size8 => 1,
            BlockSize::Size4 => return None,
        };
        match kind {
            MetricKind::Sse => Some(self.sse[index]),
            MetricKind::Nsse => Some(self.nsse[index]),
            MetricKind::Hadamard8Diff => Some(self.hadamard8_diff[index]),
            MetricKind::Vsad if size == BlockSize::Size16 => Some(self.vsad[0]),
            MetricKind::VsadIntra if size == BlockSize::Size16 => Some(self.vsad[1]),
            MetricKind::Vsad | MetricKind::VsadIntra => None,
        }
    }

    /// Compares two blocks `size` wide and `h` tall, both starting at their slice's first byte.
    ///
    /// `ctx` tunes [`MetricKind::Nsse`]; the other metrics ignore it.
    ///
    /// # Errors
    ///
    /// - [`DspError::Validation`] if the metric has no kernel for `size`, `h` is not supported
    ///   (SATD takes 8, or 16 for 16 wide blocks) or a block does not fit its slice
    #[allow(clippy::too_many_arguments)]
    pub fn metric_slice(
        &self,
        kind: MetricKind,
        size: BlockSize,
        ctx: Option<&MetricContext>,
        pix1: &[u8],
        pix2: &[u8],
        stride: usize,
        h: usize,
    ) -> Result<u32, DspError> {
        let metric = self
            .metric_fn(kind, size)
            .ok_or(BlockValidationError::UnsupportedBlockSize(size.width()))?;

        match kind {
            MetricKind::Hadamard8Diff if !(h == 8 || (h == 16 && size == BlockSize::Size16)) => {
                return Err(BlockValidationError::InvalidHeight(h).into());
            }
            _ => validate_height(h, 1)?,
        }

        let block = Region::new(size.width(), h);
        block.validate(pix1.len(), 0, stride)?;
        let pix2 = if kind.reads_second_block() {
            block.validate(pix2.len(), 0, stride)?;
            pix2
        } else {
            pix1
        };

        // Safety: We've validated all preconditions
        Ok(unsafe { metric(ctx, pix1.as_ptr(), pix2.as_ptr(), stride, h) })
    }

    /// `Σ p²` over the 16x16 block at the start of `pix`.
    ///
    /// # Errors
    ///
    /// - [`DspError::Validation`] if the block does not fit `pix`
    pub fn pix_norm1_slice(&self, pix: &[u8], stride: usize) -> Result<u32, DspError> {
        Region::new(16, 16).validate(pix.len(), 0, stride)?;
        // Safety: We've validated all preconditions
        Ok(unsafe { (self.pix_norm1)(pix.as_ptr(), stride) })
    }

    /// `Σ p` over the 16x16 block at the start of `pix`.
    ///
    /// # Errors
    ///
    /// - [`DspError::Validation`] if the block does not fit `pix`
    pub fn pix_sum_slice(&self, pix: &[u8], stride: usize) -> Result<u32, DspError> {
        Region::new(16, 16).validate(pix.len(), 0, stride)?;
        // Safety: We've validated all preconditions
        Ok(unsafe { (self.pix_sum)(pix.as_ptr(), stride) })
    }

    /// Weighted error of `rem` after adding `scale * basis`.
    ///
    /// # Errors
    ///
    /// - [`DspError::ScaleOutOfRange`] if `|scale| >= 256`
    pub fn try_8x8basis_slice(
        &self,
        rem: &[i16; 64],
        weight: &[i16; 64],
        basis: &[i16; 64],
        scale: i32,
    ) -> Result<u32, DspError> {
        if scale.unsigned_abs() >= MAX_SCALE as u32 {
            return Err(DspError::ScaleOutOfRange(scale));
        }
        // Safety: We've validated all preconditions
        Ok(unsafe { (self.try_8x8basis)(rem.as_ptr(), weight.as_ptr(), basis.as_ptr(), scale) })
    }

    /// Adds `scale * basis` to `rem`, for any `scale`.
    pub fn add_8x8basis_slice(&self, rem: &mut [i16; 64], basis: &[i16; 64], scale: i32) {
        // Safety: Both arrays hold the 64 values the kernel touches.
        unsafe { (self.add_8x8basis)(rem.as_mut_ptr(), basis.as_ptr(), scale) };
    }
}
