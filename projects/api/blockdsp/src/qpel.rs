//! Validated quarter-pel motion compensation.

use crate::{DspContext, DspError};
use blockdsp_common::validate::Region;
use blockdsp_common::{BlockSize, BlockValidationError};
use blockdsp_qpel::{h264, mpeg4, phase_index, QpelPhases};
use derive_enum_all_values::AllValues;

/// Which quarter-pel family and operation a call uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum QpelOp {
    /// MPEG-4 8-tap interpolation, stored.
    Mpeg4Put,
    /// MPEG-4 8-tap interpolation with the no-rounding constants, stored.
    Mpeg4PutNoRnd,
    /// MPEG-4 8-tap interpolation averaged into `dst`.
    Mpeg4Avg,
    /// H.264 6-tap interpolation, stored.
    H264Put,
    /// H.264 6-tap interpolation averaged into `dst`.
    H264Avg,
}

impl QpelOp {
    /// Whether this is one of the H.264 operations.
    #[inline]
    pub const fn is_h264(self) -> bool {
        matches!(self, QpelOp::H264Put | QpelOp::H264Avg)
    }

    /// Source samples read for a block of `size`, relative to the block origin.
    #[inline]
    pub const fn source_region(self, size: BlockSize) -> Region {
        if self.is_h264() {
            h264::source_region(size)
        } else {
            mpeg4::source_region(size)
        }
    }
}

impl DspContext {
    /// The 16 phases of `op` for `size`, or [`None`] for sizes the family lacks (MPEG-4 4x4).
    pub fn qpel_phases(&self, op: QpelOp, size: BlockSize) -> Option<&QpelPhases> {
        match op {
            QpelOp::H264Put => Some(&self.put_h264_qpel_pixels_tab[size.table_index()]),
            QpelOp::H264Avg => Some(&self.avg_h264_qpel_pixels_tab[size.table_index()]),
            QpelOp::Mpeg4Put => mpeg4::size_index(size).map(|i| &self.put_qpel_pixels_tab[i]),
            QpelOp::Mpeg4PutNoRnd => {
                mpeg4::size_index(size).map(|i| &self.put_no_rnd_qpel_pixels_tab[i])
            }
            QpelOp::Mpeg4Avg => mpeg4::size_index(size).map(|i| &self.avg_qpel_pixels_tab[i]),
        }
    }

    /// Motion compensates a square block of `size` at quarter sample offset `(mx, my)`.
    ///
    /// `dst` starts at the block origin. `src` is a reference plane with the block origin at
    /// `src_origin`; it must hold [`QpelOp::source_region`] around it. Both use `stride`.
    ///
    /// # Errors
    ///
    /// - [`DspError::InvalidPhase`] if `mx` or `my` is 4 or more
    /// - [`DspError::Validation`] if the family has no kernel for `size` or a buffer is too
    ///   small for its region
    #[allow(clippy::too_many_arguments)]
    pub fn qpel_mc_slice(
        &self,
        op: QpelOp,
        size: BlockSize,
        mx: usize,
        my: usize,
        dst: &mut [u8],
        src: &[u8],
        src_origin: usize,
        stride: usize,
    ) -> Result<(), DspError> {
        if mx >= 4 || my >= 4 {
            return Err(DspError::InvalidPhase { mx, my });
        }
        let phases = self
            .qpel_phases(op, size)
            .ok_or(BlockValidationError::UnsupportedBlockSize(size.width()))?;

        let n = size.width();
        Region::new(n, n).validate(dst.len(), 0, stride)?;
        let source = op.source_region(size);
        source.validate(src.len(), src_origin, stride)?;

        let kernel = phases[phase_index(mx, my)];
        // Safety: We've validated all preconditions
        unsafe { kernel(dst.as_mut_ptr(), src.as_ptr().add(src_origin), stride) };
        Ok(())
    }
}
