//! Validated H.263 deblocking.

use crate::DspContext;
use blockdsp_loop_filter::{EdgeDirection, LoopFilterError, LoopFilterFn};

impl DspContext {
    /// Kernel filtering edges of `direction`.
    #[inline]
    pub fn loop_filter_fn(&self, direction: EdgeDirection) -> LoopFilterFn {
        match direction {
            EdgeDirection::Horizontal => self.h263_v_loop_filter,
            EdgeDirection::Vertical => self.h263_h_loop_filter,
        }
    }

    /// Filters the 8 sample edge of `direction` at byte `origin` of `plane`.
    ///
    /// For [`EdgeDirection::Horizontal`] the edge lies between the row above `origin` and the row
    /// of `origin`; two rows on each side are touched. For [`EdgeDirection::Vertical`] it lies
    /// between the columns left of and at `origin`.
    ///
    /// # Errors
    ///
    /// - [`LoopFilterError::QscaleOutOfRange`] if `qscale` has no strength
    /// - [`LoopFilterError::Validation`] if the plane cannot hold the samples around the edge
    pub fn h263_loop_filter_slice(
        &self,
        direction: EdgeDirection,
        plane: &mut [u8],
        origin: usize,
        stride: usize,
        qscale: u32,
    ) -> Result<(), LoopFilterError> {
        direction.validate(plane.len(), origin, stride, qscale)?;
        let filter = self.loop_filter_fn(direction);
        // Safety: We've validated all preconditions
        unsafe { filter(plane.as_mut_ptr().add(origin), stride, qscale) };
        Ok(())
    }
}
