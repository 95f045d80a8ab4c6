//! Validation of caller supplied slices against the region a kernel touches.
//!
//! The raw kernels take pointers and trust the caller. The safe wrappers describe the region a
//! kernel reads or writes as a [`Region`] and check it here before calling into them.

use thiserror::Error;

/// A caller supplied buffer cannot hold the region a kernel accesses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockValidationError {
    /// The stride is smaller than the width of the accessed region.
    #[error("Invalid stride: {stride} (must be at least {width})")]
    InvalidStride {
        /// The stride passed in.
        stride: usize,
        /// The width of the region accessed per row.
        width: usize,
    },

    /// The block height is not supported by the kernel.
    #[error("Invalid block height: {0}")]
    InvalidHeight(usize),

    /// The buffer ends before the accessed region does.
    #[error("Buffer too small: needed {needed}, got {actual}")]
    BufferTooSmall {
        /// Bytes needed from the start of the buffer.
        needed: usize,
        /// Length of the buffer.
        actual: usize,
    },

    /// The block origin is too close to the start of the buffer for the rows and columns the
    /// kernel reads before it.
    #[error("Block origin {origin} leaves no room for {needed} bytes of halo before it")]
    HaloOutOfBounds {
        /// Bytes the kernel reads before the origin.
        needed: usize,
        /// Offset of the block origin in the buffer.
        origin: usize,
    },

    /// The block size has no kernel.
    #[error("Unsupported block size: {0}")]
    UnsupportedBlockSize(usize),
}

/// Number of bytes spanned by `height` rows of `width` bytes spaced `stride` apart.
#[inline]
pub const fn region_len(stride: usize, width: usize, height: usize) -> usize {
    if height == 0 {
        0
    } else {
        (height - 1) * stride + width
    }
}

/// Rectangle accessed by a kernel, relative to the block origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Columns accessed to the left of the origin.
    pub left: usize,
    /// Rows accessed above the origin.
    pub top: usize,
    /// Total width accessed, including `left`.
    pub width: usize,
    /// Total height accessed, including `top`.
    pub height: usize,
}

impl Region {
    /// A `width x height` region starting at the origin.
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            left: 0,
            top: 0,
            width,
            height,
        }
    }

    /// Extends the region by `left`/`top` before the origin and `right`/`bottom` past its end.
    #[inline]
    pub const fn with_halo(self, left: usize, top: usize, right: usize, bottom: usize) -> Self {
        Self {
            left: self.left + left,
            top: self.top + top,
            width: self.width + left + right,
            height: self.height + top + bottom,
        }
    }

    /// Checks that a buffer of `len` bytes, with the block origin at byte `origin`, holds this
    /// region.
    ///
    /// # Returns
    ///
    /// The offset of the first byte of the region (the top left halo sample).
    pub fn validate(
        &self,
        len: usize,
        origin: usize,
        stride: usize,
    ) -> Result<usize, BlockValidationError> {
        if stride < self.width {
            return Err(BlockValidationError::InvalidStride {
                stride,
                width: self.width,
            });
        }

        let before = self.top * stride + self.left;
        if origin < before {
            return Err(BlockValidationError::HaloOutOfBounds {
                needed: before,
                origin,
            });
        }

        let start = origin - before;
        let needed = start + region_len(stride, self.width, self.height);
        if len < needed {
            return Err(BlockValidationError::BufferTooSmall {
                needed,
                actual: len,
            });
        }

        Ok(start)
    }
}

/// Checks that `height` is non-zero and a multiple of `multiple`.
#[inline]
pub fn validate_height(height: usize, multiple: usize) -> Result<(), BlockValidationError> {
    if height == 0 || height % multiple != 0 {
        return Err(BlockValidationError::InvalidHeight(height));
    }
    Ok(())
}
