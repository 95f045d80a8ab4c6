//! Aligned allocation for kernel buffers.
//!
//! Frame buffers and coefficient blocks perform best on cache line aligned memory; the SIMD
//! kernels themselves accept any alignment. The benches allocate their planes here.
//!
//! ## Useful APIs
//!
//! [`allocate_align_64`]: Allocates uninitialized memory aligned to 64-bytes.
//! [`allocate_plane`]: Allocates a zeroed plane of `stride * rows` bytes aligned to 64-bytes.

use core::alloc::{Layout, LayoutError};
use safe_allocator_api::prelude::*;
use safe_allocator_api::RawAlloc;
use thiserror::Error;

/// Allocates data with an alignment of 64 bytes.
///
/// # Parameters
///
/// - `num_bytes`: The number of bytes to allocate
///
/// # Returns
///
/// A [`RawAlloc`] containing the allocated data
pub fn allocate_align_64(num_bytes: usize) -> Result<RawAlloc, AllocateError> {
    let layout = Layout::from_size_align(num_bytes, 64)?;
    Ok(RawAlloc::new(layout)?)
}

/// Allocates a zero filled pixel plane of `stride * rows` bytes, aligned to 64 bytes.
///
/// # Parameters
///
/// - `stride`: Bytes per row
/// - `rows`: Number of rows
pub fn allocate_plane(stride: usize, rows: usize) -> Result<RawAlloc, AllocateError> {
    let mut plane = allocate_align_64(stride * rows)?;
    plane.as_mut_slice().fill(0);
    Ok(plane)
}

/// An error that happened in memory allocation within the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocateError {
    /// An error that occurred while creating a layout for allocation.
    #[error("Invalid layout provided. Likely due to `num_bytes` in `allocate_align_64` being larger than isize::MAX. {0}")]
    LayoutError(#[from] LayoutError),

    /// An error that occurred while allocating memory.
    #[error(transparent)]
    AllocationFailed(#[from] AllocError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_is_aligned_and_zeroed() {
        let plane = allocate_plane(48, 24).unwrap();
        assert_eq!(plane.as_ptr() as usize % 64, 0);
        assert_eq!(plane.len(), 48 * 24);
        assert!(plane.as_slice().iter().all(|&b| b == 0));
    }
}
