//! # Byte Rows
//!
//! Lossless prediction helpers operating on a single row of bytes, used by HuffYUV style coders.
//!
//! - `add_bytes`: `dst[i] += src[i]` (wrapping)
//! - `diff_bytes`: `dst[i] = src1[i] - src2[i]` (wrapping)
//! - `sub_hfyu_median_prediction`: residual against the median of left, top and gradient
//!
//! ## Median prediction
//!
//! For row `src2` with the row above it `src1`:
//!
//! ```text
//! pred   = median(l, src1[i], (l + src1[i] - lt) & 0xFF)
//! dst[i] = src2[i] - pred
//! l      = src2[i]
//! lt     = src1[i]
//! ```
//!
//! `l` and `lt` start from the caller's `left` and `left_top` and are written back at the end, so a
//! row can be processed in several calls.

use blockdsp_common::DspTier;

pub mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod sse2;

/// `(dst, src, w)`
pub type AddBytesFn = unsafe fn(dst: *mut u8, src: *const u8, w: usize);

/// `(dst, src1, src2, w)`
pub type DiffBytesFn = unsafe fn(dst: *mut u8, src1: *const u8, src2: *const u8, w: usize);

/// `(dst, src1, src2, w, left, left_top)`
pub type MedianPredictionFn = unsafe fn(
    dst: *mut u8,
    src1: *const u8,
    src2: *const u8,
    w: usize,
    left: &mut u8,
    left_top: &mut u8,
);

/// The byte row kernels of one tier.
///
/// # Safety (for every function)
///
/// Every pointer must be valid for `w` bytes. `dst` may equal (but not partially overlap) a
/// source for `add_bytes` and `diff_bytes`; it may not overlap the sources of the median
/// prediction.
#[derive(Debug, Clone, Copy)]
pub struct ByteRowFns {
    /// `dst[i] += src[i]`
    pub add_bytes: AddBytesFn,
    /// `dst[i] = src1[i] - src2[i]`
    pub diff_bytes: DiffBytesFn,
    /// Median prediction residual of `src2` with `src1` as the row above.
    pub sub_hfyu_median_prediction: MedianPredictionFn,
}

impl ByteRowFns {
    /// Kernels of the given tier.
    pub fn for_tier(tier: DspTier) -> Self {
        match tier {
            #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
            DspTier::Sse2 | DspTier::Ssse3 => Self {
                add_bytes: sse2::add_bytes,
                diff_bytes: sse2::diff_bytes,
                sub_hfyu_median_prediction: sse2::sub_hfyu_median_prediction,
            },
            _ => Self {
                add_bytes: portable::add_bytes,
                diff_bytes: portable::diff_bytes,
                sub_hfyu_median_prediction: portable::sub_hfyu_median_prediction,
            },
        }
    }
}
