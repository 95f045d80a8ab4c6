//! # Block I/O
//!
//! Moves 8x8 blocks between the transform domain and a frame buffer.
//!
//! A coefficient block is 64 contiguous `i16` values in row major order (stride 8). The pixel
//! side is an 8x8 region of a frame addressed by a row stride in bytes.
//!
//! | Operation | Per sample |
//! |---|---|
//! | `put_pixels_clamped` | `dst = clamp(c, 0, 255)` |
//! | `put_signed_pixels_clamped` | `dst = clamp(c, -128, 127) + 128` |
//! | `add_pixels_clamped` | `dst = clamp(dst + c, 0, 255)` |
//! | `get_pixels` | `c = src` |
//! | `diff_pixels` | `c = src1 - src2` |
//! | `clear_blocks` | six blocks of `c = 0` |

use blockdsp_common::DspTier;

pub mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod sse2;

/// Number of coefficients in a block.
pub const BLOCK_LEN: usize = 64;

/// Number of blocks cleared by `clear_blocks` (one 4:2:0 macroblock).
pub const MACROBLOCK_BLOCKS: usize = 6;

/// Writes a coefficient block to pixels: `(block, pixels, stride)`.
pub type PutClampedFn = unsafe fn(*const i16, *mut u8, usize);

/// Reads pixels into a coefficient block: `(block, pixels, stride)`.
pub type GetPixelsFn = unsafe fn(*mut i16, *const u8, usize);

/// Stores the difference of two pixel blocks: `(block, src1, src2, stride)`.
pub type DiffPixelsFn = unsafe fn(*mut i16, *const u8, *const u8, usize);

/// Zeroes [`MACROBLOCK_BLOCKS`] consecutive coefficient blocks.
pub type ClearBlocksFn = unsafe fn(*mut i16);

/// The block I/O kernels of one tier.
///
/// # Safety (for every function)
///
/// - Coefficient pointers must be valid for [`BLOCK_LEN`] `i16` values (six times that for
///   `clear_blocks`); they need not be aligned beyond `i16`.
/// - Pixel pointers must be valid for an 8x8 region with the given stride.
#[derive(Debug, Clone, Copy)]
pub struct BlockIoFns {
    /// `dst = clamp(c, 0, 255)`
    pub put_pixels_clamped: PutClampedFn,
    /// `dst = clamp(c, -128, 127) + 128`
    pub put_signed_pixels_clamped: PutClampedFn,
    /// `dst = clamp(dst + c, 0, 255)`
    pub add_pixels_clamped: PutClampedFn,
    /// `c = src`
    pub get_pixels: GetPixelsFn,
    /// `c = src1 - src2`
    pub diff_pixels: DiffPixelsFn,
    /// `c = 0` over six blocks
    pub clear_blocks: ClearBlocksFn,
}

impl BlockIoFns {
    /// Kernels of the given tier.
    ///
    /// SIMD tiers fall back to the portable kernels on targets without them. The caller must
    /// only use a tier the CPU supports (see [`DspTier::is_supported_by`]).
    pub fn for_tier(tier: DspTier) -> Self {
        match tier {
            DspTier::Portable => Self::portable(),
            #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
            DspTier::Sse2 | DspTier::Ssse3 => Self {
                put_pixels_clamped: sse2::put_pixels_clamped,
                put_signed_pixels_clamped: sse2::put_signed_pixels_clamped,
                add_pixels_clamped: sse2::add_pixels_clamped,
                get_pixels: sse2::get_pixels,
                diff_pixels: sse2::diff_pixels,
                clear_blocks: sse2::clear_blocks,
            },
            #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
            _ => Self::portable(),
        }
    }

    fn portable() -> Self {
        Self {
            put_pixels_clamped: portable::put_pixels_clamped,
            put_signed_pixels_clamped: portable::put_signed_pixels_clamped,
            add_pixels_clamped: portable::add_pixels_clamped,
            get_pixels: portable::get_pixels,
            diff_pixels: portable::diff_pixels,
            clear_blocks: portable::clear_blocks,
        }
    }
}
