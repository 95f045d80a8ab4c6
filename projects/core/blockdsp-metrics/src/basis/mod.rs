//! # Noise Shaping Basis Helpers
//!
//! Used by quantizers that refine coefficients against a reconstruction residual. `rem` holds
//! the residual in `RECON_SHIFT` fixed point and `basis` an 8x8 DCT basis function in
//! `BASIS_SHIFT` fixed point.
//!
//! ```text
//! step   = (basis[i] * scale + (1 << 9)) >> 10
//! try    : b = (rem[i] + step) >> 6; sum += (weight[i] * b)² >> 4; result = sum >> 2
//! add    : rem[i] += step
//! ```

use blockdsp_common::DspTier;

pub mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod sse2;

/// Fixed point precision of the basis functions.
pub const BASIS_SHIFT: u32 = 16;

/// Fixed point precision of the reconstruction residual.
pub const RECON_SHIFT: u32 = 6;

/// Largest `|scale|` (exclusive) `try_8x8basis` accepts, and the SIMD `add_8x8basis` handles
/// without falling back to scalar code.
pub const MAX_SCALE: i32 = 256;

/// `(rem, weight, basis, scale) -> weighted error`
///
/// # Safety
///
/// Every pointer must be valid for 64 values. `|scale| < 256`.
pub type TryBasisFn =
    unsafe fn(rem: *const i16, weight: *const i16, basis: *const i16, scale: i32) -> u32;

/// `(rem, basis, scale)`
///
/// # Safety
///
/// Every pointer must be valid for 64 values. Any `scale` is accepted.
pub type AddBasisFn = unsafe fn(rem: *mut i16, basis: *const i16, scale: i32);

/// `(basis * scale)` rounded from `BASIS_SHIFT` to `RECON_SHIFT` precision.
#[inline(always)]
pub(crate) fn basis_step(basis: i16, scale: i32) -> i32 {
    const SHIFT: u32 = BASIS_SHIFT - RECON_SHIFT;
    (basis as i32).wrapping_mul(scale).wrapping_add(1 << (SHIFT - 1)) >> SHIFT
}

/// The basis helpers of one tier.
#[derive(Debug, Clone, Copy)]
pub struct BasisFns {
    /// Weighted error of the residual after adding `scale * basis`.
    pub try_8x8basis: TryBasisFn,
    /// Adds `scale * basis` to the residual.
    pub add_8x8basis: AddBasisFn,
}

impl BasisFns {
    /// Kernels of the given tier.
    pub fn for_tier(tier: DspTier) -> Self {
        match tier {
            #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
            DspTier::Sse2 | DspTier::Ssse3 => Self {
                try_8x8basis: portable::try_8x8basis,
                add_8x8basis: sse2::add_8x8basis,
            },
            _ => Self {
                try_8x8basis: portable::try_8x8basis,
                add_8x8basis: portable::add_8x8basis,
            },
        }
    }
}
