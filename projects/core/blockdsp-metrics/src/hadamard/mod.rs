//! # Hadamard SATD
//!
//! Sum of absolute transformed differences: the 8x8 difference block goes through a separable
//! 8-point Hadamard transform (three butterfly passes over rows, then over columns) and the
//! absolute values of all 64 coefficients, DC included, are summed.
//!
//! The 16 wide variant sums the 8x8 quadrants: four for `h == 16`, two for `h == 8`.
//!
//! Every coefficient of 8-bit input is bounded by `64 * 255`, so the 16-bit SIMD lanes never
//! overflow and the sum is accumulated at full width.

use crate::context::MetricTable;
use blockdsp_common::DspTier;

pub mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod ssse3;

/// `hadamard8_diff16` and `hadamard8_diff8` of the given tier.
pub fn hadamard8_diff_tab(tier: DspTier) -> MetricTable {
    match tier {
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        DspTier::Ssse3 => [ssse3::hadamard8_diff::<16>, ssse3::hadamard8_diff::<8>],
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        DspTier::Sse2 => [sse2::hadamard8_diff::<16>, sse2::hadamard8_diff::<8>],
        _ => [
            portable::hadamard8_diff::<16>,
            portable::hadamard8_diff::<8>,
        ],
    }
}
