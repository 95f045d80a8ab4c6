//! # Sum of Squared Differences
//!
//! `Σ (pix1 - pix2)²` over a 16 or 8 wide block of `h` rows.

use crate::context::MetricTable;
use blockdsp_common::DspTier;

pub mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod sse2;

/// `sse16` and `sse8` of the given tier.
pub fn sse_tab(tier: DspTier) -> MetricTable {
    match tier {
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        DspTier::Sse2 | DspTier::Ssse3 => [sse2::sse::<16>, sse2::sse::<8>],
        _ => [portable::sse::<16>, portable::sse::<8>],
    }
}
