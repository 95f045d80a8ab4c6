//! # Vertical SAD
//!
//! Costs driven by vertical change, used to judge interlaced content:
//!
//! - `vsad16`: `Σ_{y≥1} Σ_x |d[y][x] - d[y-1][x]|` with `d = pix1 - pix2`.
//! - `vsad_intra16`: `Σ_{y≥1} Σ_x |p[y][x] - p[y-1][x]|` over `pix1`; `pix2` is ignored.
//!
//! Both read exactly the `16 x h` block.

use crate::context::MetricTable;
use blockdsp_common::DspTier;

pub mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod sse2;

/// `[vsad16, vsad_intra16]` of the given tier.
pub fn vsad_tab(tier: DspTier) -> MetricTable {
    match tier {
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        DspTier::Sse2 | DspTier::Ssse3 => [sse2::vsad16, sse2::vsad_intra16],
        _ => [portable::vsad16, portable::vsad_intra16],
    }
}
