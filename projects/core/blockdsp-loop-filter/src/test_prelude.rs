//! Common test imports and utilities for loop filter tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

#[allow(unused_imports)] // Might be unused in some CPU architectures, and that's ok.
pub use blockdsp_common::cpu_detect::*;
pub use blockdsp_common::{CpuCapabilities, DspTier};

// Standard library imports commonly used in tests
pub use std::vec;
pub use std::vec::Vec;

// Re-export super for convenience in test modules
pub use super::*;

/// Stride of the test planes.
pub(crate) const STRIDE: usize = 16;

/// Edge origin in the test planes: row 4, column 4, leaving room for the halo on every side.
pub(crate) const ORIGIN: usize = 4 * STRIDE + 4;

/// A `STRIDE x 12` plane with steps across both edges through the origin and random texture, so
/// the filter takes every branch for some position.
pub(crate) fn edge_plane(seed: u32) -> Vec<u8> {
    let mut plane = vec![0u8; STRIDE * 12];
    let mut state = seed.max(1);
    for (i, value) in plane.iter_mut().enumerate() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let (row, column) = (i / STRIDE, i % STRIDE);
        let base = 96 + 24 * (row >= 4) as u32 + 16 * (column >= 4) as u32;
        let spread = 8 + seed % 96;
        *value = (base + (state >> 8) % spread).min(255) as u8;
    }
    plane
}

/// Tiers the current CPU can run, portable first.
pub(crate) fn supported_tiers() -> Vec<DspTier> {
    let caps = CpuCapabilities::detect();
    DspTier::all_values()
        .iter()
        .copied()
        .filter(|tier| tier.is_supported_by(caps))
        .collect()
}
