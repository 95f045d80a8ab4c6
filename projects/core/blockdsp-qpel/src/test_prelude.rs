//! Common test imports and utilities for quarter-pel tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Common types from blockdsp_common
#[allow(unused_imports)] // Might be unused in some CPU architectures, and that's ok.
pub use blockdsp_common::cpu_detect::*;
pub use blockdsp_common::{BlockSize, CpuCapabilities, DspTier};

// Standard library imports commonly used in tests
pub use std::format;
pub use std::vec;
pub use std::vec::Vec;

// Re-export super for convenience in test modules
pub use super::*;

/// Fills `buf` with deterministic pseudo random bytes (xorshift32).
pub(crate) fn fill_random(buf: &mut [u8], seed: u32) {
    let mut state = seed.max(1);
    for byte in buf.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *byte = (state >> 24) as u8;
    }
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

/// Helper to assert implementation results match reference implementation
pub(crate) fn assert_implementation_matches_reference(
    output_expected: &[u8],
    output_test: &[u8],
    impl_name: &str,
    case: &str,
) {
    assert_eq!(
        output_expected, output_test,
        "{impl_name} implementation produced different results than reference for {case}"
    );
}

/// A plane with `margin` pixels of addressable border around an `n x n` block.
pub(crate) struct TestPlane {
    pub data: Vec<u8>,
    pub stride: usize,
    pub origin: usize,
}

impl TestPlane {
    pub fn random(n: usize, margin: usize, seed: u32) -> Self {
        let stride = n + 2 * margin + 3;
        let mut data = vec![0u8; stride * (n + 2 * margin)];
        fill_random(&mut data, seed);
        Self {
            data,
            stride,
            origin: margin * stride + margin,
        }
    }

    pub fn filled(n: usize, margin: usize, value: u8) -> Self {
        let mut plane = Self::random(n, margin, 1);
        plane.data.fill(value);
        plane
    }

    pub fn block(&self, n: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(n * n);
        for y in 0..n {
            let row = self.origin + y * self.stride;
            out.extend_from_slice(&self.data[row..row + n]);
        }
        out
    }
}
