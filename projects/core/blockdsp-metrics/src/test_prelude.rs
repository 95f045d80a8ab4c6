//! Common test imports and utilities for metric tests
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

/// Stride used by the test planes; wider than any block so row ends are observable.
pub(crate) const STRIDE: usize = 24;

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

/// Fills `buf` with deterministic pseudo random values in `min..=max`.
pub(crate) fn fill_random_i16(buf: &mut [i16], seed: u32, min: i16, max: i16) {
    let mut state = seed.max(1);
    let range = (max as i32 - min as i32 + 1) as u32;
    for value in buf.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *value = (min as i32 + (state % range) as i32) as i16;
    }
}

/// A random `STRIDE x 16` plane.
pub(crate) fn random_plane(seed: u32) -> Vec<u8> {
    let mut plane = vec![0u8; STRIDE * 16];
    fill_random(&mut plane, seed);
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

/// Helper to assert a tier's cost matches the portable cost
pub(crate) fn assert_cost_matches_reference(
    expected: u32,
    actual: u32,
    impl_name: &str,
    case: &str,
) {
    assert_eq!(
        expected, actual,
        "{impl_name} implementation produced a different cost than reference for {case}"
    );
}

/// Runs a metric over two `STRIDE` planes.
pub(crate) fn run(metric: MetricFn, a: &[u8], b: &[u8], h: usize) -> u32 {
    unsafe { metric(None, a.as_ptr(), b.as_ptr(), STRIDE, h) }
}
