//! Common test imports and utilities for pixel primitive tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Common types from blockdsp_common
pub use blockdsp_common::allocate::allocate_plane;
#[allow(unused_imports)] // Might be unused in some CPU architectures, and that's ok.
pub use blockdsp_common::cpu_detect::*;
pub use blockdsp_common::{BlockSize, CpuCapabilities, DspTier};
pub use safe_allocator_api::RawAlloc;

// Standard library imports commonly used in tests
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

/// Extracts a `width x height` block at `origin` from a plane.
pub(crate) fn read_block(
    plane: &[u8],
    origin: usize,
    stride: usize,
    width: usize,
    height: usize,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(width * height);
    for y in 0..height {
        let row = origin + y * stride;
        out.extend_from_slice(&plane[row..row + width]);
    }
    out
}
