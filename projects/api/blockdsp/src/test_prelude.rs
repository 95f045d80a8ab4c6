//! Common test imports and utilities for the dispatch crate
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Standard library imports commonly used in tests
pub use std::format;
pub use std::vec;
pub use std::vec::Vec;

// Re-export super for convenience in test modules
pub use super::*;

/// Tables of every tier the current CPU can run, portable first.
pub(crate) fn supported_contexts() -> Vec<DspContext> {
    DspContext::all_supported().collect()
}
