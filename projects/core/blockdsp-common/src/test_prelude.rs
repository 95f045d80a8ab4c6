//! Common test imports and utilities for blockdsp-common tests.
//!
//! This module provides a common set of imports and utilities that are frequently
//! used across test modules in this crate.

// Re-export commonly used external crates
pub use rstest::rstest;
