//! Helpers for CPU feature detection without using std.
//!
//! This module provides CPU feature detection for SIMD instruction sets using the
//! `cpufeatures` crate. [`CpuCapabilities::detect`] is built on top of these.
//!
//! The functions are minimal overhead, they have an init that's called once, and every subsequent
//! call simply loads and compares a bool.
//!
//! [`CpuCapabilities::detect`]: crate::CpuCapabilities::detect

/// Checks if the CPU supports SSSE3 (Supplemental SSE3) instructions.
///
/// SSSE3 adds `pabsw`, which the SATD and noise kernels use for the absolute value of
/// transformed differences.
///
/// # Returns
/// `true` if the CPU supports SSSE3 instructions, `false` otherwise.
#[inline]
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub fn has_ssse3() -> bool {
    cpufeatures::new!(cpuid_ssse3, "ssse3");
    cpuid_ssse3::get()
}

/// Checks if the CPU supports SSE2 (Streaming SIMD Extensions 2) instructions.
///
/// SSE2 is available on virtually all x86-64 processors and provides the 128-bit integer
/// operations (`pavgb`, `packuswb`, `pmaddwd`, `psadbw`) that every SIMD kernel in this
/// workspace is built from.
///
/// # Returns
/// `true` if the CPU supports SSE2 instructions, `false` otherwise.
#[inline]
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub fn has_sse2() -> bool {
    cpufeatures::new!(cpuid_sse2, "sse2");
    cpuid_sse2::get()
}
