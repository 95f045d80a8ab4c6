//! Scalar basis helpers.

use super::{basis_step, MAX_SCALE, RECON_SHIFT};
use multiversion::multiversion;

/// Weighted squared error of `rem + scale * basis`.
///
/// # Safety
///
/// See [`TryBasisFn`](super::TryBasisFn).
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
pub unsafe fn try_8x8basis(
    rem: *const i16,
    weight: *const i16,
    basis: *const i16,
    scale: i32,
) -> u32 {
    debug_assert!(scale.unsigned_abs() < MAX_SCALE as u32);
    let mut sum = 0u32;
    unsafe {
        for i in 0..64 {
            let b = (*rem.add(i) as i32 + basis_step(*basis.add(i), scale)) >> RECON_SHIFT;
            let weighted = *weight.add(i) as i32 * b;
            sum = sum.wrapping_add((weighted.wrapping_mul(weighted) >> 4) as u32);
        }
    }
    sum >> 2
}

/// `rem[i] += round(basis[i] * scale)` in residual precision, wrapping to 16 bits.
///
/// Takes any `scale`; the product wraps at 32 bits.
///
/// # Safety
///
/// See [`AddBasisFn`](super::AddBasisFn).
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
pub unsafe fn add_8x8basis(rem: *mut i16, basis: *const i16, scale: i32) {
    unsafe {
        for i in 0..64 {
            let value = rem.add(i);
            *value = (*value as i32).wrapping_add(basis_step(*basis.add(i), scale)) as i16;
        }
    }
}
