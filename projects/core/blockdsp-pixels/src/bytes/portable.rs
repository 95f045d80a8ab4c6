//! Scalar byte row kernels.
//!
//! `add_bytes` and `diff_bytes` are plain loops the compiler vectorizes well; they are
//! multiversioned so builds for baseline x86-64 still get wider code on newer CPUs.

use blockdsp_common::pixel::mid_pred;
use multiversion::multiversion;

/// `dst[i] = dst[i] + src[i]`, wrapping.
///
/// # Safety
///
/// `dst` and `src` must be valid for `w` bytes.
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
pub unsafe fn add_bytes(dst: *mut u8, src: *const u8, w: usize) {
    unsafe {
        for i in 0..w {
            let out = dst.add(i);
            *out = (*out).wrapping_add(*src.add(i));
        }
    }
}

/// `dst[i] = src1[i] - src2[i]`, wrapping.
///
/// # Safety
///
/// All pointers must be valid for `w` bytes.
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
pub unsafe fn diff_bytes(dst: *mut u8, src1: *const u8, src2: *const u8, w: usize) {
    unsafe {
        for i in 0..w {
            *dst.add(i) = (*src1.add(i)).wrapping_sub(*src2.add(i));
        }
    }
}

/// Median prediction residual of the row `src2`, with `src1` the row above it.
///
/// # Safety
///
/// All pointers must be valid for `w` bytes; `dst` may not overlap the sources.
pub unsafe fn sub_hfyu_median_prediction(
    dst: *mut u8,
    src1: *const u8,
    src2: *const u8,
    w: usize,
    left: &mut u8,
    left_top: &mut u8,
) {
    let mut l = *left;
    let mut lt = *left_top;
    for i in 0..w {
        let top = *src1.add(i);
        let gradient = l.wrapping_add(top).wrapping_sub(lt);
        let pred = mid_pred(l as i32, top as i32, gradient as i32) as u8;
        lt = top;
        l = *src2.add(i);
        *dst.add(i) = l.wrapping_sub(pred);
    }
    *left = l;
    *left_top = lt;
}
