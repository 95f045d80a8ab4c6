//! Scalar pixel arithmetic shared by the portable kernels.
//!
//! These are the reference definitions every SIMD kernel is tested against.

/// Clamps a value to the `0..=255` range of an 8-bit sample.
#[inline(always)]
pub const fn clip_u8(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

/// Clamps `value` to `min..=max`.
#[inline(always)]
pub const fn clip(value: i32, min: i32, max: i32) -> i32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Average of two samples, ties rounded up: `(a + b + 1) >> 1`.
///
/// This is what `pavgb` computes.
#[inline(always)]
pub const fn rnd_avg(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16 + 1) >> 1) as u8
}

/// Average of two samples, ties rounded down: `(a + b) >> 1`.
#[inline(always)]
pub const fn no_rnd_avg(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16) >> 1) as u8
}

/// Average of two samples with the selected rounding.
#[inline(always)]
pub const fn avg<const NO_RND: bool>(a: u8, b: u8) -> u8 {
    if NO_RND {
        no_rnd_avg(a, b)
    } else {
        rnd_avg(a, b)
    }
}

/// Median of three values.
#[inline(always)]
pub const fn mid_pred(a: i32, b: i32, c: i32) -> i32 {
    let (lo, hi) = if a > b { (b, a) } else { (a, b) };
    if c <= lo {
        lo
    } else if c >= hi {
        hi
    } else {
        c
    }
}
