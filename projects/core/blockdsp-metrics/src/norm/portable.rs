//! Scalar block statistics.

/// `Σ p²` over 16x16.
///
/// # Safety
///
/// See [`PixStatFn`](super::PixStatFn).
pub unsafe fn pix_norm1(pix: *const u8, stride: usize) -> u32 {
    let mut sum = 0u32;
    for y in 0..16 {
        let row = pix.add(y * stride);
        for x in 0..16 {
            let p = *row.add(x) as u32;
            sum += p * p;
        }
    }
    sum
}

/// `Σ p` over 16x16.
///
/// # Safety
///
/// See [`PixStatFn`](super::PixStatFn).
pub unsafe fn pix_sum16(pix: *const u8, stride: usize) -> u32 {
    let mut sum = 0u32;
    for y in 0..16 {
        let row = pix.add(y * stride);
        for x in 0..16 {
            sum += *row.add(x) as u32;
        }
    }
    sum
}
