//! Scalar Hadamard SATD.

use crate::context::MetricContext;

/// In place 8-point Hadamard transform (natural order, unnormalized).
#[inline(always)]
fn butterfly8(v: &mut [i32; 8]) {
    for span in [1, 2, 4] {
        for base in (0..8).step_by(2 * span) {
            for j in base..base + span {
                let (a, b) = (v[j], v[j + span]);
                v[j] = a + b;
                v[j + span] = a - b;
            }
        }
    }
}

/// SATD of one 8x8 block.
///
/// # Safety
///
/// Both pointers must be valid for 8 rows of 8 bytes, `stride` bytes apart.
pub unsafe fn hadamard8x8(pix1: *const u8, pix2: *const u8, stride: usize) -> u32 {
    let mut block = [[0i32; 8]; 8];
    for (y, row) in block.iter_mut().enumerate() {
        let a = pix1.add(y * stride);
        let b = pix2.add(y * stride);
        for (x, value) in row.iter_mut().enumerate() {
            *value = *a.add(x) as i32 - *b.add(x) as i32;
        }
        butterfly8(row);
    }

    let mut sum = 0u32;
    for x in 0..8 {
        let mut column = [0i32; 8];
        for (y, value) in column.iter_mut().enumerate() {
            *value = block[y][x];
        }
        butterfly8(&mut column);
        sum += column.iter().map(|c| c.unsigned_abs()).sum::<u32>();
    }
    sum
}

/// SATD of a `W x h` block, tiled in 8x8 blocks.
///
/// # Safety
///
/// See [`MetricFn`](crate::MetricFn). `h` must be 8, or 16 when `W` is 16.
pub unsafe fn hadamard8_diff<const W: usize>(
    _ctx: Option<&MetricContext>,
    pix1: *const u8,
    pix2: *const u8,
    stride: usize,
    h: usize,
) -> u32 {
    debug_assert!(h == 8 || (W == 16 && h == 16));
    let mut sum = 0;
    for y in (0..h).step_by(8) {
        for x in (0..W).step_by(8) {
            let offset = y * stride + x;
            sum += hadamard8x8(pix1.add(offset), pix2.add(offset), stride);
        }
    }
    sum
}
