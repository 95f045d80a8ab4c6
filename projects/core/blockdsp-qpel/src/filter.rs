//! Interpolation filters.
//!
//! Every lowpass stage is a fixed-point FIR filter followed by `(sum + bias) >> shift` and a
//! clamp to `0..=255`. The stages used by the kernels are listed here; the scalar kernels
//! evaluate them directly and the SIMD kernels hardcode the same numbers.

use blockdsp_common::pixel::clip_u8;

/// One filter pass: taps, rounding constant and shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterStage {
    /// Tap weights, applied to samples at offsets `-(taps.len() / 2 - 1)..=taps.len() / 2`
    /// around the output position.
    pub taps: &'static [i32],
    /// Added to the weighted sum before shifting.
    pub bias: i32,
    /// Right shift applied after the bias.
    pub shift: u32,
}

/// MPEG-4 8-tap filter taps, offsets `-3..=4`.
pub const MPEG4_TAPS: [i32; 8] = [-1, 3, -6, 20, 20, -6, 3, -1];

/// H.264 6-tap filter taps, offsets `-2..=3`.
pub const H264_TAPS: [i32; 6] = [1, -5, 20, 20, -5, 1];

impl FilterStage {
    /// MPEG-4 lowpass, rounding family.
    pub const MPEG4: Self = Self {
        taps: &MPEG4_TAPS,
        bias: 16,
        shift: 5,
    };

    /// MPEG-4 lowpass, no-rounding family.
    pub const MPEG4_NO_RND: Self = Self {
        taps: &MPEG4_TAPS,
        bias: 15,
        shift: 5,
    };

    /// H.264 single direction lowpass.
    pub const H264: Self = Self {
        taps: &H264_TAPS,
        bias: 16,
        shift: 5,
    };

    /// H.264 second pass of the 2D lowpass, over unshifted first pass sums.
    pub const H264_HV: Self = Self {
        taps: &H264_TAPS,
        bias: 512,
        shift: 10,
    };

    /// The MPEG-4 stage of a rounding family.
    #[inline(always)]
    pub const fn mpeg4(no_rnd: bool) -> Self {
        if no_rnd {
            Self::MPEG4_NO_RND
        } else {
            Self::MPEG4
        }
    }

    /// Offset of the first tap relative to the output position.
    #[inline(always)]
    pub const fn first_offset(&self) -> isize {
        1 - (self.taps.len() / 2) as isize
    }

    /// Weighted sum of the samples `sample(first_offset())..`, before rounding.
    #[inline(always)]
    pub fn sum(&self, mut sample: impl FnMut(isize) -> i32) -> i32 {
        let first = self.first_offset();
        self.taps
            .iter()
            .enumerate()
            .map(|(k, &tap)| tap * sample(first + k as isize))
            .sum()
    }

    /// Rounds, shifts and clamps a weighted sum.
    #[inline(always)]
    pub const fn finish(&self, sum: i32) -> u8 {
        clip_u8((sum + self.bias) >> self.shift)
    }
}
