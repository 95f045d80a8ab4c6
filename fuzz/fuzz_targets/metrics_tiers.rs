#![no_main]

// Checks that every metric and block statistic agrees across tiers.

use blockdsp::{BlockSize, DspContext, DspTier, MetricContext, MetricKind};
use libfuzzer_sys::{arbitrary, fuzz_target};

const STRIDE: usize = 16;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct MetricInput {
    pub kind: u8,
    pub wide: bool,
    pub h: u8,
    pub weight: u8,
    pub pix1: [u8; STRIDE * 16],
    pub pix2: [u8; STRIDE * 16],
    pub rem: [i16; 64],
    pub basis: [i16; 64],
    pub scale: u8,
}

fuzz_target!(|input: MetricInput| {
    let kind = MetricKind::all_values()[input.kind as usize % MetricKind::all_values().len()];
    let size = if input.wide { BlockSize::Size16 } else { BlockSize::Size8 };
    let h = 1 + input.h as usize % 16;
    let ctx = MetricContext::new(input.weight as u32);
    // Basis coefficients stay within the range a real DCT basis takes.
    let basis = input.basis.map(|b| b >> 2);
    let weight = input.rem.map(|w| w & 0x3F);
    let scale = input.scale as i32 - 128;

    let (pix1, pix2) = (&input.pix1, &input.pix2);
    let measure =
        |dsp: &DspContext| dsp.metric_slice(kind, size, Some(&ctx), pix1, pix2, STRIDE, h);

    let portable = DspContext::for_tier(DspTier::Portable).unwrap();
    let expected = measure(&portable);
    let sum = portable.pix_sum_slice(&input.pix1, STRIDE);
    let norm = portable.pix_norm1_slice(&input.pix1, STRIDE);
    let mut expected_rem = input.rem;
    portable.add_8x8basis_slice(&mut expected_rem, &basis, scale);
    let tried = portable.try_8x8basis_slice(&input.rem, &weight, &basis, scale);

    for tier in DspTier::all_values() {
        let Some(dsp) = DspContext::for_tier(*tier) else {
            continue;
        };
        let actual = measure(&dsp);
        assert_eq!(actual, expected, "{kind:?} {size:?} h={h} on {tier:?}");
        assert_eq!(dsp.pix_sum_slice(&input.pix1, STRIDE), sum);
        assert_eq!(dsp.pix_norm1_slice(&input.pix1, STRIDE), norm);

        let mut rem = input.rem;
        dsp.add_8x8basis_slice(&mut rem, &basis, scale);
        assert_eq!(rem, expected_rem, "add_8x8basis on {tier:?}");
        let retried = dsp.try_8x8basis_slice(&input.rem, &weight, &basis, scale);
        assert_eq!(retried, tried, "try_8x8basis on {tier:?}");
    }
});
