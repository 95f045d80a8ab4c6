#![no_main]

// Checks the half-pel tables and the two source averages of every tier against portable.

use blockdsp::{BlockSize, DspContext, DspTier, HpelFilter, L2Op, PixelOp};
use libfuzzer_sys::{arbitrary, fuzz_target};

const STRIDE: usize = 17;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct HpelInput {
    pub op: u8,
    pub filter: u8,
    pub size: u8,
    pub h: u8,
    pub src1: [u8; STRIDE * 17],
    pub src2: [u8; STRIDE * 17],
    pub dst: [u8; STRIDE * 17],
}

fuzz_target!(|input: HpelInput| {
    let op = PixelOp::all_values()[input.op as usize % PixelOp::all_values().len()];
    let l2 = L2Op::all_values()[input.op as usize % L2Op::all_values().len()];
    let filter = HpelFilter::all_values()[input.filter as usize % 4];
    let size = BlockSize::all_values()[input.size as usize % BlockSize::all_values().len()];
    let h = 1 + input.h as usize % 16;
    let (src1, src2) = (&input.src1, &input.src2);

    let run = |dsp: &DspContext| {
        let mut dst = input.dst;
        let result = dsp.pixels_slice(op, size, filter, &mut dst, src1, STRIDE, h);
        (result, dst)
    };
    let run_l2 = |dsp: &DspContext| {
        let mut dst = input.dst;
        let result = dsp.pixels_l2_slice(l2, size, &mut dst, STRIDE, src1, STRIDE, src2, STRIDE, h);
        (result, dst)
    };

    let portable = DspContext::for_tier(DspTier::Portable).unwrap();
    let expected = run(&portable);
    let expected_l2 = run_l2(&portable);
    let case = format!("{op:?} {filter:?} {size:?} h={h}");
    let case_l2 = format!("{l2:?} {size:?} h={h}");

    for tier in DspTier::all_values() {
        let Some(dsp) = DspContext::for_tier(*tier) else {
            continue;
        };
        let actual = run(&dsp);
        assert_eq!(actual, expected, "{case} on {tier:?}");
        let actual_l2 = run_l2(&dsp);
        assert_eq!(actual_l2, expected_l2, "{case_l2} on {tier:?}");
    }
});
