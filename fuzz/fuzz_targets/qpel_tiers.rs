#![no_main]

// Checks that every quarter-pel phase of every accelerated tier writes the same block as the
// portable kernels.

use blockdsp::{BlockSize, DspContext, DspTier, QpelOp};
use libfuzzer_sys::{arbitrary, fuzz_target};

const STRIDE: usize = 24;
const ORIGIN: usize = 3 * STRIDE + 3;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct QpelInput {
    pub op: u8,
    pub size: u8,
    pub phase: u8,
    pub src: [u8; STRIDE * STRIDE],
    pub dst: [u8; STRIDE * 16],
}

fuzz_target!(|input: QpelInput| {
    let op = QpelOp::all_values()[input.op as usize % QpelOp::all_values().len()];
    let size = BlockSize::all_values()[input.size as usize % BlockSize::all_values().len()];
    let (mx, my) = ((input.phase % 4) as usize, (input.phase / 4 % 4) as usize);

    let portable = DspContext::for_tier(DspTier::Portable).unwrap();
    let mut expected = input.dst;
    if portable
        .qpel_mc_slice(op, size, mx, my, &mut expected, &input.src, ORIGIN, STRIDE)
        .is_err()
    {
        return;
    }

    for tier in DspTier::all_values() {
        let Some(dsp) = DspContext::for_tier(*tier) else {
            continue;
        };
        let mut actual = input.dst;
        dsp.qpel_mc_slice(op, size, mx, my, &mut actual, &input.src, ORIGIN, STRIDE)
            .unwrap();
        assert_eq!(actual, expected, "{op:?} {size:?} mc{mx}{my} on {tier:?}");
    }
});
