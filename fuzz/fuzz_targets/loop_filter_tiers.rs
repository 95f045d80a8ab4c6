#![no_main]

// Checks both H.263 loop filter directions of every tier against portable.

use blockdsp::{DspContext, DspTier, EdgeDirection};
use libfuzzer_sys::{arbitrary, fuzz_target};

const STRIDE: usize = 12;
const ORIGIN: usize = 2 * STRIDE + 2;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct EdgeInput {
    pub vertical: bool,
    pub qscale: u8,
    pub plane: [u8; STRIDE * 12],
}

fuzz_target!(|input: EdgeInput| {
    let direction = if input.vertical {
        EdgeDirection::Vertical
    } else {
        EdgeDirection::Horizontal
    };
    let qscale = input.qscale as u32 % 32;

    let portable = DspContext::for_tier(DspTier::Portable).unwrap();
    let mut expected = input.plane;
    portable
        .h263_loop_filter_slice(direction, &mut expected, ORIGIN, STRIDE, qscale)
        .unwrap();

    for tier in DspTier::all_values() {
        let Some(dsp) = DspContext::for_tier(*tier) else {
            continue;
        };
        let mut actual = input.plane;
        dsp.h263_loop_filter_slice(direction, &mut actual, ORIGIN, STRIDE, qscale)
            .unwrap();
        assert_eq!(actual, expected, "{direction:?} q{qscale} on {tier:?}");
    }
});
