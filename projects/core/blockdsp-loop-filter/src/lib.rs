#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod portable;
pub mod strength;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod sse2;

#[cfg(test)]
pub mod test_prelude;

pub use error::LoopFilterError;
pub use strength::{strength, EdgeDirection, MAX_QSCALE, STRENGTH};

use blockdsp_common::DspTier;

/// `(src, stride, qscale)`
///
/// # Safety
///
/// The edge region of the filter direction (see [`EdgeDirection::region`]) around `src` must be
/// valid for reads and writes. `qscale` must be below [`MAX_QSCALE`].
pub type LoopFilterFn = unsafe fn(src: *mut u8, stride: usize, qscale: u32);

/// The loop filters of one tier.
#[derive(Debug, Clone, Copy)]
pub struct LoopFilterFns {
    /// Filters across the horizontal edge above `src`.
    pub h263_v_loop_filter: LoopFilterFn,
    /// Filters across the vertical edge left of `src`.
    pub h263_h_loop_filter: LoopFilterFn,
}

impl LoopFilterFns {
    /// Kernels of the given tier.
    pub fn for_tier(tier: DspTier) -> Self {
        match tier {
            #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
            DspTier::Sse2 | DspTier::Ssse3 => Self {
                h263_v_loop_filter: sse2::h263_v_loop_filter,
                h263_h_loop_filter: sse2::h263_h_loop_filter,
            },
            _ => Self {
                h263_v_loop_filter: portable::h263_v_loop_filter,
                h263_h_loop_filter: portable::h263_h_loop_filter,
            },
        }
    }

    /// Kernel for an edge direction.
    pub fn for_direction(&self, direction: EdgeDirection) -> LoopFilterFn {
        match direction {
            EdgeDirection::Horizontal => self.h263_v_loop_filter,
            EdgeDirection::Vertical => self.h263_h_loop_filter,
        }
    }
}
