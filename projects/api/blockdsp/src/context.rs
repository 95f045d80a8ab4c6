//! The dispatch table.

use blockdsp_common::{CpuCapabilities, DspMask, DspTier};
use blockdsp_loop_filter::{LoopFilterFn, LoopFilterFns};
use blockdsp_metrics::basis::{AddBasisFn, BasisFns, TryBasisFn};
use blockdsp_metrics::norm::{NormFns, PixStatFn};
use blockdsp_metrics::{hadamard, noise, sse, vsad, MetricTable};
use blockdsp_pixels::block_io::{ClearBlocksFn, DiffPixelsFn, GetPixelsFn, PutClampedFn};
use blockdsp_pixels::bytes::{AddBytesFn, DiffBytesFn, MedianPredictionFn};
use blockdsp_pixels::l2::{self, L2Table};
use blockdsp_pixels::{hpel, BlockIoFns, ByteRowFns, PixelsTable};
use blockdsp_qpel::h264::{self, H264Table};
use blockdsp_qpel::mpeg4::{self, Mpeg4Table};
use log::{debug, trace, warn};

/// Function pointers to every kernel, all taken from one implementation tier.
///
/// Build it once with [`DspContext::detect`] (or [`DspContext::new`] for explicit capabilities)
/// and pass it around by value. The fields are the raw `unsafe` kernels; the `*_slice` methods
/// are validated wrappers around them.
///
/// Tables are indexed by [`BlockSize::table_index`](blockdsp_common::BlockSize::table_index)
/// (`0` = 16, `1` = 8, `2` = 4) unless noted otherwise.
#[derive(Clone, Copy)]
pub struct DspContext {
    tier: DspTier,
    capabilities: CpuCapabilities,

    /// `dst = clamp(c, 0, 255)` for an 8x8 coefficient block.
    pub put_pixels_clamped: PutClampedFn,
    /// `dst = clamp(c, -128, 127) + 128` for an 8x8 coefficient block.
    pub put_signed_pixels_clamped: PutClampedFn,
    /// `dst = clamp(dst + c, 0, 255)` for an 8x8 coefficient block.
    pub add_pixels_clamped: PutClampedFn,
    /// Widens an 8x8 pixel block to coefficients.
    pub get_pixels: GetPixelsFn,
    /// Difference of two 8x8 pixel blocks as coefficients.
    pub diff_pixels: DiffPixelsFn,
    /// Zeroes the six coefficient blocks of a macroblock.
    pub clear_blocks: ClearBlocksFn,

    /// `[size][filter]` half-pel `put` with rounding.
    pub put_pixels_tab: PixelsTable,
    /// `[size][filter]` half-pel `put` without rounding.
    pub put_no_rnd_pixels_tab: PixelsTable,
    /// `[size][filter]` half-pel `avg` with rounding.
    pub avg_pixels_tab: PixelsTable,
    /// `[size][filter]` half-pel `avg` without rounding in the interpolation.
    pub avg_no_rnd_pixels_tab: PixelsTable,
    /// `[size]` two source average, rounding.
    pub put_pixels_l2_tab: L2Table,
    /// `[size]` two source average, not rounding.
    pub put_no_rnd_pixels_l2_tab: L2Table,
    /// `[size]` two source average merged into `dst`.
    pub avg_pixels_l2_tab: L2Table,

    /// `[size][mx + 4 * my]` MPEG-4 quarter-pel `put`; sizes 16 and 8 only.
    pub put_qpel_pixels_tab: Mpeg4Table,
    /// `[size][mx + 4 * my]` MPEG-4 quarter-pel `put` without rounding.
    pub put_no_rnd_qpel_pixels_tab: Mpeg4Table,
    /// `[size][mx + 4 * my]` MPEG-4 quarter-pel `avg`.
    pub avg_qpel_pixels_tab: Mpeg4Table,
    /// `[size][mx + 4 * my]` H.264 quarter-pel `put`.
    pub put_h264_qpel_pixels_tab: H264Table,
    /// `[size][mx + 4 * my]` H.264 quarter-pel `avg`.
    pub avg_h264_qpel_pixels_tab: H264Table,

    /// `[sse16, sse8]`
    pub sse: MetricTable,
    /// `[nsse16, nsse8]`
    pub nsse: MetricTable,
    /// `[hadamard8_diff16, hadamard8_diff8]`
    pub hadamard8_diff: MetricTable,
    /// `[vsad16, vsad_intra16]`
    pub vsad: MetricTable,
    /// `Σ p²` over 16x16.
    pub pix_norm1: PixStatFn,
    /// `Σ p` over 16x16.
    pub pix_sum: PixStatFn,
    /// Weighted error of a residual plus a scaled basis function.
    pub try_8x8basis: TryBasisFn,
    /// Adds a scaled basis function to a residual.
    pub add_8x8basis: AddBasisFn,

    /// Deblocks the horizontal edge above `src`.
    pub h263_v_loop_filter: LoopFilterFn,
    /// Deblocks the vertical edge left of `src`.
    pub h263_h_loop_filter: LoopFilterFn,

    /// `dst[i] += src[i]`
    pub add_bytes: AddBytesFn,
    /// `dst[i] = src1[i] - src2[i]`
    pub diff_bytes: DiffBytesFn,
    /// HuffYUV median prediction residual.
    pub sub_hfyu_median_prediction: MedianPredictionFn,
}

impl DspContext {
    /// Builds the table for the current CPU.
    pub fn detect() -> Self {
        Self::new(CpuCapabilities::detect())
    }

    /// Builds the table for the detected capabilities adjusted by `mask`.
    ///
    /// Forcing a capability the CPU lacks has no effect beyond a warning; see [`Self::new`].
    pub fn with_mask(mask: DspMask) -> Self {
        let detected = CpuCapabilities::detect();
        let masked = detected.with_mask(mask);
        if masked != detected {
            trace!("Capability mask {mask:?} changed {detected:?} to {masked:?}");
        }
        Self::new(masked)
    }

    /// Builds the table for the fastest tier `capabilities` allow.
    ///
    /// Capabilities the CPU does not report are dropped, so the result is always safe to call.
    pub fn new(capabilities: CpuCapabilities) -> Self {
        let detected = CpuCapabilities::detect();
        let usable = capabilities & detected;
        if usable != capabilities {
            warn!(
                "Requested capabilities {capabilities:?} exceed those of this CPU ({detected:?}), using {usable:?}"
            );
        }

        // Safety: usable is a subset of what the CPU reports.
        unsafe { Self::new_unchecked(usable) }
    }

    /// Builds the table for the fastest tier `capabilities` allow, trusting them as given.
    ///
    /// # Safety
    ///
    /// The CPU must support every capability in `capabilities`, otherwise calling SIMD kernels
    /// from the table is undefined behaviour.
    pub unsafe fn new_unchecked(capabilities: CpuCapabilities) -> Self {
        let tier = DspTier::best_for(capabilities);
        debug!(
            "Building DSP context for tier {} from capabilities {capabilities:?}",
            tier.name()
        );
        Self::build(tier, capabilities)
    }

    /// Builds the table of a specific tier, or [`None`] if the CPU cannot run it.
    pub fn for_tier(tier: DspTier) -> Option<Self> {
        let detected = CpuCapabilities::detect();
        if !tier.is_supported_by(detected) {
            debug!("Tier {} is not supported by {detected:?}", tier.name());
            return None;
        }
        debug!("Building DSP context for tier {}", tier.name());
        Some(Self::build(tier, tier.required_capabilities()))
    }

    /// Tables of every tier the CPU can run, portable first.
    #[cfg(not(tarpaulin_include))]
    pub fn all_supported() -> impl Iterator<Item = DspContext> {
        DspTier::all_values()
            .iter()
            .filter_map(|tier| Self::for_tier(*tier))
    }

    /// The tier every kernel in this table comes from.
    #[inline]
    pub fn tier(&self) -> DspTier {
        self.tier
    }

    /// The capabilities the table was built from.
    #[inline]
    pub fn capabilities(&self) -> CpuCapabilities {
        self.capabilities
    }

    fn build(tier: DspTier, capabilities: CpuCapabilities) -> Self {
        let block_io = BlockIoFns::for_tier(tier);
        let bytes = ByteRowFns::for_tier(tier);
        let norm = NormFns::for_tier(tier);
        let basis = BasisFns::for_tier(tier);
        let loop_filter = LoopFilterFns::for_tier(tier);

        Self {
            tier,
            capabilities,

            put_pixels_clamped: block_io.put_pixels_clamped,
            put_signed_pixels_clamped: block_io.put_signed_pixels_clamped,
            add_pixels_clamped: block_io.add_pixels_clamped,
            get_pixels: block_io.get_pixels,
            diff_pixels: block_io.diff_pixels,
            clear_blocks: block_io.clear_blocks,

            put_pixels_tab: hpel::put_pixels_tab(tier),
            put_no_rnd_pixels_tab: hpel::put_no_rnd_pixels_tab(tier),
            avg_pixels_tab: hpel::avg_pixels_tab(tier),
            avg_no_rnd_pixels_tab: hpel::avg_no_rnd_pixels_tab(tier),
            put_pixels_l2_tab: l2::put_l2_tab(tier),
            put_no_rnd_pixels_l2_tab: l2::put_no_rnd_l2_tab(tier),
            avg_pixels_l2_tab: l2::avg_l2_tab(tier),

            put_qpel_pixels_tab: mpeg4::put_qpel_pixels_tab(tier),
            put_no_rnd_qpel_pixels_tab: mpeg4::put_no_rnd_qpel_pixels_tab(tier),
            avg_qpel_pixels_tab: mpeg4::avg_qpel_pixels_tab(tier),
            put_h264_qpel_pixels_tab: h264::put_h264_qpel_pixels_tab(tier),
            avg_h264_qpel_pixels_tab: h264::avg_h264_qpel_pixels_tab(tier),

            sse: sse::sse_tab(tier),
            nsse: noise::nsse_tab(tier),
            hadamard8_diff: hadamard::hadamard8_diff_tab(tier),
            vsad: vsad::vsad_tab(tier),
            pix_norm1: norm.pix_norm1,
            pix_sum: norm.pix_sum,
            try_8x8basis: basis.try_8x8basis,
            add_8x8basis: basis.add_8x8basis,

            h263_v_loop_filter: loop_filter.h263_v_loop_filter,
            h263_h_loop_filter: loop_filter.h263_h_loop_filter,

            add_bytes: bytes.add_bytes,
            diff_bytes: bytes.diff_bytes,
            sub_hfyu_median_prediction: bytes.sub_hfyu_median_prediction,
        }
    }
}

impl Default for DspContext {
    fn default() -> Self {
        Self::detect()
    }
}

impl core::fmt::Debug for DspContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DspContext")
            .field("tier", &self.tier)
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}
