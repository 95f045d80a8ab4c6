//! Shared signature and parameters of the block comparison metrics.

/// Parameters that tune metric behaviour, supplied by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricContext {
    /// Weight of the high frequency noise difference in `nsse`.
    pub nsse_weight: u32,
}

impl MetricContext {
    /// Weight used by `nsse` when no context is supplied.
    pub const DEFAULT_NSSE_WEIGHT: u32 = 8;

    /// Creates a context with the given `nsse` weight.
    pub const fn new(nsse_weight: u32) -> Self {
        Self { nsse_weight }
    }

    /// Weight from an optional context, falling back to [`Self::DEFAULT_NSSE_WEIGHT`].
    #[inline(always)]
    pub fn nsse_weight_of(ctx: Option<&MetricContext>) -> u32 {
        ctx.map_or(Self::DEFAULT_NSSE_WEIGHT, |ctx| ctx.nsse_weight)
    }
}

impl Default for MetricContext {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NSSE_WEIGHT)
    }
}

/// `(ctx, pix1, pix2, stride, h) -> cost`
///
/// # Safety
///
/// `pix1` and `pix2` must be valid for reads of `h` rows of the kernel width, `stride` bytes
/// apart. `h` is 8 or 16 unless the kernel says otherwise. Metrics that take a single block
/// ignore `pix2`.
pub type MetricFn = unsafe fn(
    ctx: Option<&MetricContext>,
    pix1: *const u8,
    pix2: *const u8,
    stride: usize,
    h: usize,
) -> u32;

/// One metric family by width: index 0 is 16 wide, index 1 is 8 wide.
pub type MetricTable = [MetricFn; 2];
