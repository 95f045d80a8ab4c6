//! Instruction set capabilities and the kernel tiers selected from them.
//!
//! Capabilities are a plain value: detect them once with [`CpuCapabilities::detect`], optionally
//! adjust them with a [`DspMask`], and pass them to whatever builds a kernel table. Nothing in this
//! workspace stores them globally.

use bitflags::bitflags;
use derive_enum_all_values::AllValues;

bitflags! {
    /// Instruction set extensions the kernels can make use of.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CpuCapabilities: u32 {
        /// 128-bit integer SIMD.
        const SSE2 = 1 << 0;
        /// Supplemental SSE3 (`pabsw`, `pshufb`).
        const SSSE3 = 1 << 1;
    }
}

impl CpuCapabilities {
    /// Detects the capabilities of the current CPU.
    ///
    /// With the `no-runtime-cpu-detection` feature this returns [`Self::compile_time_detect`],
    /// otherwise [`Self::run_time_detect`].
    #[inline]
    pub fn detect() -> Self {
        #[cfg(feature = "no-runtime-cpu-detection")]
        {
            Self::compile_time_detect()
        }

        #[cfg(not(feature = "no-runtime-cpu-detection"))]
        {
            Self::run_time_detect()
        }
    }

    /// Capabilities enabled at compile time through `target_feature`.
    pub const fn compile_time_detect() -> Self {
        let mut flags = Self::empty();
        if cfg!(target_feature = "sse2") {
            flags = flags.union(Self::SSE2);
        }
        if cfg!(target_feature = "ssse3") {
            flags = flags.union(Self::SSSE3);
        }
        flags
    }

    /// Capabilities reported by the CPU at runtime.
    pub fn run_time_detect() -> Self {
        #[allow(unused_mut)]
        let mut flags = Self::empty();

        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        {
            if crate::cpu_detect::has_sse2() {
                flags |= Self::SSE2;
            }
            if crate::cpu_detect::has_ssse3() {
                flags |= Self::SSSE3;
            }
        }

        flags
    }

    /// Applies a caller supplied override mask.
    ///
    /// # Remarks
    ///
    /// [`DspMask::Force`] can claim capabilities the CPU does not have; whoever builds a kernel
    /// table from the result is responsible for intersecting it with [`Self::detect`].
    #[inline]
    pub fn with_mask(self, mask: DspMask) -> Self {
        match mask {
            DspMask::Force(forced) => self | forced,
            DspMask::Disable(disabled) => self - disabled,
        }
    }
}

/// Override applied to detected capabilities before a kernel table is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DspMask {
    /// Add these capabilities to the detected set.
    Force(CpuCapabilities),
    /// Remove these capabilities from the detected set.
    Disable(CpuCapabilities),
}

/// One complete implementation set of the kernels.
///
/// Every tier produces bit-identical results; tiers only differ in speed and in the
/// capabilities they require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum DspTier {
    /// Scalar reference implementation, available everywhere.
    Portable,
    /// SSE2 intrinsics.
    Sse2,
    /// SSE2 intrinsics, with SSSE3 replacements where `pabsw` helps.
    Ssse3,
}

impl DspTier {
    /// Capabilities a CPU needs to run this tier.
    #[inline]
    pub const fn required_capabilities(self) -> CpuCapabilities {
        match self {
            DspTier::Portable => CpuCapabilities::empty(),
            DspTier::Sse2 => CpuCapabilities::SSE2,
            DspTier::Ssse3 => CpuCapabilities::SSE2.union(CpuCapabilities::SSSE3),
        }
    }

    /// Whether `caps` can run this tier.
    #[inline]
    pub const fn is_supported_by(self, caps: CpuCapabilities) -> bool {
        // SIMD tiers only exist on x86.
        if !cfg!(any(target_arch = "x86_64", target_arch = "x86"))
            && !matches!(self, DspTier::Portable)
        {
            return false;
        }
        caps.contains(self.required_capabilities())
    }

    /// The fastest tier `caps` supports.
    pub fn best_for(caps: CpuCapabilities) -> Self {
        Self::all_values()
            .iter()
            .rev()
            .copied()
            .find(|tier| tier.is_supported_by(caps))
            .unwrap_or(DspTier::Portable)
    }

    /// Short lowercase name, used in logs and benchmark ids.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            DspTier::Portable => "portable",
            DspTier::Sse2 => "sse2",
            DspTier::Ssse3 => "ssse3",
        }
    }
}
