//! Block geometry.

use derive_enum_all_values::AllValues;

/// Width (and canonical height) of a square pixel block.
///
/// The discriminant order matches the first index of every kernel table:
/// `0` is 16x16, `1` is 8x8, `2` is 4x4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum BlockSize {
    /// 16x16 pixels.
    Size16,
    /// 8x8 pixels.
    Size8,
    /// 4x4 pixels.
    Size4,
}

impl BlockSize {
    /// Width of the block in pixels.
    #[inline]
    pub const fn width(self) -> usize {
        match self {
            BlockSize::Size16 => 16,
            BlockSize::Size8 => 8,
            BlockSize::Size4 => 4,
        }
    }

    /// Index of this size in the kernel tables.
    #[inline]
    pub const fn table_index(self) -> usize {
        self as usize
    }

    /// Looks a size up from its width.
    #[inline]
    pub const fn from_width(width: usize) -> Option<Self> {
        match width {
            16 => Some(BlockSize::Size16),
            8 => Some(BlockSize::Size8),
            4 => Some(BlockSize::Size4),
            _ => None,
        }
    }
}
