//! Expression IDs and ranges for the flat expression arena.
//!
//! - `ExprId(u32)` instead of `Box<Expr>`: the id *is* the node identity
//! - `ExprRange` / `TypeRange` for argument and type lists (8 bytes vs 24+ for Vec)

use std::fmt;

/// Index into an [`ExprArena`](crate::ExprArena).
///
/// `ExprId::INVALID` stands for "no expression": a static field access has
/// no instance, a cloned null is null.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Invalid expression ID (sentinel value).
    pub const INVALID: ExprId = ExprId(u32::MAX);

    /// Create a new `ExprId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a valid ID.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "ExprId({})", self.0)
        } else {
            write!(f, "ExprId::INVALID")
        }
    }
}

impl Default for ExprId {
    fn default() -> Self {
        Self::INVALID
    }
}

macro_rules! define_range {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name {
            pub start: u32,
            pub len: u16,
        }

        impl $name {
            /// Empty range.
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            /// Longest list a single range can address.
            pub const MAX_LEN: usize = u16::MAX as usize;

            /// Create a new range.
            #[inline]
            pub const fn new(start: u32, len: u16) -> Self {
                $name { start, len }
            }

            /// Check if the range is empty.
            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            /// Number of items in the range.
            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            /// One past the last index covered by this range.
            #[inline]
            pub const fn end(&self) -> usize {
                self.start as usize + self.len as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({}..{})", stringify!($name), self.start, self.end())
            }
        }
    };
}

define_range!(
    /// Range of expression ids in the arena's flat `expr_lists`.
    ///
    /// Layout: (start: u32, len: u16), padded to 8 bytes. The `u16` length is
    /// a hard limit: no argument, dimension or initializer list holds more
    /// than [`ExprRange::MAX_LEN`] expressions.
    ExprRange
);

define_range!(
    /// Range of type ids in the arena's flat `type_lists`.
    TypeRange
);

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{ExprId, ExprRange, TypeRange};
    crate::static_assert_size!(ExprId, 4);
    crate::static_assert_size!(ExprRange, 8);
    crate::static_assert_size!(TypeRange, 8);
}
