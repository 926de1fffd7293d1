//! Interned string handle.
//!
//! Declaration names and string literal payloads are stored once in the
//! [`StringInterner`](crate::StringInterner) and referred to by a dense
//! 32-bit index. Comparing two names is an integer compare, which keeps
//! `ExprKind::String` `Copy`.

use std::fmt;

/// Index of a string in a [`StringInterner`](crate::StringInterner).
///
/// The first few indices are fixed: every interner starts with the empty
/// string and the root class names in this order, so those names are usable
/// as constants without a lookup.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    pub const EMPTY: Name = Name(0);
    pub const JAVA_LANG_OBJECT: Name = Name(1);
    pub const JAVA_LANG_STRING: Name = Name(2);
    pub const JAVA_LANG_CLASS: Name = Name(3);

    /// Strings every interner is seeded with, at the indices of the
    /// constants above.
    pub(crate) const PRE_INTERNED: [&'static str; 4] =
        ["", "java.lang.Object", "java.lang.String", "java.lang.Class"];

    #[inline]
    pub(crate) const fn from_index(index: u32) -> Self {
        Name(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Name;
    crate::static_assert_size!(Name, 4);
}
