//! Type identifier.
//!
//! A `TypeId` indexes the program's type table. The primitive types and
//! the handful of library types the IR refers to directly are pre-interned
//! at fixed indices, so `TypeId::OBJECT` means the same thing in every
//! [`Program`](crate::Program).

use std::fmt;

/// Index into the program type table.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    // Pre-interned primitive types
    pub const VOID: TypeId = TypeId(0);
    pub const BOOLEAN: TypeId = TypeId(1);
    pub const BYTE: TypeId = TypeId(2);
    pub const CHAR: TypeId = TypeId(3);
    pub const SHORT: TypeId = TypeId(4);
    pub const INT: TypeId = TypeId(5);
    pub const LONG: TypeId = TypeId(6);
    pub const FLOAT: TypeId = TypeId(7);
    pub const DOUBLE: TypeId = TypeId(8);
    /// Type of the `null` literal.
    pub const NULL: TypeId = TypeId(9);

    // Pre-interned reference types
    /// Generic root of the class hierarchy.
    pub const OBJECT: TypeId = TypeId(10);
    pub const STRING: TypeId = TypeId(11);
    pub const CLASS: TypeId = TypeId(12);

    /// First ID for program-declared classes and array types.
    pub const FIRST_DECLARED: u32 = 13;

    /// Create a `TypeId` from a raw index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        TypeId(index)
    }

    /// Get the index into the type table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a primitive value type (including `void` and the null type).
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 <= Self::NULL.0
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::VOID => write!(f, "TypeId::VOID"),
            Self::BOOLEAN => write!(f, "TypeId::BOOLEAN"),
            Self::BYTE => write!(f, "TypeId::BYTE"),
            Self::CHAR => write!(f, "TypeId::CHAR"),
            Self::SHORT => write!(f, "TypeId::SHORT"),
            Self::INT => write!(f, "TypeId::INT"),
            Self::LONG => write!(f, "TypeId::LONG"),
            Self::FLOAT => write!(f, "TypeId::FLOAT"),
            Self::DOUBLE => write!(f, "TypeId::DOUBLE"),
            Self::NULL => write!(f, "TypeId::NULL"),
            Self::OBJECT => write!(f, "TypeId::OBJECT"),
            Self::STRING => write!(f, "TypeId::STRING"),
            Self::CLASS => write!(f, "TypeId::CLASS"),
            _ => write!(f, "TypeId({})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_types() {
        assert!(TypeId::INT.is_primitive());
        assert!(TypeId::VOID.is_primitive());
        assert!(TypeId::NULL.is_primitive());
        assert!(!TypeId::OBJECT.is_primitive());
        assert!(!TypeId::new(TypeId::FIRST_DECLARED).is_primitive());
    }

    #[test]
    fn debug_names_pre_interned() {
        assert_eq!(format!("{:?}", TypeId::OBJECT), "TypeId::OBJECT");
        assert_eq!(format!("{:?}", TypeId::new(40)), "TypeId(40)");
    }
}
