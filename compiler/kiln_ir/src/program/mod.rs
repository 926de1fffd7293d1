//! Program context: the type table and the declaration tables.
//!
//! Expression nodes never own declarations. A `LocalRef` holds a
//! [`LocalId`] into the program's local table; cloning the reference
//! produces a new node bound to the same id, never a second declaration.
//!
//! The program also hands out the canonical singletons passes need when
//! synthesizing nodes: the generic root type and the `this` expression
//! factory.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::arena::to_u32;
use crate::{ExprArena, ExprId, ExprKind, Name, Span, StringInterner, TypeId};

macro_rules! define_decl_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

define_decl_id!(
    /// Handle to a local variable declaration.
    LocalId
);
define_decl_id!(
    /// Handle to a method parameter declaration.
    ParamId
);
define_decl_id!(
    /// Handle to a field declaration.
    FieldId
);
define_decl_id!(
    /// Handle to a method or constructor declaration.
    MethodId
);

/// A local variable declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LocalDecl {
    pub name: Name,
    pub ty: TypeId,
    pub span: Span,
}

/// A method parameter declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParamDecl {
    pub name: Name,
    pub ty: TypeId,
    pub span: Span,
}

/// A field declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: Name,
    pub ty: TypeId,
    pub enclosing_type: TypeId,
    pub is_static: bool,
}

/// A method or constructor declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: Name,
    pub return_type: TypeId,
    pub enclosing_type: TypeId,
    pub is_static: bool,
}

/// An entry in the program type table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TypeDef {
    /// Primitive value type, `void`, or the null type.
    Primitive { name: Name },
    /// Class or interface.
    Class {
        name: Name,
        /// `None` only for the root type.
        super_class: Option<TypeId>,
    },
    /// Array of `element`.
    Array { element: TypeId },
}

/// Whole-program IR context.
pub struct Program {
    types: Vec<TypeDef>,
    array_types: FxHashMap<TypeId, TypeId>,
    locals: Vec<LocalDecl>,
    params: Vec<ParamDecl>,
    fields: Vec<FieldDecl>,
    methods: Vec<MethodDecl>,
}

impl Program {
    /// Create a program with the pre-interned types registered at the
    /// indices [`TypeId`] fixes for them.
    pub fn new(interner: &StringInterner) -> Self {
        const PRIMITIVES: &[&str] = &[
            "void", "boolean", "byte", "char", "short", "int", "long", "float", "double", "null",
        ];

        let mut types = Vec::with_capacity(TypeId::FIRST_DECLARED as usize);
        for name in PRIMITIVES {
            types.push(TypeDef::Primitive {
                name: interner.intern(name),
            });
        }
        types.push(TypeDef::Class {
            name: Name::JAVA_LANG_OBJECT,
            super_class: None,
        });
        types.push(TypeDef::Class {
            name: Name::JAVA_LANG_STRING,
            super_class: Some(TypeId::OBJECT),
        });
        types.push(TypeDef::Class {
            name: Name::JAVA_LANG_CLASS,
            super_class: Some(TypeId::OBJECT),
        });
        debug_assert_eq!(types.len(), TypeId::FIRST_DECLARED as usize);

        Self {
            types,
            array_types: FxHashMap::default(),
            locals: Vec::new(),
            params: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    // Canonical singletons

    /// The generic root type every reference type widens to.
    #[inline]
    pub fn root_type(&self) -> TypeId {
        TypeId::OBJECT
    }

    /// Build a fresh `this` reference typed as `class_type`.
    ///
    /// Every call allocates a new node: `this` references are never shared
    /// between trees.
    pub fn this_ref(&self, arena: &mut ExprArena, span: Span, class_type: TypeId) -> ExprId {
        arena.alloc(ExprKind::ThisRef { class_type }, span, class_type)
    }

    // Types

    /// Declare a class type.
    pub fn add_class(&mut self, name: Name, super_class: TypeId) -> TypeId {
        self.push_type(TypeDef::Class {
            name,
            super_class: Some(super_class),
        })
    }

    /// The array type with the given element type, created on first use.
    pub fn array_of(&mut self, element: TypeId) -> TypeId {
        if let Some(&existing) = self.array_types.get(&element) {
            return existing;
        }
        let id = self.push_type(TypeDef::Array { element });
        self.array_types.insert(element, id);
        id
    }

    /// Look up a type definition.
    pub fn type_def(&self, ty: TypeId) -> Option<&TypeDef> {
        self.types.get(ty.index())
    }

    /// Number of entries in the type table.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    fn push_type(&mut self, def: TypeDef) -> TypeId {
        let id = TypeId::new(to_u32(self.types.len(), "types"));
        self.types.push(def);
        id
    }

    // Declarations

    pub fn add_local(&mut self, name: Name, ty: TypeId, span: Span) -> LocalId {
        let id = LocalId::new(to_u32(self.locals.len(), "locals"));
        self.locals.push(LocalDecl { name, ty, span });
        id
    }

    pub fn add_param(&mut self, name: Name, ty: TypeId, span: Span) -> ParamId {
        let id = ParamId::new(to_u32(self.params.len(), "params"));
        self.params.push(ParamDecl { name, ty, span });
        id
    }

    pub fn add_field(&mut self, field: FieldDecl) -> FieldId {
        let id = FieldId::new(to_u32(self.fields.len(), "fields"));
        self.fields.push(field);
        id
    }

    pub fn add_method(&mut self, method: MethodDecl) -> MethodId {
        let id = MethodId::new(to_u32(self.methods.len(), "methods"));
        self.methods.push(method);
        id
    }

    pub fn local(&self, id: LocalId) -> &LocalDecl {
        &self.locals[id.index()]
    }

    pub fn param(&self, id: ParamId) -> &ParamDecl {
        &self.params[id.index()]
    }

    pub fn field(&self, id: FieldId) -> &FieldDecl {
        &self.fields[id.index()]
    }

    pub fn method(&self, id: MethodId) -> &MethodDecl {
        &self.methods[id.index()]
    }
}
