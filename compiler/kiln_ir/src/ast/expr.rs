//! Expression node and its variants.
//!
//! `ExprKind` is `Copy`: children are ids, lists are ranges, member targets
//! are declaration handles. Reading a node out of the arena never borrows
//! the arena, so passes can read a kind and push new nodes in the same
//! breath.

use std::fmt;

use super::operators::{BinaryOp, PostfixOp, PrefixOp};
use crate::{ExprId, ExprRange, FieldId, LocalId, MethodId, Name, ParamId, Span, TypeId, TypeRange};

/// Expression node reconstructed from the arena's parallel arrays.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    pub ty: TypeId,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span, ty: TypeId) -> Self {
        Expr { kind, span, ty }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {:?} @ {:?}", self.kind, self.ty, self.span)
    }
}

/// Expression variants.
///
/// Grouped by how they behave under cloning:
/// - literals and native member references carry no clone-sensitive state
///   and are shared by id
/// - `ThisRef` is rebuilt through [`Program::this_ref`](crate::Program::this_ref)
/// - `LocalRef` / `ParamRef` are rebuilt against the same declaration
/// - everything else owns its children and is rebuilt recursively
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    /// Boolean literal: true, false
    Bool(bool),

    /// Char literal as a UTF-16 code unit: 'a', 'é'
    Char(u16),

    /// 32-bit integer literal
    Int(i32),

    /// 64-bit integer literal: 42L
    Long(i64),

    /// Float literal (stored as bits for Hash)
    Float(u32),

    /// Double literal (stored as bits for Hash)
    Double(u64),

    /// String literal (interned)
    String(Name),

    /// null
    Null,

    /// Unspecified trailing dimension: the second `[]` in `new int[3][]`
    AbsentArrayDimension,

    /// Class literal: `Foo.class`
    ClassLiteral { ref_type: TypeId },

    /// Field reference from native (embedded foreign) code
    NativeFieldRef { field: FieldId },

    /// Method reference from native (embedded foreign) code
    NativeMethodRef { method: MethodId },

    /// this
    ThisRef { class_type: TypeId },

    /// Local variable reference
    LocalRef(LocalId),

    /// Parameter reference
    ParamRef(ParamId),

    /// Array element access: `instance[index]`
    ArrayRef { instance: ExprId, index: ExprId },

    /// Binary operation: lhs op rhs
    Binary {
        op: BinaryOp,
        lhs: ExprId,
        rhs: ExprId,
    },

    /// Prefix operation: op arg
    Prefix { op: PrefixOp, arg: ExprId },

    /// Postfix operation: arg op
    Postfix { op: PostfixOp, arg: ExprId },

    /// Cast: `(cast_type) expr`
    Cast { cast_type: TypeId, expr: ExprId },

    /// Instance test: `expr instanceof test_type`
    InstanceOf { test_type: TypeId, expr: ExprId },

    /// Conditional: `test ? then_expr : else_expr`
    Conditional {
        test: ExprId,
        then_expr: ExprId,
        else_expr: ExprId,
    },

    /// Field access: `instance.field`
    FieldRef {
        /// `ExprId::INVALID` = static access.
        instance: ExprId,
        field: FieldId,
        /// Type the access is resolved against.
        enclosing_type: TypeId,
    },

    /// Method call: `instance.target(args...)`
    MethodCall {
        /// `ExprId::INVALID` = static call.
        instance: ExprId,
        target: MethodId,
        args: ExprRange,
        /// False once a pass has proven the call site monomorphic.
        polymorphic: bool,
    },

    /// Raw instance allocation (constructor body is invoked separately)
    NewInstance { class_type: TypeId },

    /// Array construction: `new T[d0][d1]` or `new T[] { init... }`
    NewArray {
        array_type: TypeId,
        /// `None` when the array is built from initializers.
        dims: Option<ExprRange>,
        /// `None` when the array is built from dimensions.
        initializers: Option<ExprRange>,
        /// Class literals for each dimension's runtime type. Shared, never rebuilt.
        class_literals: ExprRange,
    },

    /// Sequence of expressions evaluated in order; the last one is the value
    Multi { exprs: ExprRange },

    /// Marker seeding a class's dynamic-dispatch table
    ClassSeed { ref_type: TypeId },

    /// Deferred instantiation: picks one of several instantiation strategies
    /// for `source_type` once the concrete result type is bound
    DeferredCreate {
        source_type: TypeId,
        result_types: TypeRange,
        instantiations: ExprRange,
    },
}

impl ExprKind {
    /// Build a float literal.
    pub fn float(value: f32) -> Self {
        ExprKind::Float(value.to_bits())
    }

    /// Build a double literal.
    pub fn double(value: f64) -> Self {
        ExprKind::Double(value.to_bits())
    }

    /// Variant name, for diagnostics and tracing.
    pub const fn name(&self) -> &'static str {
        match self {
            ExprKind::Bool(_) => "Bool",
            ExprKind::Char(_) => "Char",
            ExprKind::Int(_) => "Int",
            ExprKind::Long(_) => "Long",
            ExprKind::Float(_) => "Float",
            ExprKind::Double(_) => "Double",
            ExprKind::String(_) => "String",
            ExprKind::Null => "Null",
            ExprKind::AbsentArrayDimension => "AbsentArrayDimension",
            ExprKind::ClassLiteral { .. } => "ClassLiteral",
            ExprKind::NativeFieldRef { .. } => "NativeFieldRef",
            ExprKind::NativeMethodRef { .. } => "NativeMethodRef",
            ExprKind::ThisRef { .. } => "ThisRef",
            ExprKind::LocalRef(_) => "LocalRef",
            ExprKind::ParamRef(_) => "ParamRef",
            ExprKind::ArrayRef { .. } => "ArrayRef",
            ExprKind::Binary { .. } => "Binary",
            ExprKind::Prefix { .. } => "Prefix",
            ExprKind::Postfix { .. } => "Postfix",
            ExprKind::Cast { .. } => "Cast",
            ExprKind::InstanceOf { .. } => "InstanceOf",
            ExprKind::Conditional { .. } => "Conditional",
            ExprKind::FieldRef { .. } => "FieldRef",
            ExprKind::MethodCall { .. } => "MethodCall",
            ExprKind::NewInstance { .. } => "NewInstance",
            ExprKind::NewArray { .. } => "NewArray",
            ExprKind::Multi { .. } => "Multi",
            ExprKind::ClassSeed { .. } => "ClassSeed",
            ExprKind::DeferredCreate { .. } => "DeferredCreate",
        }
    }
}
