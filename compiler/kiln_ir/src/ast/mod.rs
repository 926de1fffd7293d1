//! Expression AST.
//!
//! Expression nodes and operators. Every child slot is an [`ExprId`]
//! into the owning [`ExprArena`](crate::ExprArena); list-valued slots are
//! ranges into the arena's flat list storage.
//!
//! [`ExprId`]: crate::ExprId

mod expr;
mod operators;

pub use expr::{Expr, ExprKind};
pub use operators::{BinaryOp, PostfixOp, PrefixOp};
