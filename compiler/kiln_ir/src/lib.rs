//! Kiln IR - Expression Intermediate Representation
//!
//! This crate contains the expression-level IR shared by the Kiln
//! optimization and code-generation passes:
//! - Spans for source locations
//! - Names for interned identifiers and string literals
//! - Type ids and declaration handles owned by the [`Program`]
//! - Expression nodes stored in a struct-of-arrays [`ExprArena`]
//! - The structural expression cloner ([`ExprCloner`])
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32), Types → TypeId(u32)
//! - **Flatten Everything**: No Box<Expr>, use ExprId(u32) indices
//! - **Share What Is Immutable**: literal nodes are aliased freely, their
//!   `ExprId` is their identity
//!
//! Types that contain floats store them as bits for Hash compatibility.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
pub mod clone;
mod expr_id;
mod interner;
mod name;
pub mod program;
mod span;
mod stack;
mod type_id;

pub use arena::{ExprArena, ListTooLong};
pub use ast::{BinaryOp, Expr, ExprKind, PostfixOp, PrefixOp};
pub use clone::{clone_expr, CloneProblem, ExprCloner};
pub use expr_id::{ExprId, ExprRange, TypeRange};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use program::{FieldId, LocalId, MethodId, ParamId, Program};
pub use span::Span;
pub use type_id::TypeId;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup, or from test fixtures. Safe to call multiple
/// times. Enable with `RUST_LOG=kiln_ir=debug` or `RUST_LOG=kiln_ir=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
