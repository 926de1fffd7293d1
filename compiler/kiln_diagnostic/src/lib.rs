//! Diagnostic system for Kiln compiler passes.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - One location (where it went wrong), when the offending node is readable
//! - Notes (context the location cannot carry)
//!
//! The IR utilities in this workspace never fail on user input. What they
//! can report are internal compiler errors (E9xxx): a pass handed the
//! cloner a tree that is not well-formed. [`Diagnostic::from`] turns such a
//! [`CloneProblem`](kiln_ir::CloneProblem) into a renderable diagnostic.

mod diagnostic;
mod error_code;
mod problem;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
