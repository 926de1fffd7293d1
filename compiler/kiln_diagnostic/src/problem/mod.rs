//! Rendering of IR defects as internal compiler errors.
//!
//! A defect found while cloning names the node it was found on. When that
//! node could be read, its span becomes the diagnostic's location; otherwise
//! the diagnostic carries no location and the node id goes into a note.

use kiln_ir::CloneProblem;

use crate::{Diagnostic, ErrorCode};

const BUG_NOTE: &str = "this is a bug in the compiler";

impl From<&CloneProblem> for Diagnostic {
    #[cold]
    fn from(problem: &CloneProblem) -> Self {
        let message = problem.to_string();
        let diag = match *problem {
            // The caller asked for a node the arena never allocated.
            CloneProblem::DanglingExpr { id } => Diagnostic::bug(ErrorCode::E9002, message)
                .with_note(format!("requested root {id:?} does not belong to the arena")),

            CloneProblem::DanglingChild {
                kind, span, child, ..
            } => Diagnostic::bug(ErrorCode::E9001, message)
                .at(span, format!("this {kind} expression points at {child:?}")),

            CloneProblem::CyclicChild {
                owner,
                kind,
                span,
                child,
            } => Diagnostic::bug(ErrorCode::E9001, message)
                .at(span, format!("this {kind} expression points at {child:?}"))
                .with_note(format!(
                    "children are allocated before their parent, so {child:?} cannot be a child of {owner:?}"
                )),

            CloneProblem::DanglingList {
                kind, span, range, ..
            } => Diagnostic::bug(ErrorCode::E9001, message)
                .at(span, format!("this {kind} expression lists {range:?}")),
        };
        diag.with_note(BUG_NOTE)
    }
}

impl From<CloneProblem> for Diagnostic {
    fn from(problem: CloneProblem) -> Self {
        Diagnostic::from(&problem)
    }
}
