//! Internal compiler error reports.
//!
//! Every diagnostic this crate produces reports a defect in the compiler
//! itself, so there is no severity: a [`Diagnostic`] is always fatal to the
//! pass that raised it. It carries at most one location, the node the defect
//! was found on.

use kiln_ir::Span;
use std::fmt;

use crate::ErrorCode;

/// The source location a diagnostic points at.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

/// An internal compiler error, ready to render.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// `None` when the offending node could not be read.
    pub label: Option<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    #[cold]
    pub fn bug(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            label: None,
            notes: Vec::new(),
        }
    }

    /// Point the diagnostic at `span`. A later call replaces the label.
    pub fn at(mut self, span: Span, message: impl Into<String>) -> Self {
        self.label = Some(Label {
            span,
            message: message.into(),
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn span(&self) -> Option<Span> {
        self.label.as_ref().map(|label| label.span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "internal error [{}]: {}", self.code, self.message)?;
        if let Some(label) = &self.label {
            write!(f, "\n  --> {}: {}", label.span, label.message)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        Ok(())
    }
}
