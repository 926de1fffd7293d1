//! Error codes for internal compiler errors.
//!
//! Codes are `E####`. The E9xxx range is reserved for defects in the
//! compiler itself, which is all the IR utilities can report.

use std::fmt;

/// Searchable code of an internal compiler error.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Malformed expression tree: a child id or list that does not belong
    /// to the arena, or a child that does not precede its parent
    E9001,
    /// Expression requested from the wrong arena
    E9002,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
