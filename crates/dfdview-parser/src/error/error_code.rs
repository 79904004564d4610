//! Error codes for view script diagnostics.
//!
//! - `E0xx` - Lexical problems inside a line
//! - `E1xx` - Command structure

use std::fmt;

/// Stable identifiers for each kind of script error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Invalid coordinate.
    ///
    /// A pointer coordinate is not a finite decimal number.
    E001,

    /// Unknown command.
    ///
    /// The first word of the line is not a known command.
    E100,

    /// Missing argument.
    ///
    /// The command ended before all of its arguments were given.
    E101,

    /// Invalid option.
    ///
    /// `zoom` takes `in` or `out`; `export` takes `png` or `svg`.
    E102,

    /// Unexpected trailing input.
    ///
    /// Extra text follows a complete command.
    E103,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "invalid coordinate",
            ErrorCode::E100 => "unknown command",
            ErrorCode::E101 => "missing argument",
            ErrorCode::E102 => "invalid option",
            ErrorCode::E103 => "unexpected trailing input",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
