//! Error types for dfdview operations.
//!
//! This module provides the main error type [`DfdViewError`] which wraps the
//! failures that can reach a caller: reading files, parsing view scripts,
//! invalid configuration and encoding the diagram.

use std::io;

use thiserror::Error;

use dfdview_parser::error::ParseError;

use crate::export::EncodeError;

/// The main error type for dfdview operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the script source next to the structured
/// diagnostics so that callers can render labeled snippets.
#[derive(Debug, Error)]
pub enum DfdViewError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(#[from] EncodeError),
}

impl DfdViewError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
