//! Accumulates diagnostics so that every bad line is reported at once.

use crate::error::{Diagnostic, ParseError};

/// Collects diagnostics while a script is parsed.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic; an error makes [`finish`](Self::finish) fail.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns `Err` with every collected diagnostic if any of them is an error.
    ///
    /// Warnings alone are logged and dropped.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.has_errors {
            return Err(ParseError::new(self.diagnostics));
        }
        for warning in &self.diagnostics {
            log::warn!(diagnostic:% = warning; "Script warning");
        }
        Ok(())
    }
}
