//! Diagnostics for view script parsing.
//!
//! Every malformed line produces one [`Diagnostic`] carrying an [`ErrorCode`],
//! a primary [`Label`] over the offending line and, where a fix is obvious,
//! help text. All diagnostics of a script are returned together in a
//! [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use dfdview_parser::error::{Diagnostic, ErrorCode};
//! # use dfdview_parser::Span;
//! let diag = Diagnostic::error("unknown command `pan`")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(12..21), "not a command")
//!     .with_help("expected one of `zoom`, `press`, `move`, `release`, `leave`, `export`");
//!
//! assert_eq!(diag.to_string(), "error[E100]: unknown command `pan`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
