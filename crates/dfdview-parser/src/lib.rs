//! # dfdview Parser
//!
//! Parser for *view scripts*: plain-text recordings of the zoom, pointer and
//! export events a user would produce while looking at the diagram.
//!
//! ```text
//! # drag the diagram 50 right and 20 down, zoom in, save a PNG
//! press 100 100
//! move 150 120
//! release
//! zoom in
//! export png
//! ```
//!
//! One command per line; `#` starts a comment; blank lines are ignored.
//!
//! ## Usage
//!
//! ```
//! # use dfdview_parser::{parse, Command, ParseError};
//! fn main() -> Result<(), ParseError> {
//!     let commands = parse("press 100 100\nmove 150 120\nrelease\n")?;
//!
//!     assert_eq!(commands.len(), 3);
//!     assert_eq!(*commands[1].inner(), Command::Move { x: 150.0, y: 120.0 });
//!     Ok(())
//! }
//! ```

mod command;
pub mod error;
mod parser;
#[cfg(test)]
mod parser_tests;
mod span;

pub use command::{Command, ExportFormat};
pub use error::ParseError;
pub use span::{Span, Spanned};

use log::debug;

/// Parse a view script into commands.
///
/// Every malformed line is reported; on failure the returned [`ParseError`]
/// holds one diagnostic per bad line, each labeled with the line's span.
pub fn parse(source: &str) -> Result<Vec<Spanned<Command>>, ParseError> {
    let commands = parser::parse_script(source)?;
    debug!(commands = commands.len(); "View script parsed");
    Ok(commands)
}
