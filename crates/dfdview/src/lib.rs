//! dfdview - pan, zoom and export a hand-placed data-flow diagram.
//!
//! The crate ties the pieces of the workspace together:
//!
//! - [`diagram`] builds the static level 2 DFD scene.
//! - [`Session`] owns the viewport controller and routes zoom, pointer and
//!   export events (typed in directly or parsed from a view script).
//! - [`export`] encodes the current view as PNG or SVG on worker threads.
//! - [`config`] holds the TOML-loadable style and export settings.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use dfdview::{Session, config::AppConfig, diagram, export::{DirectorySink, ExportTrigger}};
//!
//! let exporter = ExportTrigger::from_config(&AppConfig::default(), Arc::new(DirectorySink::new(".")))?;
//! let mut session = Session::new(Arc::new(diagram::medicine_level2()), exporter);
//!
//! session.controller_mut().zoom_in();
//! session.export(dfdview::ExportFormat::Png);
//! session.finish();
//! # Ok::<(), dfdview::DfdViewError>(())
//! ```

pub mod config;
pub mod diagram;
pub mod export;

mod error;
mod render;
mod session;

pub use dfdview_core::{color, geometry, scene, viewport};
pub use dfdview_parser::{Command, ExportFormat};

pub use error::DfdViewError;
pub use render::render_document;
pub use session::{ExportSummary, Session};
