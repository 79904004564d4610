//! dfdview CLI library
//!
//! This module contains the core CLI logic for the dfdview tool: replay a
//! view script against the built-in diagram and export the resulting views.

pub mod report;

mod args;
mod config;

pub use args::Args;

use std::{fs, sync::Arc};

use log::{info, warn};

use dfdview::{
    DfdViewError, ExportFormat, ExportSummary, Session, diagram,
    export::{DirectorySink, ExportTrigger},
};

/// Run the dfdview CLI application
///
/// Replays the view script, if any, then exports the final view in the
/// formats requested with `--png`/`--svg`. Without a script and without
/// format flags, both a PNG and an SVG of the initial view are exported.
///
/// Failed exports are logged and reported in the returned summary; they do
/// not make the run fail.
///
/// # Errors
///
/// Returns `DfdViewError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - View script parse errors
pub fn run(args: &Args) -> Result<ExportSummary, DfdViewError> {
    info!(
        script = args.script.as_deref().unwrap_or("-"),
        output_dir = args.output_dir;
        "Viewing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let sink = DirectorySink::new(&args.output_dir);
    let exporter = ExportTrigger::from_config(&app_config, Arc::new(sink))?;
    let mut session = Session::new(Arc::new(diagram::medicine_level2()), exporter);

    if let Some(script) = &args.script {
        let source = fs::read_to_string(script)?;
        session.run_script(&source)?;
    }

    let (png, svg) = if args.script.is_none() && !args.png && !args.svg {
        (true, true)
    } else {
        (args.png, args.svg)
    };
    if png {
        session.export(ExportFormat::Png);
    }
    if svg {
        session.export(ExportFormat::Svg);
    }

    let state = session.controller().state();
    info!(
        zoom_percent = session.controller().zoom_percent(),
        pan_x = state.pan().x(),
        pan_y = state.pan().y();
        "Final view"
    );

    let summary = session.finish();
    for path in &summary.written {
        info!(path = path.display().to_string(); "Image written");
    }
    if !summary.failed.is_empty() {
        warn!(failed:? = summary.failed; "Some exports failed");
    }

    Ok(summary)
}
