//! Command-line argument definitions for the dfdview CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the view script, the export directory,
//! the configuration file and logging verbosity.

use clap::Parser;

/// Command-line arguments for the dfdview tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a view script of zoom, pointer and export commands
    #[arg(help = "Path to the view script; without one the initial view is exported")]
    pub script: Option<String>,

    /// Directory that exported images are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Export a PNG of the final view
    #[arg(long)]
    pub png: bool,

    /// Export an SVG of the final view
    #[arg(long)]
    pub svg: bool,
}
