//! `dfdview` binary: replays a view script and exports the resulting view.

use std::{process::ExitCode, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use dfdview_cli::{Args, report};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args.log_level);
    debug!(args:?; "Parsed arguments");

    match dfdview_cli::run(&args) {
        Ok(summary) => {
            info!(
                written = summary.written.len(),
                failed = summary.failed.len();
                "dfdview finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            for report in report::reports(&err) {
                error!("{}", report::render(&report));
            }
            ExitCode::FAILURE
        }
    }
}

/// Sets up `env_logger` at `level`, or at `warn` when `level` is not a level name.
fn init_logging(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Unknown log level `{level}`, logging at `warn`");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
}
