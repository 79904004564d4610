//! Turns a failed run into miette reports for the terminal.
//!
//! A rejected view script yields one report per malformed line, each with the
//! line highlighted in the script. Every other failure yields a single report
//! carrying a `dfdview::*` code.

use miette::{GraphicalReportHandler, LabeledSpan, MietteDiagnostic, Report, Severity, SourceSpan};

use dfdview::DfdViewError;
use dfdview_parser::error::{Diagnostic, ErrorCode, Label};

/// Builds the reports for `err`.
pub fn reports(err: &DfdViewError) -> Vec<Report> {
    match err {
        DfdViewError::Parse { err, src } => err
            .diagnostics()
            .iter()
            .map(|diag| script_report(diag, src))
            .collect(),
        _ => vec![failure_report(err)],
    }
}

/// Renders a report with the graphical handler.
pub fn render(report: &Report) -> String {
    let mut out = String::new();
    if GraphicalReportHandler::new()
        .render_report(&mut out, &**report)
        .is_err()
    {
        out = format!("{report}");
    }
    out
}

/// Fallback help for diagnostics that carry none.
fn code_hint(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::E001 => "pointer coordinates must be finite numbers",
        ErrorCode::E100 => "commands are `zoom`, `press`, `move`, `release`, `leave` and `export`",
        ErrorCode::E101 => "`press` and `move` take an x and a y coordinate",
        ErrorCode::E102 => "`zoom` takes `in` or `out`, `export` takes `png` or `svg`",
        ErrorCode::E103 => "only a `#` comment may follow a command",
    }
}

fn script_report(diag: &Diagnostic, src: &str) -> Report {
    let severity = if diag.severity().is_warning() {
        Severity::Warning
    } else {
        Severity::Error
    };

    let mut report = MietteDiagnostic::new(diag.message())
        .with_severity(severity)
        .with_labels(diag.labels().iter().map(labeled_span));
    if let Some(code) = diag.code() {
        report = report.with_code(code.as_str());
    }
    if let Some(help) = diag.help().or_else(|| diag.code().map(code_hint)) {
        report = report.with_help(help);
    }

    Report::new(report).with_source_code(src.to_string())
}

fn labeled_span(label: &Label) -> LabeledSpan {
    let span = SourceSpan::new(label.span().start().into(), label.span().len());
    let message = Some(label.message().to_string());
    if label.is_primary() {
        LabeledSpan::new_primary_with_span(message, span)
    } else {
        LabeledSpan::new_with_span(message, span)
    }
}

fn failure_report(err: &DfdViewError) -> Report {
    let (code, help) = match err {
        DfdViewError::Io(_) => (
            "dfdview::io",
            Some("check that the script is readable and the output directory is writable"),
        ),
        DfdViewError::Config(_) => (
            "dfdview::config",
            Some("`[style] background_color` takes a CSS color; `[export] pixel_ratio` must be positive and `quality` within 0..=1"),
        ),
        DfdViewError::Render(_) => ("dfdview::render", None),
        DfdViewError::Parse { .. } => ("dfdview::script", None),
    };

    let mut report = MietteDiagnostic::new(err.to_string()).with_code(code);
    if let Some(help) = help {
        report = report.with_help(help);
    }
    Report::new(report)
}

#[cfg(test)]
mod tests {
    use dfdview_parser::{Span, error::ParseError};

    use super::*;

    fn parse_failure(source: &str) -> DfdViewError {
        let err = dfdview_parser::parse(source).unwrap_err();
        DfdViewError::new_parse_error(err, source)
    }

    #[test]
    fn test_one_report_per_bad_line() {
        let reports = reports(&parse_failure("zoom in\nzoom sideways\npress 1\nrelease\n"));

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].to_string(), "invalid zoom direction");
        assert_eq!(reports[0].code().unwrap().to_string(), "E102");
        assert_eq!(
            reports[1].to_string(),
            "pointer commands need an x and a y coordinate"
        );
        assert_eq!(reports[1].code().unwrap().to_string(), "E101");
    }

    #[test]
    fn test_code_hint_fills_missing_help() {
        let diag = Diagnostic::error("unknown command `pan`")
            .with_code(ErrorCode::E100)
            .with_label(Span::new(0..9), "unknown command");
        let err = DfdViewError::new_parse_error(ParseError::from(diag), "pan 10 10");

        let reports = reports(&err);

        assert_eq!(
            reports[0].help().unwrap().to_string(),
            code_hint(ErrorCode::E100)
        );
    }

    #[test]
    fn test_parser_help_wins_over_code_hint() {
        let reports = reports(&parse_failure("export gif\n"));
        let help = reports[0].help().unwrap().to_string();

        assert_eq!(help, "write `export png` or `export svg`");
    }

    #[test]
    fn test_labels_keep_primary_flag() {
        let diag = Diagnostic::error("unexpected text after command")
            .with_code(ErrorCode::E103)
            .with_label(Span::new(0..12), "unexpected trailing input")
            .with_secondary_label(Span::new(8..12), "not part of the command");
        let err = DfdViewError::new_parse_error(ParseError::from(diag), "release now!");

        let reports = reports(&err);
        let labels: Vec<_> = reports[0].labels().unwrap().collect();

        assert_eq!(labels.len(), 2);
        assert!(labels[0].primary());
        assert!(!labels[1].primary());
        assert_eq!((labels[1].offset(), labels[1].len()), (8, 4));
    }

    #[test]
    fn test_config_failure_has_code_and_help() {
        let reports = reports(&DfdViewError::Config("bad color".to_string()));

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].to_string(), "Configuration error: bad color");
        assert_eq!(reports[0].code().unwrap().to_string(), "dfdview::config");
        assert!(reports[0].help().unwrap().to_string().contains("pixel_ratio"));
    }

    #[test]
    fn test_render_shows_script_line() {
        let rendered: String = reports(&parse_failure("zoom in\nexport gif\n"))
            .iter()
            .map(render)
            .collect();

        assert!(rendered.contains("unsupported export format"));
        assert!(rendered.contains("export gif"));
        assert!(rendered.contains("E102"));
    }
}
