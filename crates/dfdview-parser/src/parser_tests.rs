//! Unit tests for the view script parser.

use proptest::prelude::*;

use crate::{
    Command, ExportFormat, Span,
    error::{ErrorCode, ParseError},
    parse,
};

fn commands(source: &str) -> Vec<Command> {
    parse(source)
        .unwrap_or_else(|err| panic!("expected `{source}` to parse, got: {err}"))
        .into_iter()
        .map(|command| command.into_inner())
        .collect()
}

fn parse_err(source: &str) -> ParseError {
    match parse(source) {
        Ok(commands) => panic!("expected `{source}` to fail, got {commands:?}"),
        Err(err) => err,
    }
}

fn single_error(source: &str) -> (ErrorCode, Span) {
    let err = parse_err(source);
    assert_eq!(err.diagnostics().len(), 1, "{err}");
    let diag = &err.diagnostics()[0];
    (
        diag.code().expect("diagnostic has a code"),
        diag.primary_span().expect("diagnostic has a primary label"),
    )
}

#[test]
fn test_every_command_form() {
    let source = "\
zoom in
zoom out
press 100 100
move 150.5 -20
release
leave
export png
export svg
";

    assert_eq!(
        commands(source),
        vec![
            Command::ZoomIn,
            Command::ZoomOut,
            Command::Press { x: 100.0, y: 100.0 },
            Command::Move { x: 150.5, y: -20.0 },
            Command::Release,
            Command::Leave,
            Command::Export(ExportFormat::Png),
            Command::Export(ExportFormat::Svg),
        ]
    );
}

#[test]
fn test_comments_blank_lines_and_indentation() {
    let source = "\
# a recorded session

    press 0 0   # grab
\tmove +10 0
release#done
";

    assert_eq!(
        commands(source),
        vec![
            Command::Press { x: 0.0, y: 0.0 },
            Command::Move { x: 10.0, y: 0.0 },
            Command::Release,
        ]
    );
}

#[test]
fn test_crlf_line_endings() {
    assert_eq!(
        commands("zoom in\r\nleave\r\n"),
        vec![Command::ZoomIn, Command::Leave]
    );
}

#[test]
fn test_missing_final_newline() {
    assert_eq!(commands("export svg"), vec![Command::Export(ExportFormat::Svg)]);
}

#[test]
fn test_command_spans() {
    let parsed = parse("zoom in\n  press 1 2 # note\n").unwrap();
    assert_eq!(parsed[0].span(), Span::new(0..7));
    assert_eq!(parsed[1].span(), Span::new(10..19));
}

#[test]
fn test_comment_only_script_is_ok() {
    assert!(commands("# nothing to do\n\n").is_empty());
    assert!(commands("").is_empty());
}

#[test]
fn test_unknown_command() {
    let err = parse_err("zoom in\npan 10 10\n");
    let diag = &err.diagnostics()[0];

    assert_eq!(diag.code(), Some(ErrorCode::E100));
    assert_eq!(diag.message(), "unknown command `pan`");
    assert_eq!(diag.primary_span(), Some(Span::new(8..17)));
    assert!(diag.help().is_some());
}

#[test]
fn test_keywords_are_case_sensitive_and_whole_words() {
    assert_eq!(single_error("Zoom in").0, ErrorCode::E100);
    assert_eq!(single_error("released").0, ErrorCode::E100);
    assert_eq!(single_error("pressing 1 2").0, ErrorCode::E100);
}

#[test]
fn test_missing_arguments() {
    assert_eq!(single_error("zoom"), (ErrorCode::E101, Span::new(0..4)));
    assert_eq!(single_error("zoom   \n"), (ErrorCode::E101, Span::new(0..4)));
    assert_eq!(single_error("press 120"), (ErrorCode::E101, Span::new(0..9)));
    assert_eq!(single_error("move"), (ErrorCode::E101, Span::new(0..4)));
    assert_eq!(single_error("export # later"), (ErrorCode::E101, Span::new(0..6)));
}

#[test]
fn test_invalid_options() {
    assert_eq!(single_error("zoom inward"), (ErrorCode::E102, Span::new(0..11)));
    assert_eq!(single_error("export jpeg"), (ErrorCode::E102, Span::new(0..11)));
}

#[test]
fn test_invalid_coordinates() {
    assert_eq!(single_error("press ten 10").0, ErrorCode::E001);
    assert_eq!(single_error("move 10px 10").0, ErrorCode::E001);
    assert_eq!(single_error("move 1.2.3 10").0, ErrorCode::E001);
    assert_eq!(single_error("press 10 inf").0, ErrorCode::E001);
    assert_eq!(single_error("press nan 10").0, ErrorCode::E001);
}

#[test]
fn test_trailing_input() {
    let err = parse_err("release now\n");
    let diag = &err.diagnostics()[0];

    assert_eq!(diag.code(), Some(ErrorCode::E103));
    assert_eq!(diag.primary_span(), Some(Span::new(0..11)));

    let secondary = diag
        .labels()
        .iter()
        .find(|label| !label.is_primary())
        .expect("secondary label on the extra text");
    assert_eq!(secondary.span(), Span::new(8..11));

    assert_eq!(single_error("press 1 2 3").0, ErrorCode::E103);
}

#[test]
fn test_all_bad_lines_are_reported() {
    let source = "\
zoom in
pan 1 1
press 1
release
export gif
";
    let err = parse_err(source);
    let found: Vec<(Option<ErrorCode>, Option<Span>)> = err
        .diagnostics()
        .iter()
        .map(|diag| (diag.code(), diag.primary_span()))
        .collect();

    assert_eq!(
        found,
        vec![
            (Some(ErrorCode::E100), Some(Span::new(8..15))),
            (Some(ErrorCode::E101), Some(Span::new(16..23))),
            (Some(ErrorCode::E102), Some(Span::new(32..42))),
        ]
    );
}

proptest! {
    #[test]
    fn pointer_coordinates_survive_parsing(
        x in -1.0e6f32..1.0e6,
        y in -1.0e6f32..1.0e6,
    ) {
        let source = format!("press {x} {y}\nmove {y} {x}\n");
        let parsed = commands(&source);

        prop_assert_eq!(
            parsed,
            vec![Command::Press { x, y }, Command::Move { x: y, y: x }]
        );
    }

    #[test]
    fn arbitrary_text_never_panics(source in "[ -~\\n\\t]{0,200}") {
        let _ = parse(&source);
    }
}
