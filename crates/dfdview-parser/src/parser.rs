//! Line-oriented parser for view scripts.
//!
//! Each line holds at most one command, optionally followed by a `#` comment.
//! Parsing recovers at line granularity: a malformed line is reported and
//! skipped, and parsing resumes on the next line, so one pass reports every
//! bad line.

use winnow::{
    Parser as _,
    ascii::float,
    combinator::{alt, cut_err, eof, not, opt, peek, preceded, terminated},
    error::{ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location},
    token::{literal, one_of, take_till, take_while},
};

use crate::{
    command::{Command, ExportFormat},
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::{Span, Spanned},
};

/// Diagnostic details attached to winnow errors via `.context()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineDiagnostic {
    code: ErrorCode,
    message: &'static str,
    help: Option<&'static str>,
}

const UNKNOWN_COMMAND: LineDiagnostic = LineDiagnostic {
    code: ErrorCode::E100,
    message: "unknown command",
    help: Some("expected one of `zoom`, `press`, `move`, `release`, `leave`, `export`"),
};

const MISSING_ZOOM_DIRECTION: LineDiagnostic = LineDiagnostic {
    code: ErrorCode::E101,
    message: "`zoom` needs a direction",
    help: Some("write `zoom in` or `zoom out`"),
};

const INVALID_ZOOM_DIRECTION: LineDiagnostic = LineDiagnostic {
    code: ErrorCode::E102,
    message: "invalid zoom direction",
    help: Some("write `zoom in` or `zoom out`"),
};

const MISSING_COORDINATE: LineDiagnostic = LineDiagnostic {
    code: ErrorCode::E101,
    message: "pointer commands need an x and a y coordinate",
    help: Some("write `press <x> <y>` or `move <x> <y>`"),
};

const INVALID_COORDINATE: LineDiagnostic = LineDiagnostic {
    code: ErrorCode::E001,
    message: "coordinate is not a finite number",
    help: Some("coordinates are decimal numbers such as `120`, `-4.5` or `+0.25`"),
};

const MISSING_EXPORT_FORMAT: LineDiagnostic = LineDiagnostic {
    code: ErrorCode::E101,
    message: "`export` needs a format",
    help: Some("write `export png` or `export svg`"),
};

const INVALID_EXPORT_FORMAT: LineDiagnostic = LineDiagnostic {
    code: ErrorCode::E102,
    message: "unsupported export format",
    help: Some("write `export png` or `export svg`"),
};

const TRAILING_INPUT: LineDiagnostic = LineDiagnostic {
    code: ErrorCode::E103,
    message: "unexpected text after command",
    help: Some("put one command per line; use `#` to start a comment"),
};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError<LineDiagnostic>>;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Spaces and tabs, possibly none.
fn space0(input: &mut Input<'_>) -> IResult<()> {
    take_while(0.., [' ', '\t']).void().parse_next(input)
}

/// At least one space or tab.
fn space1(input: &mut Input<'_>) -> IResult<()> {
    take_while(1.., [' ', '\t']).void().parse_next(input)
}

/// `#` to the end of the line.
fn comment(input: &mut Input<'_>) -> IResult<()> {
    ('#', take_till(0.., ['\r', '\n']))
        .void()
        .parse_next(input)
}

/// An optional comment followed by a newline or the end of input.
fn line_end(input: &mut Input<'_>) -> IResult<()> {
    (
        opt(comment),
        alt(("\r\n".void(), '\n'.void(), eof.void())),
    )
        .void()
        .parse_next(input)
}

/// A keyword that is not the prefix of a longer word.
fn keyword<'a>(word: &'static str) -> impl FnMut(&mut Input<'a>) -> IResult<&'a str> {
    move |input: &mut Input<'a>| {
        terminated(literal(word), peek(not(one_of(is_word_char)))).parse_next(input)
    }
}

/// Whitespace introducing a further argument; fails with `missing` when the
/// line ends instead.
fn argument<'a>(missing: LineDiagnostic) -> impl FnMut(&mut Input<'a>) -> IResult<()> {
    move |input: &mut Input<'a>| {
        (space1, peek(not(line_end)))
            .void()
            .context(missing)
            .parse_next(input)
    }
}

/// A decimal number not immediately followed by more word characters.
fn number(input: &mut Input<'_>) -> IResult<f32> {
    terminated(
        float,
        peek(not(one_of(|c: char| is_word_char(c) || c == '.'))),
    )
    .parse_next(input)
}

fn coordinate(input: &mut Input<'_>) -> IResult<f32> {
    argument(MISSING_COORDINATE).parse_next(input)?;
    number
        .verify(|value: &f32| value.is_finite())
        .context(INVALID_COORDINATE)
        .parse_next(input)
}

fn point(input: &mut Input<'_>) -> IResult<(f32, f32)> {
    (coordinate, coordinate).parse_next(input)
}

fn zoom_command(input: &mut Input<'_>) -> IResult<Command> {
    preceded(
        keyword("zoom"),
        cut_err(preceded(
            argument(MISSING_ZOOM_DIRECTION),
            alt((
                keyword("in").value(Command::ZoomIn),
                keyword("out").value(Command::ZoomOut),
            ))
            .context(INVALID_ZOOM_DIRECTION),
        )),
    )
    .parse_next(input)
}

fn pointer_command(input: &mut Input<'_>) -> IResult<Command> {
    alt((
        preceded(keyword("press"), cut_err(point)).map(|(x, y)| Command::Press { x, y }),
        preceded(keyword("move"), cut_err(point)).map(|(x, y)| Command::Move { x, y }),
        keyword("release").value(Command::Release),
        keyword("leave").value(Command::Leave),
    ))
    .parse_next(input)
}

fn export_command(input: &mut Input<'_>) -> IResult<Command> {
    preceded(
        keyword("export"),
        cut_err(preceded(
            argument(MISSING_EXPORT_FORMAT),
            alt((
                keyword("png").value(Command::Export(ExportFormat::Png)),
                keyword("svg").value(Command::Export(ExportFormat::Svg)),
            ))
            .context(INVALID_EXPORT_FORMAT),
        )),
    )
    .parse_next(input)
}

fn command(input: &mut Input<'_>) -> IResult<Command> {
    alt((zoom_command, pointer_command, export_command))
        .context(UNKNOWN_COMMAND)
        .parse_next(input)
}

/// One line: blank, comment-only, or a single command.
fn statement(input: &mut Input<'_>) -> IResult<Option<Spanned<Command>>> {
    space0.parse_next(input)?;
    if opt(line_end).parse_next(input)?.is_some() {
        return Ok(None);
    }

    let start = input.current_token_start();
    let command = command.parse_next(input)?;
    let end = input.current_token_start();

    cut_err((space0, line_end))
        .context(TRAILING_INPUT)
        .parse_next(input)?;

    Ok(Some(Spanned::new(command, Span::new(start..end))))
}

/// Skips the remainder of the current line, newline included.
fn skip_line(input: &mut Input<'_>) {
    let _: IResult<_> = (take_till(0.., '\n'), opt('\n')).parse_next(input);
}

/// Accumulates commands and diagnostics over a whole script.
struct ScriptParser<'a> {
    source: &'a str,
    commands: Vec<Spanned<Command>>,
    diagnostics: DiagnosticCollector,
}

impl<'a> ScriptParser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            commands: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    fn run(&mut self) {
        let mut input = LocatingSlice::new(self.source);
        let mut has_errors = false;

        while !input.is_empty() {
            let line_start = input.current_token_start();
            match statement(&mut input) {
                Ok(Some(command)) => self.commands.push(command),
                Ok(None) => {}
                Err(err) => {
                    let error_pos = input.current_token_start();
                    let diagnostic = self.convert_err_mode(err, line_start, error_pos);
                    self.diagnostics.emit(diagnostic);
                    has_errors = true;
                    skip_line(&mut input);
                }
            }
        }

        if !has_errors && self.commands.is_empty() {
            self.diagnostics
                .emit(Diagnostic::warning("script contains no commands"));
        }
    }

    fn finish(self) -> Result<Vec<Spanned<Command>>, ParseError> {
        self.diagnostics.finish().map(|()| self.commands)
    }

    /// The span of a line's content, without indentation, comment or
    /// trailing whitespace.
    fn line_span(&self, line_start: usize) -> Span {
        let line = self.source[line_start..]
            .split('\n')
            .next()
            .unwrap_or_default();
        let content = line.split('#').next().unwrap_or_default();
        let start = line_start + (content.len() - content.trim_start().len());
        Span::new(start..start + content.trim().len())
    }

    /// Turns a failed statement into a diagnostic covering the line.
    ///
    /// Falls back to an unknown-command error when the winnow error carries
    /// no [`LineDiagnostic`].
    fn convert_err_mode(
        &self,
        err: ErrMode<ContextError<LineDiagnostic>>,
        line_start: usize,
        error_pos: usize,
    ) -> Diagnostic {
        let context_error = match err {
            ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
            ErrMode::Incomplete(_) => ContextError::new(),
        };
        let LineDiagnostic {
            code,
            message,
            help,
        } = context_error
            .context()
            .next()
            .copied()
            .unwrap_or(UNKNOWN_COMMAND);

        let span = self.line_span(line_start);
        let text = &self.source[span.to_range()];

        let message = match code {
            ErrorCode::E100 => {
                let word = text.split_whitespace().next().unwrap_or(text);
                format!("{message} `{word}`")
            }
            _ => message.to_string(),
        };

        let mut diag = Diagnostic::error(message)
            .with_code(code)
            .with_label(span, code.description());
        if code == ErrorCode::E103 && error_pos < span.end() {
            diag = diag.with_secondary_label(
                Span::new(error_pos..span.end()),
                "not part of the command",
            );
        }
        if let Some(help) = help {
            diag = diag.with_help(help);
        }
        diag
    }
}

/// Parses a whole script, reporting every malformed line.
pub fn parse_script(source: &str) -> Result<Vec<Spanned<Command>>, ParseError> {
    let mut parser = ScriptParser::new(source);
    parser.run();
    parser.finish()
}
