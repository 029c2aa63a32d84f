use crate::capture::Capture;
use crate::cursor::Cursor;
use crate::error::{ParsingError, count_newlines};
use crate::parser::{Parser, Session};
use crate::result::{Failure, Outcome, ParseResult};
use crate::span::Span;
use tracing::debug;

/// Configuration for an [`Engine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Characters skipped between the end of one top-level parser and the
    /// start of the next
    pub separator_width: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions { separator_width: 1 }
    }
}

/// Drives an ordered list of top-level parsers over one input
///
/// A failing parser does not end the run: its failure is recorded as a
/// line-numbered [`ParsingError`] and the next parser picks up after it, so a
/// single run reports every independent failure.
#[derive(Debug, Default)]
pub struct Engine {
    parsers: Vec<Parser>,
    errors: Vec<ParsingError>,
    results: Option<ParseResult>,
    options: EngineOptions,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Engine {
            options,
            ..Self::default()
        }
    }

    pub fn add_parser(&mut self, parser: Parser) -> &mut Self {
        self.parsers.push(parser);
        self
    }

    pub fn add_parsers(&mut self, parsers: impl IntoIterator<Item = Parser>) -> &mut Self {
        self.parsers.extend(parsers);
        self
    }

    /// Run every parser in order against `text` and aggregate the outcome
    ///
    /// The aggregate fails with the last failure if any parser failed, matches
    /// with the spliced captures of all matching parsers otherwise, and is a
    /// miss when nothing was captured. Errors from a previous run are
    /// discarded.
    ///
    /// Each run is its own session: a backreference only sees captures its
    /// dependency made earlier in the same run. An error's line is the line
    /// its span starts on.
    #[tracing::instrument(level = "debug", skip_all, fields(len = text.len(), parsers = self.parsers.len()))]
    pub fn run(&mut self, text: &str) -> &ParseResult {
        let _session = Session::begin();
        self.errors.clear();

        let mut capture = Capture::new();
        let mut failure: Option<Failure> = None;
        let mut position = 0;
        let mut line = 1;
        let mut counted_to = 0;

        for parser in &self.parsers {
            let result = parser.run(text, position);
            let span = result.span;
            match result.outcome {
                Outcome::Failed(failed) => {
                    line += count_newlines(text, counted_to, span.start);
                    counted_to = counted_to.max(span.start);

                    let message = match &failed.message {
                        Some(message) => message.clone(),
                        None => parser.error_label().into_owned(),
                    };
                    debug!(line, start = span.start, end = span.end, %message, "parser failed");

                    self.errors.push(ParsingError {
                        start: span.start,
                        end: span.end,
                        line,
                        message: message.clone(),
                        kind: failed.kind,
                    });
                    failure = Some(failed.with_message(message));
                }
                Outcome::Matched(Some(matched)) => capture.append(matched),
                Outcome::Matched(None) | Outcome::Missed => {}
            }

            // Anything past `len + 1` is rejected by the bounds precheck alike
            position = Cursor::new(text, span.end)
                .advance(self.options.separator_width)
                .position()
                .min(text.len() + 1);
        }

        let span = Span::new(0, position.min(text.len()));
        let result = match failure {
            Some(failure) => ParseResult::failed(span, failure),
            None if capture.is_empty() => ParseResult::missed(span),
            None => ParseResult::matched(span, capture),
        };
        self.results.insert(result)
    }

    /// The aggregate result of the last run
    pub fn results(&self) -> Option<&ParseResult> {
        self.results.as_ref()
    }

    /// Errors recorded by the last run, in input order
    pub fn errors(&self) -> &[ParsingError] {
        &self.errors
    }

    pub fn parsers(&self) -> &[Parser] {
        &self.parsers
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }
}
