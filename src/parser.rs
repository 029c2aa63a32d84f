use crate::capture::Capture;
use crate::error::DependencyFault;
use crate::precheck::Precheck;
use crate::result::{Failure, Outcome, ParseResult};
use crate::span::Span;
use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// Label reported for failures when no parser along the way set one
pub const DEFAULT_ERROR_LABEL: &str = "Error parsing";

/// Core matching trait for parser combinators
///
/// Attempts a match of `text` at the byte offset `position` and describes the
/// attempt as a [`ParseResult`]. Matchers never consume input themselves; the
/// caller threads positions through the returned spans.
pub trait Matcher {
    fn attempt(&self, text: &str, position: usize) -> ParseResult;
}

impl<F> Matcher for F
where
    F: Fn(&str, usize) -> ParseResult,
{
    fn attempt(&self, text: &str, position: usize) -> ParseResult {
        self(text, position)
    }
}

/// Caller-supplied transform applied to every capture a parser produces
pub type CaptureMap = dyn Fn(Capture) -> Capture;

/// Identity of an input buffer: its address and length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SourceId {
    address: usize,
    len: usize,
}

impl SourceId {
    fn of(text: &str) -> Self {
        SourceId {
            address: text.as_ptr() as usize,
            len: text.len(),
        }
    }
}

thread_local! {
    static CURRENT_SESSION: Cell<u64> = const { Cell::new(0) };
    static NEXT_SESSION: Cell<u64> = const { Cell::new(1) };
}

/// One parse session, e.g. a single engine run
///
/// While a session is active, results cached before it began are invisible to
/// backreferences. Dropping it restores the enclosing session.
pub(crate) struct Session {
    previous: u64,
}

impl Session {
    pub(crate) fn begin() -> Self {
        let id = NEXT_SESSION.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        Session {
            previous: CURRENT_SESSION.with(|current| current.replace(id)),
        }
    }

    fn current() -> u64 {
        CURRENT_SESSION.with(Cell::get)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        CURRENT_SESSION.with(|current| current.set(self.previous));
    }
}

#[derive(Debug, Clone)]
struct LastRun {
    session: u64,
    source: SourceId,
    result: ParseResult,
}

/// Shared read handle on the most recent result of a parser
///
/// This is what backreferences hold on to: it stays valid however the parser
/// itself is moved into other combinators.
#[derive(Debug, Clone, Default)]
pub struct LastResult {
    cell: Rc<RefCell<Option<LastRun>>>,
}

impl LastResult {
    pub fn get(&self) -> Option<ParseResult> {
        self.cell.borrow().as_ref().map(|run| run.result.clone())
    }

    /// The flattened capture of the last run, provided that run happened in
    /// the current session and against this very `text`
    pub fn capture_text(&self, text: &str) -> Result<String, DependencyFault> {
        let last = self.cell.borrow();
        let run = last
            .as_ref()
            .filter(|run| run.session == Session::current())
            .ok_or(DependencyFault::NeverRun)?;
        if run.source != SourceId::of(text) {
            return Err(DependencyFault::StaleInput);
        }
        run.result
            .capture()
            .map(Capture::flatten)
            .ok_or(DependencyFault::NoCapture)
    }

    fn store(&self, text: &str, result: ParseResult) {
        *self.cell.borrow_mut() = Some(LastRun {
            session: Session::current(),
            source: SourceId::of(text),
            result,
        });
    }
}

struct Settings {
    label: Option<Cow<'static, str>>,
    mapper: Option<Rc<CaptureMap>>,
    join: bool,
}

struct Inner {
    matcher: Box<dyn Matcher>,
    precheck: Option<Rc<dyn Precheck>>,
    settings: RefCell<Settings>,
    last: LastResult,
}

/// A stateful wrapper around a matching function
///
/// Adds a precheck, a join/split capture mode, a mapping hook, an error label
/// and a memory of its own last result. `Parser` is a handle: clones share
/// configuration and last result, and the builder modifiers reconfigure every
/// clone at once.
#[derive(Clone)]
pub struct Parser {
    inner: Rc<Inner>,
}

impl Parser {
    pub fn new(matcher: impl Matcher + 'static) -> Self {
        Parser::build(Box::new(matcher), None)
    }

    pub fn with_precheck(matcher: impl Matcher + 'static, precheck: impl Precheck + 'static) -> Self {
        Parser::build(Box::new(matcher), Some(Rc::new(precheck)))
    }

    fn build(matcher: Box<dyn Matcher>, precheck: Option<Rc<dyn Precheck>>) -> Self {
        Parser {
            inner: Rc::new(Inner {
                matcher,
                precheck,
                settings: RefCell::new(Settings {
                    label: None,
                    mapper: None,
                    join: false,
                }),
                last: LastResult::default(),
            }),
        }
    }

    /// Run the parser against `text` at `position`
    ///
    /// A failing precheck short-circuits the matcher. Captures are joined
    /// (when in join mode) before they are mapped. The result is remembered
    /// as this parser's last result.
    pub fn run(&self, text: &str, position: usize) -> ParseResult {
        let result = match self.rejection(text, position) {
            Some(message) => ParseResult::failed(Span::empty(position), Failure::rejected(message)),
            None => self.finish(self.inner.matcher.attempt(text, position)),
        };
        self.inner.last.store(text, result.clone());
        result
    }

    fn rejection(&self, text: &str, position: usize) -> Option<String> {
        let precheck = self.inner.precheck.as_ref()?;
        let verdict = precheck.check(text, position);
        if !verdict.error {
            return None;
        }
        trace!(position, message = %verdict.message, "precheck rejected position");
        Some(verdict.message)
    }

    fn finish(&self, mut result: ParseResult) -> ParseResult {
        let mut emptied = false;
        match &mut result.outcome {
            Outcome::Matched(Some(capture)) => {
                let (join, mapper) = {
                    let settings = self.inner.settings.borrow();
                    (settings.join, settings.mapper.clone())
                };
                if join {
                    *capture = capture.joined();
                }
                if let Some(mapper) = mapper {
                    *capture = mapper(std::mem::take(capture));
                }
                emptied = capture.is_empty();
            }
            Outcome::Failed(failure) if failure.message.is_none() => {
                failure.message = self
                    .inner
                    .settings
                    .borrow()
                    .label
                    .as_ref()
                    .map(|label| label.to_string());
            }
            _ => {}
        }
        if emptied {
            result.outcome = Outcome::Matched(None);
        }
        result
    }

    /// Set the message reported when this parser fails
    pub fn label(self, label: impl Into<Cow<'static, str>>) -> Self {
        self.inner.settings.borrow_mut().label = Some(label.into());
        self
    }

    /// Transform every capture this parser produces
    pub fn map<F>(self, mapper: F) -> Self
    where
        F: Fn(Capture) -> Capture + 'static,
    {
        self.inner.settings.borrow_mut().mapper = Some(Rc::new(mapper));
        self
    }

    /// Flatten captures into a single text fragment
    pub fn join(self) -> Self {
        self.inner.settings.borrow_mut().join = true;
        self
    }

    /// Keep captures nested, which is the default. Opposite of [`Parser::join`]
    pub fn split(self) -> Self {
        self.inner.settings.borrow_mut().join = false;
        self
    }

    pub fn is_joined(&self) -> bool {
        self.inner.settings.borrow().join
    }

    /// The explicitly set label, or [`DEFAULT_ERROR_LABEL`]
    pub fn error_label(&self) -> Cow<'static, str> {
        self.inner
            .settings
            .borrow()
            .label
            .clone()
            .unwrap_or(Cow::Borrowed(DEFAULT_ERROR_LABEL))
    }

    pub fn last_result(&self) -> Option<ParseResult> {
        self.inner.last.get()
    }

    pub fn last_result_handle(&self) -> LastResult {
        self.inner.last.clone()
    }

    pub fn precheck(&self) -> Option<Rc<dyn Precheck>> {
        self.inner.precheck.clone()
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let settings = self.inner.settings.borrow();
        f.debug_struct("Parser")
            .field("label", &settings.label)
            .field("join", &settings.join)
            .field("mapper", &settings.mapper.as_ref().map(|_| "<function>"))
            .field("precheck", &self.inner.precheck.as_ref().map(|_| "<function>"))
            .finish()
    }
}
