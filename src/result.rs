use crate::capture::Capture;
use crate::error::DependencyFault;
use crate::span::Span;

/// Why a matching attempt failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The expected pattern was not found at the position
    Mismatch,
    /// The position was refused before matching, e.g. by the bounds precheck
    Rejected,
    /// A backreference could not read its dependency
    Dependency(DependencyFault),
}

impl FailureKind {
    /// Fatal failures stop the current operation; permissive combinators
    /// (`choice`, `maybe`, `not`, lookaround, `many`) pass them through.
    pub fn is_fatal(&self) -> bool {
        matches!(self, FailureKind::Dependency(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: Option<String>,
}

impl Failure {
    pub fn mismatch() -> Self {
        Failure {
            kind: FailureKind::Mismatch,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Failure {
            kind: FailureKind::Rejected,
            message: Some(message.into()),
        }
    }

    pub fn dependency(fault: DependencyFault) -> Self {
        Failure {
            kind: FailureKind::Dependency(fault),
            message: Some(fault.to_string()),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// The state a matching attempt ended in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A match was recognised; the capture is absent for zero-width checks
    Matched(Option<Capture>),
    /// Tried and moved on: a permissive non-match that is not an error
    Missed,
    /// A hard failure
    Failed(Failure),
}

/// The value returned by every matching attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    pub span: Span,
    pub outcome: Outcome,
}

impl ParseResult {
    /// A match. An empty capture is stored as no capture.
    pub fn matched(span: Span, capture: Capture) -> Self {
        let capture = (!capture.is_empty()).then_some(capture);
        ParseResult {
            span,
            outcome: Outcome::Matched(capture),
        }
    }

    /// A match that captured nothing
    pub fn matched_empty(span: Span) -> Self {
        ParseResult {
            span,
            outcome: Outcome::Matched(None),
        }
    }

    pub fn missed(span: Span) -> Self {
        ParseResult {
            span,
            outcome: Outcome::Missed,
        }
    }

    pub fn failed(span: Span, failure: Failure) -> Self {
        ParseResult {
            span,
            outcome: Outcome::Failed(failure),
        }
    }

    pub fn mismatch(span: Span) -> Self {
        ParseResult::failed(span, Failure::mismatch())
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Matched(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self.outcome, Outcome::Failed(_))
    }

    pub fn capture(&self) -> Option<&Capture> {
        match &self.outcome {
            Outcome::Matched(capture) => capture.as_ref(),
            _ => None,
        }
    }

    pub fn into_capture(self) -> Option<Capture> {
        match self.outcome {
            Outcome::Matched(capture) => capture,
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match &self.outcome {
            Outcome::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// The diagnostic message, populated on failure paths
    pub fn message(&self) -> Option<&str> {
        self.failure()?.message.as_deref()
    }

    /// The dependency fault behind this result, if it is one
    pub fn dependency_fault(&self) -> Option<DependencyFault> {
        match self.failure()?.kind {
            FailureKind::Dependency(fault) => Some(fault),
            _ => None,
        }
    }

    /// Whether this result is a failure that must not be swallowed
    pub fn is_fatal(&self) -> bool {
        self.failure().is_some_and(|failure| failure.kind.is_fatal())
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    /// The same result with any capture dropped
    pub fn without_capture(self) -> Self {
        match self.outcome {
            Outcome::Matched(Some(_)) => ParseResult::matched_empty(self.span),
            _ => self,
        }
    }
}
