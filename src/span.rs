/// A half-open range of byte offsets into the input, `start..end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span. An `end` before `start` collapses to `start`.
    pub fn new(start: usize, end: usize) -> Self {
        Span {
            start,
            end: end.max(start),
        }
    }

    /// A zero-width span at `position`
    pub fn empty(position: usize) -> Self {
        Span::new(position, position)
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The part of `source` covered by this span.
    ///
    /// Offsets past the end are clamped; a span that does not fall on char
    /// boundaries yields an empty slice.
    pub fn slice<'code>(&self, source: &'code str) -> &'code str {
        let end = self.end.min(source.len());
        let start = self.start.min(end);
        source.get(start..end).unwrap_or("")
    }
}
