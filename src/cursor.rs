/// A position in the input that steps over whole characters
///
/// Offsets are byte offsets into the UTF-8 source. Inside the source the
/// cursor moves from char boundary to char boundary; once it is at or past the
/// end it keeps moving one offset at a time, so positions beyond the input
/// stay reachable (and are later rejected by the bounds precheck).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'code> {
    source: &'code str,
    position: usize,
}

impl<'code> Cursor<'code> {
    pub fn new(source: &'code str, position: usize) -> Self {
        Cursor { source, position }
    }

    /// Get the character at the current position
    ///
    /// Returns `None` at or past the end, or when the position is not on a
    /// char boundary.
    pub fn value(&self) -> Option<char> {
        self.source.get(self.position..)?.chars().next()
    }

    /// Advance past the current character
    pub fn next(self) -> Self {
        let width = self.value().map_or(1, char::len_utf8);
        Cursor {
            position: self.position + width,
            ..self
        }
    }

    /// Advance `count` characters, stepping past the end if needed
    ///
    /// Steps past the end are one offset each and are added in one go,
    /// saturating.
    pub fn advance(self, count: usize) -> Self {
        let mut cursor = self;
        let mut remaining = count;
        while remaining > 0 && !cursor.eos() {
            cursor = cursor.next();
            remaining -= 1;
        }
        Cursor {
            position: cursor.position.saturating_add(remaining),
            ..cursor
        }
    }

    /// Advance up to `count` characters, stopping at the end of the source
    pub fn advance_within(self, count: usize) -> Self {
        let mut cursor = self;
        for _ in 0..count {
            if cursor.eos() {
                break;
            }
            cursor = cursor.next();
        }
        cursor
    }

    /// Step back one character, or `None` at the start of the source
    pub fn prev(self) -> Option<Self> {
        if self.position == 0 {
            return None;
        }
        let position = if self.position > self.source.len() {
            self.position - 1
        } else {
            let before = self.source.get(..self.position)?;
            self.position - before.chars().next_back()?.len_utf8()
        };
        Some(Cursor { position, ..self })
    }

    /// Move `offset` characters forward (positive) or backward (negative)
    pub fn shift(self, offset: isize) -> Option<Self> {
        if offset >= 0 {
            return Some(self.advance(offset.unsigned_abs()));
        }
        let mut cursor = self;
        for _ in 0..offset.unsigned_abs() {
            cursor = cursor.prev()?;
        }
        Some(cursor)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Check if the cursor is at or past the end of the source
    pub fn eos(&self) -> bool {
        self.position >= self.source.len()
    }

    pub fn source(&self) -> &'code str {
        self.source
    }
}
