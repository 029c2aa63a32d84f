use crate::result::FailureKind;

/// Why a backreference could not read the parser it depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DependencyFault {
    #[error("backreference dependency has never been run in this session")]
    NeverRun,
    #[error("backreference dependency last ran against a different input")]
    StaleInput,
    #[error("backreference dependency captured nothing on its last run")]
    NoCapture,
}

/// A diagnostic recorded by the engine for one failing top-level parser
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct ParsingError {
    pub start: usize,
    pub end: usize,
    /// 1-based line the failing span starts on
    pub line: usize,
    pub message: String,
    pub kind: FailureKind,
}

impl ParsingError {
    /// Render the error with up to two lines of context on each side of the
    /// failing line, underlining the failing span on that line
    pub fn render(&self, source: &str) -> String {
        let location = Location::of(source, self.start);
        let mut rendered = format!("error at line {}: {}\n", self.line, self.message);

        let first = location.line.saturating_sub(2).max(1);
        let last = location.line + 2;
        for (index, content) in source.split('\n').enumerate() {
            let number = index + 1;
            if number < first {
                continue;
            }
            if number > last {
                break;
            }

            let prefix = if number == location.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            rendered.push_str(&format!("{}{}\n", prefix, content));

            if number == location.line {
                let column = location.column.min(content.len());
                let before = content.get(..column).unwrap_or(content);
                let rest = content.get(column..).unwrap_or_default();
                let span_len = self.end.saturating_sub(self.start);
                let width = rest
                    .char_indices()
                    .take_while(|&(offset, _)| offset < span_len)
                    .count()
                    .max(1);
                rendered.push_str(&format!(
                    "{}{}--- here\n",
                    " ".repeat(prefix.len() + before.chars().count()),
                    "^".repeat(width)
                ));
            }
        }

        rendered
    }
}

/// A human-readable position: 1-based line and byte offset within that line
///
/// Byte offset instead of a column number, since columns depend on encoding,
/// tab width and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn of(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = &source.as_bytes()[..offset];
        let line_start = before
            .iter()
            .rposition(|&byte| byte == b'\n')
            .map_or(0, |newline| newline + 1);

        Location {
            line: count_newlines(source, 0, offset) + 1,
            column: offset - line_start,
        }
    }
}

/// Count `\n` in `source[from..to]`, clamping both ends to the source
pub(crate) fn count_newlines(source: &str, from: usize, to: usize) -> usize {
    let to = to.min(source.len());
    let from = from.min(to);
    source.as_bytes()[from..to]
        .iter()
        .filter(|&&byte| byte == b'\n')
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_at(end: usize, line: usize) -> ParsingError {
        ParsingError {
            start: end,
            end,
            line,
            message: "expected digit".to_owned(),
            kind: FailureKind::Mismatch,
        }
    }

    #[test]
    fn test_count_newlines() {
        assert_eq!(count_newlines("a\nb\nc", 0, 5), 2);
        assert_eq!(count_newlines("a\nb\nc", 2, 5), 1);
        assert_eq!(count_newlines("a\nb\nc", 0, 100), 2);
        assert_eq!(count_newlines("a\nb\nc", 4, 2), 0);
    }

    #[test]
    fn test_location() {
        let source = "line1\nline2";
        assert_eq!(Location::of(source, 0), Location { line: 1, column: 0 });
        assert_eq!(Location::of(source, 6), Location { line: 2, column: 0 });
        assert_eq!(Location::of(source, 11), Location { line: 2, column: 5 });
        // Past the end is clamped
        assert_eq!(Location::of(source, 40), Location { line: 2, column: 5 });
    }

    #[test]
    fn test_location_after_trailing_newline() {
        assert_eq!(Location::of("hello\n", 6), Location { line: 2, column: 0 });
    }

    #[test]
    fn test_display() {
        assert_eq!(error_at(3, 2).to_string(), "line 2: expected digit");
    }

    #[test]
    fn test_dependency_fault_display() {
        assert!(
            DependencyFault::NeverRun
                .to_string()
                .contains("never been run")
        );
    }

    #[test]
    fn test_render_points_at_failure() {
        let source = "a = 1\nb = x\nc = 3";
        let rendered = error_at(10, 2).render(source);

        assert!(rendered.starts_with("error at line 2: expected digit"));
        assert!(rendered.contains("    1 | a = 1"));
        assert!(rendered.contains("  > 2 | b = x"));
        assert!(rendered.contains("    3 | c = 3"));

        let pointer = rendered
            .lines()
            .find(|line| line.contains("^--- here"))
            .unwrap();
        assert_eq!(pointer.find('^'), Some("  > 2 | ".len() + 4));
    }

    #[test]
    fn test_render_counts_columns_in_characters() {
        let source = "é = x";
        let rendered = error_at(5, 1).render(source);

        let pointer = rendered
            .lines()
            .find(|line| line.contains("^--- here"))
            .unwrap();
        assert_eq!(pointer.find('^'), Some("  > 1 | ".len() + 4));
    }

    #[test]
    fn test_render_underlines_span() {
        let source = "a = 1\nb = \nc = 3";
        let error = ParsingError {
            start: 6,
            end: 10,
            ..error_at(6, 2)
        };

        let rendered = error.render(source);
        assert!(rendered.contains("  > 2 | b = \n        ^^^^--- here\n"));
    }

    #[test]
    fn test_render_limits_context() {
        let source = "1\n2\n3\n4\n5\n6\n7";
        // Offset 8 is the start of line 5
        let rendered = error_at(8, 5).render(source);

        assert!(!rendered.contains("| 2"));
        assert!(rendered.contains("    3 | 3"));
        assert!(rendered.contains("  > 5 | 5"));
        assert!(rendered.contains("    7 | 7"));
    }

    #[test]
    fn test_render_empty_source() {
        let rendered = error_at(0, 1).render("");
        assert!(rendered.contains("  > 1 | "));
        assert!(rendered.contains("^--- here"));
    }
}
