//! Source location tracking for the BASIC lexer
//!
//! Lines are 1-based. Columns are 0-based character offsets into the raw line,
//! matching the positions reported by lexical errors.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source text with line, column, and character offset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Character offset from start of input (0-based)
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (0-based, in characters)
    pub column: u32,
}

impl Position {
    /// Create a new position
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Advance position by `n` characters on the same line
    pub fn advance_chars(self, n: usize) -> Self {
        Self {
            offset: self.offset + n,
            line: self.line,
            column: self.column + n as u32,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span of source text from start to end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Span {
    /// Create a new span
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(
            start.offset <= end.offset,
            "Span start must not be after end"
        );
        Self { start, end }
    }

    /// Create a single-character span
    pub fn single(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos.advance_chars(1),
        }
    }

    /// Length of this span in characters
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(
                f,
                "{}:{}-{}",
                self.start.line, self.start.column, self.end.column
            )
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A value with its source location
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }
}

impl<T: fmt::Display> fmt::Display for Spanned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Line-indexed view of a source text for error reporting
#[derive(Debug, Clone)]
pub struct SourceMap {
    lines: Vec<String>,
}

impl SourceMap {
    /// Split the source on `\n`, the same way the lexer does
    pub fn new(source: &str) -> Self {
        Self {
            lines: source.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get a line of text by line number (1-based)
    pub fn get_line(&self, line_num: u32) -> Option<&str> {
        if line_num == 0 {
            return None;
        }
        self.lines.get((line_num - 1) as usize).map(String::as_str)
    }

    /// Format an error message with the offending line and a caret under
    /// the reported column
    pub fn format_error(&self, line_num: u32, column: Option<u32>, message: &str) -> String {
        let mut result = String::new();

        result.push_str(&format!("Error: {}\n", message));
        match column {
            Some(column) => result.push_str(&format!("  --> {}:{}\n", line_num, column)),
            None => result.push_str(&format!("  --> line {}\n", line_num)),
        }

        if let Some(line) = self.get_line(line_num) {
            let line_num_str = format!("{}", line_num);
            let padding = " ".repeat(line_num_str.len());

            result.push_str(&format!("   {} |\n", padding));
            result.push_str(&format!("{} | {}\n", line_num_str, line));

            if let Some(column) = column {
                // Columns count chars; tabs are echoed so the caret lines up
                let lead: String = line
                    .chars()
                    .take(column as usize)
                    .map(|ch| if ch == '\t' { '\t' } else { ' ' })
                    .collect();
                result.push_str(&format!("   {} | {}^\n", padding, lead));
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_span_covers_one_char() {
        let span = Span::single(Position::new(7, 2, 3));
        assert_eq!(span.len(), 1);
        assert!(!span.is_empty());
        assert_eq!(span.start.column, 3);
        assert_eq!(span.end.column, 4);
        assert_eq!(span.to_string(), "2:3-4");
    }

    #[test]
    fn test_multi_line_span_display() {
        let span = Span::new(Position::new(0, 1, 2), Position::new(12, 2, 1));
        assert_eq!(span.to_string(), "1:2-2:1");
        assert_eq!(span.len(), 12);
    }

    #[test]
    fn test_source_map_lines() {
        let map = SourceMap::new("LET a = 1\nLET b = 2\n");
        assert_eq!(map.line_count(), 3);
        assert_eq!(map.get_line(2), Some("LET b = 2"));
        assert_eq!(map.get_line(3), Some(""));
        assert_eq!(map.get_line(0), None);
        assert_eq!(map.get_line(4), None);
    }

    #[test]
    fn test_format_error_points_at_column() {
        let map = SourceMap::new("LET a = 1\nLET b = @");
        let rendered = map.format_error(2, Some(8), "Invalid character '@'");

        assert!(rendered.starts_with("Error: Invalid character '@'\n"));
        assert!(rendered.contains("  --> 2:8\n"));
        assert!(rendered.contains("2 | LET b = @\n"));
        let caret_line = format!("    | {}^\n", " ".repeat(8));
        assert!(rendered.ends_with(&caret_line));
    }

    #[test]
    fn test_format_error_without_column() {
        let map = SourceMap::new("CALL f(a, b");
        let rendered = map.format_error(1, None, "Unclosed parameter list");
        assert!(rendered.contains("  --> line 1\n"));
        assert!(!rendered.contains('^'));
    }
}
