//! Codepoint-aware source cursor.

use parse_japanese_ast::{Point, Position};

/// Tracks the current line, column, and offset while leaves are built.
///
/// Columns and offsets count Unicode scalar values. The cursor never
/// crosses a line on its own: line breaks are consumed as ordinary leaf
/// text and the next line is entered with [`Cursor::start_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    line: u32,
    column: u32,
    offset: u32,
}

impl Cursor {
    /// Creates a cursor at the start of a text.
    pub fn new() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Returns the current point.
    pub fn current(&self) -> Point {
        Point::new(self.line, self.column, self.offset)
    }

    /// Moves to column 1 of `line`, keeping the offset.
    pub fn start_line(&mut self, line: u32) {
        self.line = line;
        self.column = 1;
    }

    /// Returns the position covering `text` from the current point and
    /// moves past it.
    pub fn advance(&mut self, text: &str) -> Position {
        let start = self.current();
        let length = text.chars().count() as u32;
        self.column += length;
        self.offset += length;
        Position::new(start, self.current())
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        assert_eq!(Cursor::new().current(), Point::new(1, 1, 0));
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new();

        let first = cursor.advance("これは");
        assert_eq!(first, Position::new(Point::new(1, 1, 0), Point::new(1, 4, 3)));

        let second = cursor.advance("。");
        assert_eq!(second, Position::new(Point::new(1, 4, 3), Point::new(1, 5, 4)));
        assert_eq!(cursor.current(), Point::new(1, 5, 4));
    }

    #[test]
    fn test_advance_counts_codepoints_outside_bmp() {
        let mut cursor = Cursor::new();

        // U+29E3D needs a surrogate pair in UTF-16 and four bytes in UTF-8.
        let fish = cursor.advance("𩸽");
        assert_eq!(fish.end, Point::new(1, 2, 1));

        let ascii = cursor.advance("a");
        assert_eq!(ascii, Position::new(Point::new(1, 2, 1), Point::new(1, 3, 2)));
    }

    #[test]
    fn test_advance_empty_text() {
        let mut cursor = Cursor::new();
        let position = cursor.advance("");
        assert!(position.is_empty());
        assert_eq!(cursor.current(), Point::new(1, 1, 0));
    }

    #[test]
    fn test_start_line_keeps_offset() {
        let mut cursor = Cursor::new();
        cursor.advance("abc\n");
        cursor.start_line(2);

        assert_eq!(cursor.current(), Point::new(2, 1, 4));
    }

    #[test]
    fn test_advance_does_not_cross_lines() {
        let mut cursor = Cursor::new();
        let position = cursor.advance("a\r\n");
        assert_eq!(position.end, Point::new(1, 4, 3));
    }
}
