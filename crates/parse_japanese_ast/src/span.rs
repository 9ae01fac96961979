//! Point and position types for source locations.
//!
//! These types follow the unist `position` shape used by NLCST trees:
//! every count is in Unicode scalar values, so a character outside the
//! basic multilingual plane advances columns and offsets by one.

use serde::{Deserialize, Serialize};

/// A point in source text.
///
/// Uses 1-indexed lines and columns and a 0-indexed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
    /// Codepoint offset from the start of the text (0-indexed).
    pub offset: u32,
}

impl Point {
    /// The first codepoint of a text.
    pub const START: Point = Point::new(1, 1, 0);

    /// Creates a new point.
    #[inline]
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::START
    }
}

/// A position spanning two points in source text.
///
/// `start` is inclusive, `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Returns the length of the position in codepoints.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.offset - self.start.offset
    }

    /// Returns true if the position covers no codepoints.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Returns true if this position contains the given codepoint offset.
    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        self.start.offset <= offset && offset < self.end.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point() {
        let point = Point::new(2, 3, 10);
        assert_eq!(point.line, 2);
        assert_eq!(point.column, 3);
        assert_eq!(point.offset, 10);
    }

    #[test]
    fn test_point_default_is_start() {
        assert_eq!(Point::default(), Point::new(1, 1, 0));
    }

    #[test]
    fn test_position() {
        let position = Position::new(Point::new(1, 1, 0), Point::new(1, 6, 5));
        assert_eq!(position.len(), 5);
        assert!(!position.is_empty());
        assert!(position.contains(0));
        assert!(position.contains(4));
        assert!(!position.contains(5));
    }

    #[test]
    fn test_empty_position() {
        let point = Point::new(3, 1, 12);
        let position = Position::new(point, point);
        assert!(position.is_empty());
        assert_eq!(position.len(), 0);
        assert!(!position.contains(12));
    }

    #[test]
    fn test_position_across_lines() {
        let position = Position::new(Point::new(1, 4, 3), Point::new(2, 2, 5));
        assert_eq!(position.len(), 2);
        assert!(position.contains(3));
    }

    #[test]
    fn test_position_serialization() {
        let position = Position::new(Point::new(1, 1, 0), Point::new(1, 3, 2));
        let json = serde_json::to_value(position).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "start": { "line": 1, "column": 1, "offset": 0 },
                "end": { "line": 1, "column": 3, "offset": 2 }
            })
        );
    }

    #[test]
    fn test_position_deserialization() {
        let json = r#"{"start":{"line":2,"column":1,"offset":5},"end":{"line":2,"column":4,"offset":8}}"#;
        let position: Position = serde_json::from_str(json).unwrap();
        assert_eq!(position.start, Point::new(2, 1, 5));
        assert_eq!(position.end, Point::new(2, 4, 8));
    }
}
