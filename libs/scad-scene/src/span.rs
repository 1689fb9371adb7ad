//! # Source Span
//!
//! Locations in scene source, used by the lexer and parse errors.

use std::fmt;

/// A point in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset.
    pub byte: usize,
    /// Line (0-indexed).
    pub line: usize,
    /// Column (0-indexed).
    pub column: usize,
}

impl Position {
    /// Creates a position.
    pub const fn new(byte: usize, line: usize, column: usize) -> Self {
        Self { byte, line, column }
    }
}

impl fmt::Display for Position {
    /// Formats as 1-indexed `line:column`, the way editors report it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// A range in the source text.
///
/// # Example
///
/// ```rust
/// use scad_scene::span::{Position, Span};
///
/// let span = Span::new(Position::new(0, 0, 0), Position::new(4, 0, 4));
/// assert_eq!(span.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start (inclusive).
    pub start: Position,
    /// End (exclusive).
    pub end: Position,
}

impl Span {
    /// Creates a span between two positions.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end.byte.saturating_sub(self.start.byte)
    }

    /// Returns true if the span has zero length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
