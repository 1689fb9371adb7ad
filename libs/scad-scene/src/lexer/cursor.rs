//! # Source Cursor
//!
//! Walks scene text one character at a time, keeping the line/column of
//! the next unread character.

use crate::span::Position;

/// Read position inside scene source.
pub struct Cursor<'a> {
    source: &'a str,
    /// Unread remainder of `source`.
    rest: &'a str,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    /// Cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            rest: source,
            line: 0,
            column: 0,
        }
    }

    /// Position of the next unread character.
    pub fn position(&self) -> Position {
        Position::new(self.source.len() - self.rest.len(), self.line, self.column)
    }

    /// No characters left.
    pub fn is_eof(&self) -> bool {
        self.rest.is_empty()
    }

    /// Next unread character.
    pub fn first(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Character after [`first`](Self::first).
    pub fn second(&self) -> Option<char> {
        self.rest.chars().nth(1)
    }

    /// Unread text begins with `prefix`.
    pub fn at(&self, prefix: &str) -> bool {
        self.rest.starts_with(prefix)
    }

    /// Consume one character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.first()?;
        self.rest = &self.rest[c.len_utf8()..];
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume `prefix` if the unread text starts with it.
    pub fn eat_str(&mut self, prefix: &str) -> bool {
        if !self.at(prefix) {
            return false;
        }
        for _ in prefix.chars() {
            self.bump();
        }
        true
    }

    /// Consume characters while `accept` holds.
    pub fn eat_while(&mut self, accept: impl Fn(char) -> bool) {
        while self.first().is_some_and(&accept) {
            self.bump();
        }
    }

    /// Text consumed since `start`.
    pub fn text_since(&self, start: Position) -> &'a str {
        &self.source[start.byte..self.position().byte]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        let cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.first(), None);
        assert_eq!(cursor.position(), Position::default());
    }

    #[test]
    fn test_lookahead_does_not_consume() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.first(), Some('a'));
        assert_eq!(cursor.second(), Some('b'));
        assert!(cursor.at("ab"));
        assert_eq!(cursor.position().byte, 0);
    }

    #[test]
    fn test_lines_and_columns() {
        let mut cursor = Cursor::new("a\n\tcube");
        let start = cursor.position();
        cursor.bump();
        cursor.bump();
        assert_eq!((cursor.position().line, cursor.position().column), (1, 0));
        cursor.eat_while(char::is_whitespace);
        assert!(cursor.eat_str("cube"));
        assert_eq!(cursor.position().column, 5);
        assert_eq!(cursor.text_since(start), "a\n\tcube");
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_multibyte_offsets() {
        let mut cursor = Cursor::new("é1");
        cursor.bump();
        assert_eq!(cursor.position().byte, 2);
        assert_eq!(cursor.position().column, 1);
    }
}
