//! # Scene Lexer
//!
//! Tokenizes scene source into tokens.
//!
//! ## Example
//!
//! ```rust
//! use scad_scene::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("cube(size = [1, 2, 3]);").tokenize();
//! assert_eq!(tokens[0].kind, TokenKind::Identifier);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use crate::span::Span;

// =============================================================================
// LEXER
// =============================================================================

/// Scene lexer.
///
/// Converts source text into a stream of tokens terminated by `Eof`.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the whole source. The last token is always `Eof`.
    pub fn tokenize(mut self) -> Vec<Token> {
        loop {
            self.skip_trivia();
            if self.cursor.is_eof() {
                break;
            }
            self.scan_token();
        }

        let end = self.cursor.position();
        self.tokens
            .push(Token::new(TokenKind::Eof, Span::new(end, end), String::new()));
        self.tokens
    }

    /// Whitespace, `// line` and `/* block */` comments.
    fn skip_trivia(&mut self) {
        loop {
            self.cursor.eat_while(char::is_whitespace);
            if self.cursor.eat_str("//") {
                self.cursor.eat_while(|c| c != '\n');
            } else if self.cursor.eat_str("/*") {
                // an unclosed comment runs to EOF
                while !self.cursor.is_eof() && !self.cursor.eat_str("*/") {
                    self.cursor.bump();
                }
            } else {
                break;
            }
        }
    }

    fn scan_token(&mut self) {
        let start = self.cursor.position();
        let Some(c) = self.cursor.bump() else {
            return;
        };

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '=' => TokenKind::Eq,

            '0'..='9' => self.scan_number(false),
            // `.5` is a valid OpenSCAD number
            '.' if self.cursor.first().is_some_and(|n| n.is_ascii_digit()) => {
                self.scan_number(true)
            }

            'a'..='z' | 'A'..='Z' | '_' => {
                self.cursor.eat_while(is_word);
                match self.cursor.text_since(start) {
                    "true" => TokenKind::True,
                    "false" => TokenKind::False,
                    _ => TokenKind::Identifier,
                }
            }

            '$' => {
                self.cursor.eat_while(is_word);
                TokenKind::SpecialVariable
            }

            _ => TokenKind::Error,
        };

        let text = self.cursor.text_since(start).to_string();
        let span = Span::new(start, self.cursor.position());
        self.tokens.push(Token::new(kind, span, text));
    }

    /// Rest of a number whose first character was already consumed.
    fn scan_number(&mut self, mut seen_dot: bool) -> TokenKind {
        let mut seen_exponent = false;

        while let Some(c) = self.cursor.first() {
            match c {
                '0'..='9' => {}
                '.' if !seen_dot && !seen_exponent => seen_dot = true,
                'e' | 'E' if !seen_exponent => {
                    seen_exponent = true;
                    if matches!(self.cursor.second(), Some('+' | '-')) {
                        self.cursor.bump();
                    }
                }
                _ => break,
            }
            self.cursor.bump();
        }

        TokenKind::Number
    }
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// =============================================================================
// TESTS
// =============================================================================
