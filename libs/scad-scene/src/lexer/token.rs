//! # Tokens
//!
//! Token types for the scene lexer.

use crate::span::Span;

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Source span.
    pub span: Span,
    /// Token text.
    pub text: String,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span, text: String) -> Self {
        Self { kind, span, text }
    }

    /// Check if token is EOF.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens in the scene subset of OpenSCAD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    /// Number literal like `10` or `3.14`
    Number,
    /// Boolean true
    True,
    /// Boolean false
    False,

    // Identifiers
    /// Identifier like `cube` or `center`
    Identifier,
    /// Special variable like `$fn`
    SpecialVariable,

    // Operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `=`
    Eq,

    // Delimiters
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `;`
    Semicolon,
    /// `,`
    Comma,

    // Special
    /// End of file
    Eof,
    /// Character the scene grammar has no use for
    Error,
}

impl TokenKind {
    /// Human-readable description used in parse errors.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::True | Self::False => "boolean",
            Self::Identifier => "identifier",
            Self::SpecialVariable => "special variable",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Eq => "'='",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Semicolon => "';'",
            Self::Comma => "','",
            Self::Eof => "end of file",
            Self::Error => "invalid character",
        }
    }
}
