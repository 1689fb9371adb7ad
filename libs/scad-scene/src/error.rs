//! # Parse Errors
//!
//! Error types for the scene parser.
//!
//! ## Example
//!
//! ```rust
//! use scad_scene::parse;
//!
//! let err = parse("cube(size = [1, 2]);").unwrap_err();
//! assert!(err.to_string().contains("3 components"));
//! ```

use scad_geometry::GeometryError;
use thiserror::Error;

use crate::span::Span;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A parse error with location information.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at {}", .span.start)]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Source location of error.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub const fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// Found unexpected token.
    #[error("unexpected token '{found}', expected {expected}")]
    UnexpectedToken {
        /// Token text that was found.
        found: String,
        /// Description of what was expected.
        expected: String,
    },

    /// Number literal could not be converted.
    #[error("invalid number '{text}'")]
    InvalidNumber {
        /// The invalid text.
        text: String,
    },

    /// Module name that the scene subset does not cover.
    #[error("unsupported module '{name}'")]
    UnsupportedModule {
        /// Module name.
        name: String,
    },

    /// Argument the module does not accept.
    #[error("unknown argument '{argument}' for {module}")]
    UnknownArgument {
        /// Module name.
        module: String,
        /// Argument name.
        argument: String,
    },

    /// Required argument was not supplied.
    #[error("missing argument '{argument}' for {module}")]
    MissingArgument {
        /// Module name.
        module: String,
        /// Argument name.
        argument: String,
    },

    /// An argument had the wrong type.
    #[error("argument '{argument}' of {module} must be {expected}")]
    ArgumentType {
        /// Module name.
        module: String,
        /// Argument name.
        argument: String,
        /// Expected type.
        expected: &'static str,
    },

    /// Vector literal of the wrong length.
    #[error("expected 3 components, got {0}")]
    InvalidComponentCount(usize),

    /// Special variable other than `$fn`, or a bad `$fn` value.
    #[error("invalid directive: {0}")]
    InvalidDirective(String),

    /// A boolean or transform has no children.
    #[error("{0}() has no children")]
    EmptyBlock(String),

    /// Blocks nest deeper than the parser accepts.
    #[error("blocks nested deeper than {0} levels")]
    NestingTooDeep(usize),

    /// The source contains no geometry.
    #[error("scene contains no geometry")]
    EmptyScene,

    /// Parsed primitive failed dimension validation.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;

    #[test]
    fn test_unexpected_token_display() {
        let error = ParseError::new(
            ParseErrorKind::UnexpectedToken {
                found: ")".to_string(),
                expected: "identifier".to_string(),
            },
            Span::new(Position::new(5, 1, 2), Position::new(6, 1, 3)),
        );
        let msg = error.to_string();
        assert!(msg.contains("unexpected token ')'"));
        assert!(msg.contains("identifier"));
        assert!(msg.ends_with("at 2:3"));
    }

    #[test]
    fn test_geometry_error_is_transparent() {
        let kind = ParseErrorKind::from(GeometryError::NonPositiveDimension {
            primitive: "cube",
            dimension: "size.z",
            value: 0.0,
        });
        assert_eq!(kind.to_string(), "cube size.z must be positive, got 0");
    }
}
