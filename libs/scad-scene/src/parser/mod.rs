//! # Scene Parser
//!
//! Recursive-descent parser for the scene subset of OpenSCAD.
//!
//! ## Grammar
//!
//! ```text
//! scene      := directive* statement* EOF
//! directive  := '$fn' '=' number ';'
//! statement  := IDENT '(' arguments? ')' body
//! body       := ';' | '{' statement* '}' | statement
//! arguments  := argument (',' argument)* ','?
//! argument   := (IDENT '=')? value
//! value      := sign? NUMBER | 'true' | 'false' | '[' (sign? NUMBER (',' sign? NUMBER)*)? ']'
//! ```
//!
//! Several statements at the top level, or inside a transform block, form
//! an implicit union as they do in OpenSCAD.

mod arguments;

use config::constants::{DEFAULT_SCENE_FN, MAX_NESTING_DEPTH, MIN_SCENE_FN};
use glam::DVec3;
use scad_geometry::GeometryNode;

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind};
use crate::scene::Scene;
use crate::span::Span;

pub use arguments::{Argument, Arguments, Value};

// =============================================================================
// PARSER
// =============================================================================

/// Token-stream parser producing a [`Scene`].
pub struct Parser {
    /// Tokens, always terminated by `Eof`.
    tokens: Vec<Token>,
    /// Index of the current token.
    pos: usize,
    /// Bodies currently open.
    depth: usize,
}

impl Parser {
    /// Create a parser over lexer output.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Parse the whole token stream.
    pub fn parse_scene(&mut self) -> Result<Scene, ParseError> {
        let mut resolution = DEFAULT_SCENE_FN;
        let mut statements = Vec::new();

        while !self.current().is_eof() {
            if self.check(TokenKind::SpecialVariable) {
                resolution = self.parse_directive()?;
            } else {
                statements.push(self.parse_statement()?);
            }
        }

        let root = implicit_union(statements).ok_or_else(|| {
            ParseError::new(ParseErrorKind::EmptyScene, self.current().span)
        })?;
        Ok(Scene { resolution, root })
    }

    // =========================================================================
    // TOKEN HELPERS
    // =========================================================================

    fn current(&self) -> &Token {
        // tokenize() always appends Eof and advance() never passes it
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.current();
        let found = if token.is_eof() {
            token.kind.describe().to_string()
        } else {
            token.text.clone()
        };
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                found,
                expected: expected.to_string(),
            },
            token.span,
        )
    }

    // =========================================================================
    // DIRECTIVES
    // =========================================================================

    fn parse_directive(&mut self) -> Result<u32, ParseError> {
        let name = self.advance();
        if name.text != "$fn" {
            return Err(ParseError::new(
                ParseErrorKind::InvalidDirective(format!("unsupported variable {}", name.text)),
                name.span,
            ));
        }
        self.expect(TokenKind::Eq)?;
        let span = self.current().span;
        let value = self.parse_signed_number()?;
        self.expect(TokenKind::Semicolon)?;

        if value.fract() != 0.0 || value < f64::from(MIN_SCENE_FN) || value > f64::from(u32::MAX) {
            return Err(ParseError::new(
                ParseErrorKind::InvalidDirective(format!(
                    "$fn must be an integer >= {MIN_SCENE_FN}, got {value}"
                )),
                span,
            ));
        }
        Ok(value as u32)
    }

    // =========================================================================
    // STATEMENTS
    // =========================================================================

    fn parse_statement(&mut self) -> Result<GeometryNode, ParseError> {
        let name = self.expect(TokenKind::Identifier)?;
        let args = self.parse_arguments(&name)?;

        match name.text.as_str() {
            "cube" => {
                let node = build_cube(args)?;
                self.expect(TokenKind::Semicolon)?;
                Ok(node)
            }
            "cylinder" => {
                let node = build_cylinder(args)?;
                self.expect(TokenKind::Semicolon)?;
                Ok(node)
            }
            "translate" => {
                let offset = required_vector(args, "v", DVec3::splat)?;
                Ok(self.parse_single_child(&name)?.translate(offset))
            }
            "rotate" => {
                // rotate(a = 30) turns about Z
                let angles = required_vector(args, "a", |a| DVec3::new(0.0, 0.0, a))?;
                Ok(self.parse_single_child(&name)?.rotate(angles))
            }
            "union" => {
                args.finish()?;
                let children = self.parse_body(&name)?;
                Ok(GeometryNode::Union { children })
            }
            "difference" => {
                args.finish()?;
                let children = self.parse_body(&name)?;
                Ok(GeometryNode::Difference { children })
            }
            other => Err(ParseError::new(
                ParseErrorKind::UnsupportedModule {
                    name: other.to_string(),
                },
                name.span,
            )),
        }
    }

    /// Body of a transform: one child, or an implicit union of several.
    fn parse_single_child(&mut self, name: &Token) -> Result<GeometryNode, ParseError> {
        let children = self.parse_body(name)?;
        implicit_union(children).ok_or_else(|| empty_block(name))
    }

    fn parse_body(&mut self, name: &Token) -> Result<Vec<GeometryNode>, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::new(
                ParseErrorKind::NestingTooDeep(MAX_NESTING_DEPTH),
                name.span,
            ));
        }
        self.depth += 1;
        let children = self.parse_children(name);
        self.depth -= 1;
        children
    }

    fn parse_children(&mut self, name: &Token) -> Result<Vec<GeometryNode>, ParseError> {
        if self.eat(TokenKind::Semicolon) {
            return Err(empty_block(name));
        }
        if !self.eat(TokenKind::LBrace) {
            return Ok(vec![self.parse_statement()?]);
        }

        let mut children = Vec::new();
        while !self.eat(TokenKind::RBrace) {
            if self.current().is_eof() {
                return Err(self.unexpected("'}'"));
            }
            children.push(self.parse_statement()?);
        }
        if children.is_empty() {
            return Err(empty_block(name));
        }
        Ok(children)
    }

    // =========================================================================
    // ARGUMENTS
    // =========================================================================

    fn parse_arguments(&mut self, name: &Token) -> Result<Arguments, ParseError> {
        self.expect(TokenKind::LParen)?;
        let mut args = Vec::new();

        while !self.eat(TokenKind::RParen) {
            let start = self.current().span.start;
            let arg_name = if self.check(TokenKind::Identifier)
                && self.tokens.get(self.pos + 1).map(|t| t.kind) == Some(TokenKind::Eq)
            {
                let ident = self.advance();
                self.advance();
                Some(ident.text)
            } else {
                None
            };
            let value = self.parse_value()?;
            let end = self.tokens[self.pos.saturating_sub(1)].span.end;
            args.push(Argument {
                name: arg_name,
                value,
                span: Span::new(start, end),
            });

            if !self.eat(TokenKind::Comma) && !self.check(TokenKind::RParen) {
                return Err(self.unexpected("',' or ')'"));
            }
        }

        Ok(Arguments::new(&name.text, name.span, args))
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.current().kind {
            TokenKind::True => {
                self.advance();
                Ok(Value::Bool(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Value::Bool(false))
            }
            TokenKind::LBracket => {
                self.advance();
                let mut components = Vec::new();
                while !self.eat(TokenKind::RBracket) {
                    components.push(self.parse_signed_number()?);
                    if !self.eat(TokenKind::Comma) && !self.check(TokenKind::RBracket) {
                        return Err(self.unexpected("',' or ']'"));
                    }
                }
                Ok(Value::Vector(components))
            }
            _ => self.parse_signed_number().map(Value::Number),
        }
    }

    fn parse_signed_number(&mut self) -> Result<f64, ParseError> {
        let negative = if self.eat(TokenKind::Minus) {
            true
        } else {
            self.eat(TokenKind::Plus);
            false
        };
        if !self.check(TokenKind::Number) {
            return Err(self.unexpected("number"));
        }
        let token = self.advance();
        let value: f64 = token.text.parse().map_err(|_| {
            ParseError::new(
                ParseErrorKind::InvalidNumber {
                    text: token.text.clone(),
                },
                token.span,
            )
        })?;
        Ok(if negative { -value } else { value })
    }
}

// =============================================================================
// MODULE BUILDERS
// =============================================================================

fn build_cube(mut args: Arguments) -> Result<GeometryNode, ParseError> {
    let size = args
        .take_vector("size", Some(0), DVec3::splat)?
        .unwrap_or(DVec3::ONE);
    let center = args.take_bool("center", Some(1))?.unwrap_or(false);
    let span = args.span();
    args.finish()?;
    GeometryNode::cube(size, center).map_err(|e| geometry_error(e, span))
}

fn build_cylinder(mut args: Arguments) -> Result<GeometryNode, ParseError> {
    let height = args.take_number("h", Some(0))?.unwrap_or(1.0);
    let from_radius = args.take_number("r", None)?.map(|r| r * 2.0);
    let diameter = args.take_number("d", None)?.or(from_radius).unwrap_or(2.0);
    let center = args.take_bool("center", None)?.unwrap_or(false);
    let span = args.span();
    args.finish()?;
    GeometryNode::cylinder(diameter, height, center).map_err(|e| geometry_error(e, span))
}

fn required_vector(
    mut args: Arguments,
    name: &str,
    from_scalar: impl Fn(f64) -> DVec3,
) -> Result<DVec3, ParseError> {
    let value = args
        .take_vector(name, Some(0), from_scalar)?
        .ok_or_else(|| args.missing(name))?;
    args.finish()?;
    Ok(value)
}

fn implicit_union(mut nodes: Vec<GeometryNode>) -> Option<GeometryNode> {
    match nodes.len() {
        0 => None,
        1 => nodes.pop(),
        _ => Some(GeometryNode::Union { children: nodes }),
    }
}

fn empty_block(name: &Token) -> ParseError {
    ParseError::new(ParseErrorKind::EmptyBlock(name.text.clone()), name.span)
}

fn geometry_error(error: scad_geometry::GeometryError, span: Span) -> ParseError {
    ParseError::new(ParseErrorKind::Geometry(error), span)
}
