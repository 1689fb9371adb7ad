//! Argument values and binding for module calls.

use glam::DVec3;

use crate::error::{ParseError, ParseErrorKind};
use crate::span::Span;

/// A literal argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Number literal, sign applied.
    Number(f64),
    /// `true` / `false`.
    Bool(bool),
    /// `[a, b, ...]` of numbers.
    Vector(Vec<f64>),
}

/// One argument of a module call.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    /// Name for `name = value` arguments.
    pub name: Option<String>,
    /// Literal value.
    pub value: Value,
    /// Source location of the whole argument.
    pub span: Span,
}

/// Arguments of one call, consumed parameter by parameter.
///
/// Each `take_*` removes the matching argument; [`Arguments::finish`]
/// reports whatever the module did not ask for.
pub struct Arguments {
    module: String,
    span: Span,
    /// Each slot keeps its position among the positional arguments.
    args: Vec<(Option<usize>, Option<Argument>)>,
}

impl Arguments {
    pub fn new(module: &str, span: Span, args: Vec<Argument>) -> Self {
        let mut next_position = 0;
        let args = args
            .into_iter()
            .map(|arg| {
                let position = arg.name.is_none().then(|| {
                    next_position += 1;
                    next_position - 1
                });
                (position, Some(arg))
            })
            .collect();
        Self {
            module: module.to_string(),
            span,
            args,
        }
    }

    /// Location of the module name.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Removes the argument named `name`, or the positional one at `index`.
    pub fn take(&mut self, name: &str, index: Option<usize>) -> Option<Argument> {
        if let Some((_, slot)) = self
            .args
            .iter_mut()
            .find(|(_, a)| a.as_ref().is_some_and(|a| a.name.as_deref() == Some(name)))
        {
            return slot.take();
        }
        let index = index?;
        self.args
            .iter_mut()
            .find(|(position, _)| *position == Some(index))
            .and_then(|(_, slot)| slot.take())
    }

    pub fn take_bool(&mut self, name: &str, index: Option<usize>) -> Result<Option<bool>, ParseError> {
        match self.take(name, index) {
            None => Ok(None),
            Some(Argument {
                value: Value::Bool(b),
                ..
            }) => Ok(Some(b)),
            Some(arg) => Err(self.type_error(name, "a boolean", arg.span)),
        }
    }

    pub fn take_number(&mut self, name: &str, index: Option<usize>) -> Result<Option<f64>, ParseError> {
        match self.take(name, index) {
            None => Ok(None),
            Some(Argument {
                value: Value::Number(n),
                ..
            }) => Ok(Some(n)),
            Some(arg) => Err(self.type_error(name, "a number", arg.span)),
        }
    }

    /// Takes a 3-vector; a scalar is expanded with `from_scalar`.
    pub fn take_vector(
        &mut self,
        name: &str,
        index: Option<usize>,
        from_scalar: impl Fn(f64) -> DVec3,
    ) -> Result<Option<DVec3>, ParseError> {
        match self.take(name, index) {
            None => Ok(None),
            Some(Argument {
                value: Value::Number(n),
                ..
            }) => Ok(Some(from_scalar(n))),
            Some(Argument {
                value: Value::Vector(v),
                span,
                ..
            }) => match v.as_slice() {
                [x, y, z] => Ok(Some(DVec3::new(*x, *y, *z))),
                _ => Err(ParseError::new(
                    ParseErrorKind::InvalidComponentCount(v.len()),
                    span,
                )),
            },
            Some(arg) => Err(self.type_error(name, "a vector", arg.span)),
        }
    }

    pub fn missing(&self, name: &str) -> ParseError {
        ParseError::new(
            ParseErrorKind::MissingArgument {
                module: self.module.clone(),
                argument: name.to_string(),
            },
            self.span,
        )
    }

    /// Fails on the first argument nothing consumed.
    pub fn finish(self) -> Result<(), ParseError> {
        match self.args.into_iter().find_map(|(_, arg)| arg) {
            None => Ok(()),
            Some(arg) => Err(ParseError::new(
                ParseErrorKind::UnknownArgument {
                    module: self.module,
                    argument: arg.name.unwrap_or_else(|| "<positional>".to_string()),
                },
                arg.span,
            )),
        }
    }

    fn type_error(&self, name: &str, expected: &'static str, span: Span) -> ParseError {
        ParseError::new(
            ParseErrorKind::ArgumentType {
                module: self.module.clone(),
                argument: name.to_string(),
                expected,
            },
            span,
        )
    }
}
