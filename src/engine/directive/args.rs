use std::collections::HashMap;

use crate::engine::directive::usage::{ArgKind, ArgSpec, UsageDefinition};
use crate::engine::errors::DirectiveError;
use crate::recipe::error::ParseError;
use crate::recipe::tokenizer::Token;

/// A bound argument value, tagged with how it was written in the recipe.
#[derive(Debug, Clone, PartialEq)]
enum ArgValue {
    Column(String),
    Text(String),
}

/// Arguments for one directive invocation: every declared argument resolved
/// to a value, with defaults filled in for omitted optionals.
#[derive(Debug, Clone)]
pub struct Arguments {
    directive: &'static str,
    values: HashMap<&'static str, ArgValue>,
}

impl Arguments {
    /// Bind recipe tokens positionally against a usage declaration.
    pub fn bind(usage: &UsageDefinition, tokens: &[Token]) -> Result<Self, ParseError> {
        let mut values = HashMap::new();
        let mut iter = tokens.iter();

        for spec in usage.args() {
            match iter.next() {
                Some(token) => {
                    values.insert(spec.name, coerce(usage.name(), spec, token)?);
                }
                None if spec.required => {
                    return Err(ParseError::MissingArgument(format!(
                        "directive '{}' requires argument '{}'",
                        usage.name(),
                        spec.name
                    )));
                }
                None => {
                    if let Some(default) = spec.default {
                        values.insert(spec.name, ArgValue::Text(default.to_string()));
                    }
                }
            }
        }

        if let Some(extra) = iter.next() {
            return Err(ParseError::UnexpectedToken(format!(
                "extra token {:?} after arguments of '{}'",
                extra,
                usage.name()
            )));
        }

        Ok(Self {
            directive: usage.name(),
            values,
        })
    }

    pub fn directive(&self) -> &'static str {
        self.directive
    }

    /// The named column argument.
    pub fn column(&self, name: &str) -> Result<&str, DirectiveError> {
        match self.values.get(name) {
            Some(ArgValue::Column(value)) => Ok(value),
            Some(ArgValue::Text(_)) => Err(misuse(name, "bound as text, read as a column")),
            None => Err(misuse(name, "is not bound for this directive")),
        }
    }

    /// The named text argument, or its declared default.
    pub fn text(&self, name: &str) -> Result<&str, DirectiveError> {
        match self.values.get(name) {
            Some(ArgValue::Text(value)) => Ok(value),
            Some(ArgValue::Column(_)) => Err(misuse(name, "bound as a column, read as text")),
            None => Err(misuse(name, "is not bound for this directive")),
        }
    }
}

fn coerce(directive: &str, spec: &ArgSpec, token: &Token) -> Result<ArgValue, ParseError> {
    match (spec.kind, token) {
        (ArgKind::Column, Token::ColumnRef(name)) => Ok(ArgValue::Column(name.clone())),
        (ArgKind::Text, Token::Word(text)) => Ok(ArgValue::Text(text.clone())),
        (ArgKind::Text, Token::StringLiteral(text)) => Ok(ArgValue::Text(text.clone())),
        (ArgKind::Text, Token::Number(value)) => Ok(ArgValue::Text(value.to_string())),
        (kind, token) => Err(ParseError::WrongArgumentKind(format!(
            "argument '{}' of '{}' expects a {}, found {:?}",
            spec.name,
            directive,
            kind.describe(),
            token
        ))),
    }
}

fn misuse(name: &str, reason: &str) -> DirectiveError {
    DirectiveError::InvalidArgument {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
