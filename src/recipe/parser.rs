use tracing::{debug, warn};

use crate::engine::directive::args::Arguments;
use crate::engine::directive::registry::DirectiveRegistry;
use crate::recipe::error::ParseError;
use crate::recipe::tokenizer::{Token, tokenize};

/// One recipe step resolved against the registry: the directive's canonical
/// name plus its bound arguments.
#[derive(Debug, Clone)]
pub struct ParsedDirective {
    pub name: &'static str,
    pub args: Arguments,
}

/// Parse recipe text into bound directives, in recipe order.
///
/// One directive per line; `;` also terminates a directive, so a line may
/// hold several. `#` starts a comment and blank lines are skipped.
pub fn parse_recipe(
    text: &str,
    registry: &DirectiveRegistry,
) -> Result<Vec<ParsedDirective>, ParseError> {
    let mut parsed = Vec::new();

    for line in text.lines() {
        let tokens = tokenize(line);

        if let Err(err) = validate_tokens(&tokens) {
            warn!(target: "rowforge::recipe", ?err, line, "Token validation failed");
            return Err(err);
        }

        for group in tokens.split(|token| *token == Token::Semicolon) {
            if group.is_empty() {
                continue;
            }
            parsed.push(parse_directive(group, registry)?);
        }
    }

    if parsed.is_empty() {
        return Err(ParseError::EmptyRecipe);
    }

    debug!(target: "rowforge::recipe", directives = parsed.len(), "Recipe parsed");
    Ok(parsed)
}

fn parse_directive(
    tokens: &[Token],
    registry: &DirectiveRegistry,
) -> Result<ParsedDirective, ParseError> {
    let mut iter = tokens.iter();

    let name = match iter.next() {
        Some(Token::Word(word)) => word.as_str(),
        Some(tok) => return Err(ParseError::UnexpectedToken(format!("{:?}", tok))),
        None => return Err(ParseError::MissingArgument("directive name".to_string())),
    };

    let registration = registry
        .get(name)
        .ok_or_else(|| ParseError::UnknownDirective(name.to_string()))?;

    let args = Arguments::bind(registration.usage(), iter.as_slice())?;

    Ok(ParsedDirective {
        name: registration.usage().name(),
        args,
    })
}

/// Validates that there are no invalid tokens (e.g., `<INVALID>`) after tokenization.
fn validate_tokens(tokens: &[Token]) -> Result<(), ParseError> {
    for token in tokens {
        if let Token::Word(word) = token {
            if word == "<INVALID>" {
                return Err(ParseError::UnexpectedToken(
                    "Found invalid character during tokenization.".to_string(),
                ));
            }
        }
    }
    Ok(())
}
