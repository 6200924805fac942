#[derive(Debug)]
pub enum ParseError {
    /// Directive name is not in the registry
    UnknownDirective(String),

    /// A required argument was missing
    MissingArgument(String),

    /// An argument token did not match the declared kind
    WrongArgumentKind(String),

    /// Unexpected token found while parsing
    UnexpectedToken(String),

    /// Recipe text contained no directives
    EmptyRecipe,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnknownDirective(name) => write!(f, "Unknown directive: {}", name),
            ParseError::MissingArgument(arg) => write!(f, "Missing argument: {}", arg),
            ParseError::WrongArgumentKind(detail) => {
                write!(f, "Wrong argument kind: {}", detail)
            }
            ParseError::UnexpectedToken(tok) => write!(f, "Unexpected token: {}", tok),
            ParseError::EmptyRecipe => write!(f, "Recipe contains no directives"),
        }
    }
}

impl std::error::Error for ParseError {}
