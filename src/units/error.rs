use std::fmt;

use thiserror::Error;

/// Which quantity family an operation was working on. Carried inside
/// errors so messages name the expected grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Size,
    Time,
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityKind::Size => write!(f, "byte size"),
            QuantityKind::Time => write!(f, "time duration"),
        }
    }
}

/// Errors raised while parsing quantity literals or resolving unit names.
///
/// A malformed literal ("abcKB", "12..5") is an `InvalidFormat`; a literal
/// whose shape is fine but whose suffix is not in the unit table ("5ZB")
/// is an `UnknownUnit`. Callers rely on the distinction when reporting
/// which part of the input was wrong.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("invalid {kind} literal: '{input}'")]
    InvalidFormat { kind: QuantityKind, input: String },

    #[error("unknown {kind} unit: '{unit}'")]
    UnknownUnit { kind: QuantityKind, unit: String },
}
