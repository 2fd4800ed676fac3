use decimal_bigint::FormatError;
use thiserror::Error;

/// Everything that can go wrong between reading an expression and producing its value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExprError {
    #[error("invalid integer literal: {0}")]
    Format(#[from] FormatError),

    #[error("unexpected symbol {found:?} at position {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("unexpected token `{found}` at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("no variable named `{0}` in expression")]
    UnknownVariable(String),

    #[error("variable `{0}` has no value")]
    UnboundVariable(String),

    #[error("value of a variable must be constant, but it uses `{0}`")]
    NotConstant(String),

    #[error("expected NAME=EXPR, found `{0}`")]
    InvalidBinding(String),

    #[error("parentheses nested too deeply at position {position}")]
    NestingTooDeep { position: usize },
}
