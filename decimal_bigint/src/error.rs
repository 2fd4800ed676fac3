use thiserror::Error;

/// The text handed to [`BigInteger::parse`](crate::BigInteger::parse) is not
/// a decimal integer.
///
/// Positions count characters of the input after surrounding whitespace
/// has been trimmed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("cannot parse integer from empty string")]
    Empty,

    #[error("sign character is not followed by any digit")]
    MissingDigits,

    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit { found: char, position: usize },
}
