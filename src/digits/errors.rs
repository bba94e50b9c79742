use super::{DecimalInt, Side};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigitError {
    #[error("replacement digit must be between 0 and 9, got {digit}")]
    InvalidDigit { digit: i64 },

    #[error("position must be a positive integer (1-based), got {n}")]
    InvalidPosition { n: i64 },

    #[error("position {n} from the {side} is out of range for a {digits}-digit number")]
    OutOfRange { n: i64, side: Side, digits: usize },

    #[error("{value} does not fit in {target}")]
    Overflow {
        value: DecimalInt,
        target: &'static str,
    },
}

impl DigitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DigitError::InvalidDigit { .. } => ErrorKind::InvalidDigit,
            DigitError::InvalidPosition { .. } => ErrorKind::InvalidPosition,
            DigitError::OutOfRange { .. } => ErrorKind::OutOfRange,
            DigitError::Overflow { .. } => ErrorKind::Overflow,
        }
    }
}

/// Stable, machine-readable name of a [`DigitError`] variant.
///
/// Used by case tables (`expect_error = "out-of-range"`) and JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    InvalidDigit,
    InvalidPosition,
    OutOfRange,
    Overflow,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 4] = [
        ErrorKind::InvalidDigit,
        ErrorKind::InvalidPosition,
        ErrorKind::OutOfRange,
        ErrorKind::Overflow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidDigit => "invalid-digit",
            ErrorKind::InvalidPosition => "invalid-position",
            ErrorKind::OutOfRange => "out-of-range",
            ErrorKind::Overflow => "overflow",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorKind {
    type Err = UnknownErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-").to_ascii_lowercase();
        ErrorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| UnknownErrorKind(s.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown error kind '{0}' (expected invalid-digit, invalid-position, out-of-range or overflow)")]
pub struct UnknownErrorKind(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDecimalError {
    #[error("cannot parse integer from empty string")]
    Empty,

    #[error("invalid character {found:?} at byte {offset}")]
    InvalidCharacter { found: char, offset: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid side '{0}' (expected 'left' or 'right')")]
pub struct ParseSideError(pub String);
