//! Single-digit replacement on the decimal representation of an integer.
//!
//! Positions are 1-based and counted either from the least-significant
//! digit ([`Side::Right`], the default) or from the most-significant digit
//! ([`Side::Left`]). The two sides are independent origins into the same
//! magnitude digit string; the sign never takes part in indexing.

mod decimal;
mod errors;

pub use decimal::DecimalInt;
pub use errors::{DigitError, ErrorKind, ParseDecimalError, ParseSideError, UnknownErrorKind};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which end of the number position 1 refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Position 1 is the most-significant digit.
    Left,
    /// Position 1 is the ones digit.
    #[default]
    Right,
}

impl Side {
    pub fn from_left(from_left: bool) -> Self {
        if from_left {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Zero-based index into a digit string of `len` characters, or `None`
    /// when position `n` falls outside it on either end.
    fn index(self, n: i64, len: usize) -> Option<usize> {
        let n = i128::from(n);
        let len = len as i128;
        let idx = match self {
            Side::Left => n - 1,
            Side::Right => len - n,
        };
        if idx < 0 || idx >= len {
            None
        } else {
            Some(idx as usize)
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

fn digit_char(digit: i64) -> Result<char, DigitError> {
    u8::try_from(digit)
        .ok()
        .filter(|d| *d <= 9)
        .map(|d| char::from(b'0' + d))
        .ok_or(DigitError::InvalidDigit { digit })
}

impl DecimalInt {
    /// Replace the digit at 1-based position `n`, counted from `side`.
    ///
    /// Leading zeros produced by the replacement are absorbed, and the sign
    /// of `self` is kept unless the resulting magnitude is zero.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`DigitError::InvalidDigit`] if `digit` is outside `0..=9`
    /// - [`DigitError::InvalidPosition`] if `n < 1`
    /// - [`DigitError::OutOfRange`] if `n` exceeds the digit count
    pub fn replace_digit(&self, n: i64, digit: i64, side: Side) -> Result<Self, DigitError> {
        let replacement = digit_char(digit)?;
        if n < 1 {
            return Err(DigitError::InvalidPosition { n });
        }

        let magnitude = self.magnitude();
        let idx = side
            .index(n, magnitude.len())
            .ok_or(DigitError::OutOfRange {
                n,
                side,
                digits: magnitude.len(),
            })?;

        tracing::trace!(number = %self, n, digit, %side, idx, "replacing digit");

        let mut replaced = String::with_capacity(magnitude.len());
        replaced.push_str(&magnitude[..idx]);
        replaced.push(replacement);
        replaced.push_str(&magnitude[idx + 1..]);

        Ok(DecimalInt::from_digits(self.is_negative(), &replaced))
    }

    /// The digit currently at 1-based position `n`, counted from `side`.
    pub fn digit_at(&self, n: i64, side: Side) -> Result<u8, DigitError> {
        if n < 1 {
            return Err(DigitError::InvalidPosition { n });
        }
        let magnitude = self.magnitude();
        let idx = side
            .index(n, magnitude.len())
            .ok_or(DigitError::OutOfRange {
                n,
                side,
                digits: magnitude.len(),
            })?;
        Ok(magnitude.as_bytes()[idx] - b'0')
    }
}

/// Replace one digit of a primitive integer.
///
/// Same contract as [`DecimalInt::replace_digit`]; additionally fails with
/// [`DigitError::Overflow`] when the result does not fit in `i128`, which
/// can only happen for 39-digit inputs.
///
/// ```
/// use digit_swap::{replace_digit, Side};
///
/// assert_eq!(replace_digit(1545, 2, 9, Side::Right).unwrap(), 1595);
/// assert_eq!(replace_digit(12345, 2, 0, Side::Left).unwrap(), 10345);
/// ```
pub fn replace_digit(number: i128, n: i64, digit: i64, side: Side) -> Result<i128, DigitError> {
    let replaced = DecimalInt::from(number).replace_digit(n, digit, side)?;
    i128::try_from(&replaced)
}

/// All inputs of one replacement, as gathered by the CLI, the prompt or a
/// case table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceRequest {
    pub number: DecimalInt,
    pub n: i64,
    pub digit: i64,
    #[serde(default)]
    pub side: Side,
}

impl ReplaceRequest {
    pub fn new(number: impl Into<DecimalInt>, n: i64, digit: i64, side: Side) -> Self {
        Self {
            number: number.into(),
            n,
            digit,
            side,
        }
    }

    pub fn apply(&self) -> Result<DecimalInt, DigitError> {
        self.number.replace_digit(self.n, self.digit, self.side)
    }
}

impl fmt::Display for ReplaceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "number={} n={} digit={} side={}",
            self.number, self.n, self.digit, self.side
        )
    }
}
