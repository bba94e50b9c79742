use super::errors::{DigitError, ParseDecimalError};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Signed decimal integer of arbitrary magnitude.
///
/// Stored as a sign flag plus the canonical magnitude digit string: ASCII
/// digits, no leading zeros except the lone `"0"`. Zero is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalInt {
    negative: bool,
    magnitude: String,
}

impl DecimalInt {
    /// Build from a sign and a digit string that may carry leading zeros.
    ///
    /// `digits` must be non-empty ASCII digits; callers in this module
    /// guarantee that.
    pub(crate) fn from_digits(negative: bool, digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            return Self::zero();
        }
        Self {
            negative,
            magnitude: trimmed.to_string(),
        }
    }

    pub fn zero() -> Self {
        Self {
            negative: false,
            magnitude: "0".to_string(),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude == "0"
    }

    /// Number of decimal digits in the magnitude (`0` has one digit).
    pub fn digit_count(&self) -> usize {
        self.magnitude.len()
    }

    /// Clamp into `i64`, saturating at `i64::MIN`/`i64::MAX`.
    ///
    /// Positions and digits beyond 64 bits keep their error kind after
    /// clamping: a huge `n` is still out of range, a huge digit still invalid.
    pub fn saturating_i64(&self) -> i64 {
        i64::try_from(self).unwrap_or(if self.negative { i64::MIN } else { i64::MAX })
    }

    pub(crate) fn magnitude(&self) -> &str {
        &self.magnitude
    }
}

impl Default for DecimalInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for DecimalInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.magnitude)
    }
}

impl FromStr for DecimalInt {
    type Err = ParseDecimalError;

    /// Surrounding whitespace is ignored, one leading `+` or `-` is allowed,
    /// and leading zeros are normalized away.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let leading_ws = s.len() - s.trim_start().len();
        let text = s.trim();

        let (negative, digits, sign_len) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..], 1),
            Some(b'+') => (false, &text[1..], 1),
            _ => (false, text, 0),
        };

        if digits.is_empty() {
            return Err(ParseDecimalError::Empty);
        }

        if let Some((offset, found)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseDecimalError::InvalidCharacter {
                found,
                offset: leading_ws + sign_len + offset,
            });
        }

        Ok(Self::from_digits(negative, digits))
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for DecimalInt {
                fn from(value: $ty) -> Self {
                    Self::from_digits(value < 0, &value.unsigned_abs().to_string())
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for DecimalInt {
                fn from(value: $ty) -> Self {
                    Self::from_digits(false, &value.to_string())
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_try_into_signed {
    ($($ty:ident),*) => {
        $(
            impl TryFrom<&DecimalInt> for $ty {
                type Error = DigitError;

                fn try_from(value: &DecimalInt) -> Result<Self, Self::Error> {
                    let overflow = || DigitError::Overflow {
                        value: value.clone(),
                        target: stringify!($ty),
                    };
                    // Digits are canonical, so the only parse failure is overflow.
                    let magnitude: u128 = value.magnitude.parse().map_err(|_| overflow())?;
                    let widened = if value.negative {
                        0i128.checked_sub_unsigned(magnitude)
                    } else {
                        i128::try_from(magnitude).ok()
                    };
                    widened
                        .and_then(|v| $ty::try_from(v).ok())
                        .ok_or_else(overflow)
                }
            }

            impl TryFrom<DecimalInt> for $ty {
                type Error = DigitError;

                fn try_from(value: DecimalInt) -> Result<Self, Self::Error> {
                    $ty::try_from(&value)
                }
            }
        )*
    };
}

impl_try_into_signed!(i64, i128);

impl Serialize for DecimalInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DecimalInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalIntVisitor)
    }
}

struct DecimalIntVisitor;

impl<'de> Visitor<'de> for DecimalIntVisitor {
    type Value = DecimalInt;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a string of decimal digits")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(DecimalInt::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(DecimalInt::from(v))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(DecimalInt::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(DecimalInt::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }
}
