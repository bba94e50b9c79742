//! Digit Swap: replace a single decimal digit of an integer
//!
//! Positions are 1-based and counted from either end of the magnitude's
//! decimal digits. The sign is kept aside and reapplied, so `-9876` with the
//! ones digit replaced by `1` becomes `-9871`.
//!
//! # Rules
//!
//! - The replacement digit must be in `0..=9`
//! - Position 1 is the ones digit from the right, the leading digit from the left
//! - Leading zeros created by a replacement are absorbed (`1545` → `0545` → `545`)
//! - A negative number stays negative unless the result is zero
//!
//! # Example
//!
//! ```
//! use digit_swap::{DecimalInt, Side};
//!
//! let number: DecimalInt = "-9876".parse().unwrap();
//! let swapped = number.replace_digit(1, 1, Side::Right).unwrap();
//! assert_eq!(swapped.to_string(), "-9871");
//! ```

pub mod config;
pub mod digits;
pub mod logging;
pub mod prompt;
pub mod selftest;

// Re-exports
pub use config::{load_from_path, load_from_str, ConfigError};
pub use digits::{
    replace_digit, DecimalInt, DigitError, ErrorKind, ParseDecimalError, ParseSideError,
    ReplaceRequest, Side,
};
pub use prompt::{PromptError, Prompter};
pub use selftest::{builtin_cases, run_cases, CaseOutcome, Expected, SelfTestCase, SelfTestReport};
