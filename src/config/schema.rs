use crate::digits::{DecimalInt, ErrorKind, ReplaceRequest, Side};
use crate::selftest::{Expected, SelfTestCase};
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct CaseFile {
    #[serde(default)]
    pub meta: Metadata,
    #[serde(default)]
    pub cases: Vec<CaseDefinition>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Metadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One row of a case table as written in TOML.
///
/// Integers may be given as TOML integers or, for values beyond 64 bits,
/// as strings.
#[derive(Debug, Deserialize, Clone)]
pub struct CaseDefinition {
    #[serde(default)]
    pub name: Option<String>,
    pub number: RawInt,
    pub n: i64,
    pub digit: i64,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub expected: Option<RawInt>,
    #[serde(default)]
    pub expect_error: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawInt {
    Int(i64),
    Text(String),
}

impl RawInt {
    fn to_decimal(&self) -> Result<DecimalInt, String> {
        match self {
            RawInt::Int(value) => Ok(DecimalInt::from(*value)),
            RawInt::Text(text) => text.parse().map_err(|err| format!("'{text}': {err}")),
        }
    }
}

impl CaseFile {
    /// Convert every definition into a runnable case, collecting all issues
    /// before failing.
    pub fn to_cases(&self) -> Result<Vec<SelfTestCase>, ValidationError> {
        let mut issues = Vec::new();
        let mut cases = Vec::with_capacity(self.cases.len());

        if self.cases.is_empty() {
            issues.push(ValidationIssue::EmptyCaseList);
        }

        for (idx, def) in self.cases.iter().enumerate() {
            let name = def
                .name
                .clone()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| format!("case #{}", idx + 1));

            let number = match def.number.to_decimal() {
                Ok(number) => Some(number),
                Err(message) => {
                    issues.push(ValidationIssue::InvalidValue {
                        case: name.clone(),
                        field: "number",
                        message,
                    });
                    None
                }
            };

            let side = match def.side.as_deref() {
                None => Some(Side::Right),
                Some(text) => match text.parse::<Side>() {
                    Ok(side) => Some(side),
                    Err(err) => {
                        issues.push(ValidationIssue::InvalidValue {
                            case: name.clone(),
                            field: "side",
                            message: err.to_string(),
                        });
                        None
                    }
                },
            };

            let expected = match (&def.expected, &def.expect_error) {
                (Some(value), None) => match value.to_decimal() {
                    Ok(value) => Some(Expected::Value(value)),
                    Err(message) => {
                        issues.push(ValidationIssue::InvalidValue {
                            case: name.clone(),
                            field: "expected",
                            message,
                        });
                        None
                    }
                },
                (None, Some(kind)) => match kind.parse::<ErrorKind>() {
                    Ok(kind) => Some(Expected::Error(kind)),
                    Err(err) => {
                        issues.push(ValidationIssue::InvalidValue {
                            case: name.clone(),
                            field: "expect_error",
                            message: err.to_string(),
                        });
                        None
                    }
                },
                (Some(_), Some(_)) => {
                    issues.push(ValidationIssue::InvalidCombo {
                        case: name.clone(),
                        message: "expected and expect_error cannot both be set".to_string(),
                    });
                    None
                }
                (None, None) => {
                    issues.push(ValidationIssue::InvalidCombo {
                        case: name.clone(),
                        message: "one of expected or expect_error is required".to_string(),
                    });
                    None
                }
            };

            if let (Some(number), Some(side), Some(expected)) = (number, side, expected) {
                cases.push(SelfTestCase {
                    name,
                    request: ReplaceRequest::new(number, def.n, def.digit, side),
                    expected,
                });
            }
        }

        if issues.is_empty() {
            Ok(cases)
        } else {
            Err(ValidationError { issues })
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, issue) in self.issues.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    EmptyCaseList,
    InvalidValue {
        case: String,
        field: &'static str,
        message: String,
    },
    InvalidCombo {
        case: String,
        message: String,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyCaseList => write!(f, "case table contains no cases"),
            ValidationIssue::InvalidValue {
                case,
                field,
                message,
            } => write!(f, "case '{case}' has invalid '{field}': {message}"),
            ValidationIssue::InvalidCombo { case, message } => {
                write!(f, "case '{case}' has invalid configuration: {message}")
            }
        }
    }
}
