use crate::config::schema::{CaseFile, ValidationError};
use crate::selftest::SelfTestCase;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where a case table came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseSource {
    Inline,
    File(PathBuf),
}

impl fmt::Display for CaseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseSource::Inline => f.write_str("<inline>"),
            CaseSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read case table from {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("case table {origin} is not valid TOML: {source}")]
    Toml {
        origin: CaseSource,
        source: toml_edit::de::Error,
    },

    #[error("case table {origin} has {} problem(s):\n{source}", .source.issues.len())]
    Validation {
        origin: CaseSource,
        source: ValidationError,
    },
}

fn parse_cases(input: &str, origin: CaseSource) -> Result<Vec<SelfTestCase>, ConfigError> {
    let file: CaseFile = match toml_edit::de::from_str(input) {
        Ok(file) => file,
        Err(source) => return Err(ConfigError::Toml { origin, source }),
    };
    file.to_cases()
        .map_err(|source| ConfigError::Validation { origin, source })
}

pub fn load_from_str(input: &str) -> Result<Vec<SelfTestCase>, ConfigError> {
    parse_cases(input, CaseSource::Inline)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<SelfTestCase>, ConfigError> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cases = parse_cases(&input, CaseSource::File(path.to_path_buf()))?;
    tracing::debug!(path = %path.display(), count = cases.len(), "loaded case table");
    Ok(cases)
}
