pub mod loader;
pub mod schema;

pub use loader::{load_from_path, load_from_str, CaseSource, ConfigError};
pub use schema::{CaseDefinition, CaseFile, Metadata, RawInt, ValidationError, ValidationIssue};
