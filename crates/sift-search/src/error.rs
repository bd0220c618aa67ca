//! Error types for the search configuration crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading options from YAML content or files.
///
/// In-memory configuration operations are total and do not produce errors;
/// only the loading surface is fallible.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The options file could not be read.
    #[error("failed to read {}: {message}", path.display())]
    Read {
        path: PathBuf,
        message: String,
    },

    /// The options content could not be parsed.
    #[error("failed to parse options: {0}")]
    Parse(String),
}

impl From<serde_yaml::Error> for OptionsError {
    fn from(err: serde_yaml::Error) -> Self {
        OptionsError::Parse(err.to_string())
    }
}
