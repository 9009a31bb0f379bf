use thiserror::Error;

use hgtea_core::HgTeaError;
use hgtea_lib::LibError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Loading the sheets or settings failed
    #[error(transparent)]
    Lib(#[from] LibError),

    /// Catalog query failed
    #[error(transparent)]
    Catalog(#[from] HgTeaError),

    /// Unknown column name in `--fields` or the settings file
    #[error("Unknown field '{name}' (available: {available})")]
    UnknownField { name: String, available: String },

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn unknown_field(name: impl Into<String>, available: &[&str]) -> Self {
        Self::UnknownField {
            name: name.into(),
            available: available.join(", "),
        }
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
