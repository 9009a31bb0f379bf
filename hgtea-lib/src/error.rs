use hgtea_core::HgTeaError;

/// Errors that can occur while loading sheets or settings.
#[derive(Debug, thiserror::Error)]
pub enum LibError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("TSV parse error: {0}")]
    Tsv(#[from] csv::Error),

    #[error("Sheet {0} has no header row")]
    EmptySheet(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error(transparent)]
    Catalog(#[from] HgTeaError),
}

impl LibError {
    pub fn io(path: impl std::fmt::Display, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            source,
        }
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}
