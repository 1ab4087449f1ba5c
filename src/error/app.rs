use thiserror::Error;

use super::{ConfigError, TagsError};

/// Exit status for a missing required configuration key.
const EXIT_CONFIG: u8 = 1;
/// Exit status when the tag list cannot be loaded.
const EXIT_TAGS: u8 = 2;
/// Generic exit status for every other failure.
const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("HTTP client error: {source}")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Tags(#[from] TagsError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn tags<E>(error: E) -> Self
    where
        E: Into<TagsError>,
    {
        error.into().into()
    }

    /// Process exit status reported for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Config(_) => EXIT_CONFIG,
            AppError::Tags(_) => EXIT_TAGS,
            AppError::Io { .. } | AppError::Clap { .. } | AppError::Reqwest { .. } => EXIT_FAILURE,
        }
    }
}
