use crate::page::ParseError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TldrError {
    #[error("invalid language code: {0:?} (expected two lowercase letters, e.g. \"en\")")]
    InvalidLanguageCode(String),

    #[error("invalid platform: {0:?}")]
    InvalidPlatform(String),

    #[error("invalid command name: {0:?}")]
    InvalidCommandName(String),

    #[error("page not found: {name}")]
    PageNotFound { name: String },

    #[error("index out of bounds: {index} (only {len} candidate directories)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{source}: {}", path.display())]
    Parse { source: ParseError, path: PathBuf },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("{0}")]
    Usage(String),
}

impl TldrError {
    /// True for errors caused by bad user input rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TldrError::InvalidLanguageCode(_)
                | TldrError::InvalidPlatform(_)
                | TldrError::InvalidCommandName(_)
                | TldrError::Usage(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TldrError>;
