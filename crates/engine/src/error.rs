use crate::split::Span;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to open input '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "No line terminator within {window} bytes before offset {offset}; \
         a record is longer than the lookback window"
    )]
    Split { offset: u64, window: usize },

    #[error("Failed to read boundary window ending at offset {offset}: {source}")]
    Boundary {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read span {span} of '{path}': {source}")]
    Read {
        path: PathBuf,
        span: Span,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write summary to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// Why a single record was skipped. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("missing delimiter")]
    MissingDelimiter,

    #[error("key is not valid UTF-8")]
    InvalidKey,

    #[error("value '{0}' is not a number")]
    InvalidValue(String),

    #[error("value is not finite")]
    NonFiniteValue,
}

pub type Result<T> = std::result::Result<T, EngineError>;
