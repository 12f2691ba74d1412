//! Error types for email triage

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a generative backend call
#[derive(Error, Debug)]
pub enum BackendError {
    /// Transport-level failure (connect, timeout, TLS, body decode)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("backend returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The backend answered but produced no text
    #[error("backend response contained no text")]
    EmptyResponse,

    /// Any other failure reported by a backend implementation
    #[error("{0}")]
    Other(String),
}

/// Underlying reason an assistant operation failed
#[derive(Error, Debug)]
pub enum FailureCause {
    /// Nothing but whitespace was supplied
    #[error("email content is empty")]
    EmptyContent,

    /// The backend call itself failed
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Backend text was not valid JSON of the expected shape
    #[error("invalid response from backend: {0}")]
    ResponseShape(#[from] serde_json::Error),

    /// Backend suggested an address outside the recipient set
    #[error("suggested recipient '{0}' is not a known recipient")]
    UnknownRecipient(String),
}

/// Failure of one of the classification client operations
#[derive(Error, Debug)]
pub enum AssistError {
    #[error("Failed to classify email: {0}")]
    Classification(#[source] FailureCause),

    #[error("Failed to generate response draft: {0}")]
    DraftGeneration(#[source] FailureCause),

    #[error("Failed to extract action items: {0}")]
    ActionExtraction(#[source] FailureCause),
}

impl AssistError {
    /// The cause shared by every variant
    #[must_use]
    pub const fn cause(&self) -> &FailureCause {
        match self {
            Self::Classification(c) | Self::DraftGeneration(c) | Self::ActionExtraction(c) => c,
        }
    }
}

/// Errors from the history store
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("I/O error on history file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode history: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors reading the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Result type for classification client operations
pub type Result<T> = std::result::Result<T, AssistError>;
