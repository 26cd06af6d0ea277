//! Error types for ner-annotate.

use thiserror::Error;

/// Result type for annotation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for annotation operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Startup configuration problem (paths, extensions, label sets).
    ///
    /// These are fatal: the session never starts.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Classifier backend could not be loaded.
    #[error("Model initialization failed: {0}")]
    ModelInit(String),

    /// Classifier backend failed at runtime.
    #[error("Classification failed: {0}")]
    Classify(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create a model initialization error.
    pub fn model_init(msg: impl Into<String>) -> Self {
        Error::ModelInit(msg.into())
    }

    /// Create a classification error.
    pub fn classify(msg: impl Into<String>) -> Self {
        Error::Classify(msg.into())
    }
}
