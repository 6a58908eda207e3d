//! Error types for the argswap library.
//!
//! The checking engine itself is pure computation, so most of these variants
//! come from the outer layers: configuration loading, corpus parsing and
//! report serialization.

use std::io;

use thiserror::Error;

/// Main result type for argswap operations.
pub type Result<T> = std::result::Result<T, ArgswapError>;

/// Error type for all argswap operations.
#[derive(Error, Debug)]
pub enum ArgswapError {
    /// I/O related errors (config files, corpora)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Swap margin outside the representable scoring range
    #[error("Invalid threshold {value}: margin must be a finite value in (0.0, 2.0]")]
    InvalidThreshold {
        /// Rejected margin
        value: f64,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data type being serialized
        data_type: Option<String>,
        /// 1-based line of the corpus document that failed, if any
        line: Option<usize>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Error description
        message: String,
        /// Additional context
        context: Option<String>,
    },
}

impl ArgswapError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new invalid threshold error
    pub fn invalid_threshold(value: f64) -> Self {
        Self::InvalidThreshold { value }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new validation error naming the offending field
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a JSON error for a specific corpus line
    pub fn corpus_line(line: usize, err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("Malformed corpus document on line {line}: {err}"),
            data_type: Some("JSON".to_string()),
            line: Some(line),
            source: Some(Box::new(err)),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            context: None,
        }
    }

    /// Add context to an existing error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        if let Self::Internal { context: ctx, .. } = &mut self {
            *ctx = Some(context.into());
        }
        self
    }
}

impl From<io::Error> for ArgswapError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for ArgswapError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            data_type: Some("JSON".to_string()),
            line: None,
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for ArgswapError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            data_type: Some("YAML".to_string()),
            line: None,
            source: Some(Box::new(err)),
        }
    }
}
