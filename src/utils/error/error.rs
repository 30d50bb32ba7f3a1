//! Error handling for the reuse layer
//!
//! This module defines all error types surfaced by the pool, the pattern cache
//! and configuration loading.

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, ReuseError>;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum ReuseError {
    /// A constructor or parser received an argument outside its domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The pattern compiler rejected the pattern text
    #[error("Invalid pattern '{pattern}': {message}")]
    PatternSyntax { pattern: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ReuseError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a pattern syntax error
    pub fn pattern_syntax(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PatternSyntax {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error was raised by a rejected pattern
    pub fn is_pattern_syntax(&self) -> bool {
        matches!(self, Self::PatternSyntax { .. })
    }
}

impl From<regex::Error> for ReuseError {
    fn from(err: regex::Error) -> Self {
        match err {
            regex::Error::Syntax(message) => Self::PatternSyntax {
                pattern: String::new(),
                message,
            },
            regex::Error::CompiledTooBig(limit) => Self::PatternSyntax {
                pattern: String::new(),
                message: format!("compiled pattern exceeds size limit of {} bytes", limit),
            },
            other => Self::PatternSyntax {
                pattern: String::new(),
                message: other.to_string(),
            },
        }
    }
}
