//! Parse error types.

use parse_japanese_text::TextError;
use thiserror::Error;

/// Errors that can occur while building or running a parser.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source is not valid UTF-8 text.
    #[error("Invalid source: {message}")]
    InvalidSource {
        /// Error message.
        message: String,
        /// Byte offset where the error occurred.
        offset: Option<usize>,
    },

    /// The parser options are invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The dictionary could not be loaded, or tokenization failed.
    #[error(transparent)]
    Text(#[from] TextError),

    /// Reading the source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Creates a new invalid source error.
    pub fn invalid_source(message: impl Into<String>) -> Self {
        Self::InvalidSource {
            message: message.into(),
            offset: None,
        }
    }

    /// Creates a new invalid source error with offset.
    pub fn invalid_source_at(message: impl Into<String>, offset: usize) -> Self {
        Self::InvalidSource {
            message: message.into(),
            offset: Some(offset),
        }
    }

    /// Creates a new configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
