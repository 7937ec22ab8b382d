//! Error types and handling infrastructure for CSV to JSON conversion

use anyhow::Error;
use std::path::PathBuf;

/// Core error types for the conversion process
#[derive(Debug, thiserror::Error)]
pub enum ConversionErrorKind {
    #[error("Input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("CSV read error: {message}")]
    Csv {
        message: String,
        line: Option<u64>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("JSON serialization error: {message}")]
    Serialization { message: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ConversionErrorKind {
    pub fn input_not_found(path: PathBuf) -> Self {
        Self::InputNotFound { path }
    }

    pub fn csv(message: String, line: Option<u64>) -> Self {
        Self::Csv { message, line }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn serialization(message: String) -> Self {
        Self::Serialization { message }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("{kind}")]
    Conversion {
        kind: ConversionErrorKind,
        source: Option<anyhow::Error>,
    },

    #[error(transparent)]
    Other(#[from] Error),
}

impl ConversionError {
    pub fn conversion(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind, source: None }
    }

    pub fn conversion_with_source(kind: ConversionErrorKind, source: anyhow::Error) -> Self {
        Self::Conversion {
            kind,
            source: Some(source),
        }
    }

    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::conversion(ConversionErrorKind::input_not_found(path.into()))
    }

    /// I/O failure tied to a specific file
    pub fn io_at(error: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::conversion_with_source(
            ConversionErrorKind::io(format!("{}: {}", path.display(), error), Some(path)),
            error.into(),
        )
    }

    pub fn kind(&self) -> Option<&ConversionErrorKind> {
        match self {
            Self::Conversion { kind, .. } => Some(kind),
            Self::Other(_) => None,
        }
    }

    pub fn is_input_not_found(&self) -> bool {
        matches!(self.kind(), Some(ConversionErrorKind::InputNotFound { .. }))
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Conversion { kind, .. } => match kind {
                ConversionErrorKind::Csv {
                    message,
                    line: Some(line),
                } => {
                    format!("CSV read error on line {}: {}", line, message)
                }
                _ => kind.to_string(),
            },
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
        }
    }
}

impl From<csv::Error> for ConversionError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());
        let message = match error.kind() {
            csv::ErrorKind::Utf8 { err, .. } => {
                format!("invalid UTF-8 in field {}", err.field() + 1)
            }
            csv::ErrorKind::Io(io) => io.to_string(),
            _ => error.to_string(),
        };
        Self::conversion_with_source(ConversionErrorKind::csv(message, line), error.into())
    }
}

impl From<std::io::Error> for ConversionError {
    fn from(error: std::io::Error) -> Self {
        Self::conversion_with_source(
            ConversionErrorKind::io(error.to_string(), None),
            error.into(),
        )
    }
}

impl From<serde_json::Error> for ConversionError {
    fn from(error: serde_json::Error) -> Self {
        Self::conversion_with_source(
            ConversionErrorKind::serialization(error.to_string()),
            error.into(),
        )
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
