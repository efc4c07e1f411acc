//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The default logger was assigned an absent logger
    #[error("default logger cannot be set to nil")]
    NilLogger,

    /// The default logger was assigned more than once
    #[error("default logger set more than once")]
    DefaultAlreadySet,

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// A log line did not start with the fixed-width timestamp
    #[error("log entry {line:?}: invalid timestamp: {message}")]
    InvalidTimestamp { line: String, message: String },

    /// A log line had no `": "` between location and message
    #[error("log entry {line:?}: missing file:line/message separator")]
    MissingSeparator { line: String },

    /// A log line had a location whose line number is not an integer
    #[error("log entry {line:?}: invalid line number: {message}")]
    InvalidLineNumber { line: String, message: String },

    /// Level parse error
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Flags parse error
    #[error("Invalid flag name: '{0}'")]
    InvalidFlag(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn invalid_timestamp(line: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidTimestamp {
            line: line.into(),
            message: message.into(),
        }
    }

    pub fn missing_separator(line: impl Into<String>) -> Self {
        LoggerError::MissingSeparator { line: line.into() }
    }

    pub fn invalid_line_number(line: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidLineNumber {
            line: line.into(),
            message: message.into(),
        }
    }
}
