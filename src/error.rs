//! Error handling module for slidedeck
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Navigation and slide-set construction never fail; these errors cover the
//! edges of the system (catalog ingestion, configuration, the terminal).

use thiserror::Error;

/// Main error type for slidedeck
#[derive(Error, Debug)]
pub enum DeckError {
    /// Catalog validation failures, one entry per offending record
    #[error("Validation error: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Configuration errors (CLI, environment, settings file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for slidedeck operations
pub type Result<T> = std::result::Result<T, DeckError>;

impl DeckError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DeckError::config("start slide out of range");
        assert_eq!(err.to_string(), "Configuration error: start slide out of range");

        let err = DeckError::terminal("raw mode unavailable");
        assert_eq!(err.to_string(), "Terminal error: raw mode unavailable");
    }

    #[test]
    fn test_validation_joins_issues() {
        let err = DeckError::Validation(vec![
            "record 3: empty title".to_string(),
            "record 9: duplicate id".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation error: record 3: empty title; record 9: duplicate id"
        );
    }
}
