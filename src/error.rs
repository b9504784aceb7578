//! Error types for tomatick.

use thiserror::Error;

/// Errors that can occur while running the timers.
#[derive(Debug, Error)]
pub enum TomatickError {
    /// Configuration could not be resolved, read, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or stdout failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// YAML serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The terminal could not be set up, drawn, or polled.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A desktop notification could not be shown.
    #[error("Notification error: {0}")]
    Notification(String),

    /// User input (arguments, durations) was rejected.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl TomatickError {
    /// Wrap a terminal backend failure with a short description of what failed.
    pub fn terminal(context: &str, err: impl std::fmt::Display) -> Self {
        Self::Terminal(format!("{context}: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_error_message() {
        let err = TomatickError::terminal("Failed to draw", "broken pipe");
        assert_eq!(err.to_string(), "Terminal error: Failed to draw: broken pipe");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TomatickError = io.into();
        assert!(matches!(err, TomatickError::Io(_)));
    }
}
