//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// A remote call to the launch data service failed.
///
/// The message is whatever the backend (or the HTTP transport) reported and is
/// shown to the user verbatim, so `Display` prints it without decoration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Domain Value Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid page size: {value} (expected 30, 50 or 100)")]
    InvalidPageSize { value: u32 },

    #[error("Invalid route: {path}")]
    InvalidRoute { path: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration in {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn invalid_route(path: impl Into<String>) -> Self {
        Self::InvalidRoute { path: path.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_displays_message_verbatim() {
        let err = TransportError::new("Things went wrong doing blah blah blah");
        assert_eq!(err.to_string(), "Things went wrong doing blah blah blah");
        assert_eq!(err.message(), "Things went wrong doing blah blah blah");
    }

    #[test]
    fn test_error_display_messages() {
        let err = Error::InvalidPageSize { value: 40 };
        assert!(err.to_string().contains("40"));

        let err = Error::invalid_route("/nope");
        assert_eq!(err.to_string(), "Invalid route: /nope");

        let err = Error::channel_send("channel closed");
        assert_eq!(err.to_string(), "Channel send error: channel closed");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_config_invalid_mentions_path() {
        let err = Error::config_invalid("/tmp/launchdeck/config.toml", "expected integer");
        assert!(err.to_string().contains("/tmp/launchdeck/config.toml"));
        assert!(err.to_string().contains("expected integer"));
    }
}
