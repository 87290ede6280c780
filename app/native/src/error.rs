//! Error types for Recenter.
//!
//! This module provides the unified error type returned by the CLI and by the
//! desktop shell's setup. Snap attempts never produce one of these: they degrade
//! to doing nothing and log why.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur during application execution.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum RecenterError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Registering or unregistering the login item failed.
    #[error("Login item error: {0}")]
    LoginItemError(String),
    /// A platform API call failed.
    #[error("Platform error: {0}")]
    PlatformError(String),
    /// The desktop app was started on a platform other than macOS.
    #[error("Recenter's desktop app only runs on macOS")]
    Unsupported,
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<serde_json::Error> for RecenterError {
    fn from(err: serde_json::Error) -> Self { Self::CommandError(err.to_string()) }
}

impl From<ConfigError> for RecenterError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_from_conversion() {
        let err: RecenterError = ConfigError::NotFound.into();
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("No configuration file found"));
    }

    #[test]
    fn test_login_item_error_display() {
        let err = RecenterError::LoginItemError("Operation not permitted".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Login item error"));
        assert!(msg.contains("Operation not permitted"));
    }

    #[test]
    fn test_unsupported_display() {
        assert!(RecenterError::Unsupported.to_string().contains("macOS"));
    }

    #[test]
    fn test_command_error_display() {
        let err = RecenterError::CommandError("Generic failure".to_string());
        assert_eq!(err.to_string(), "Generic failure");
    }

    #[test]
    fn test_json_error_becomes_command_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RecenterError = json_err.into();
        assert!(matches!(err, RecenterError::CommandError(_)));
    }

    #[test]
    fn test_error_serializes_with_kind() {
        let err = RecenterError::PlatformError("NSScreen unavailable".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("PlatformError"));
        assert!(json.contains("NSScreen unavailable"));
    }
}
