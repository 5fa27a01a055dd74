// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the DHL API logger
//!
//! The capture pipeline itself never surfaces these to the host HTTP layer.
//! They are returned from setup paths (client construction, config
//! validation) and from sinks, where the pipeline catches and reports them.

use thiserror::Error;

/// Result type alias for logger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the logger
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP client construction failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Record could not be serialized for the sink
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this error came from configuration
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = Error::config("host marker must not be empty");
        assert!(err.is_config());
        assert_eq!(
            err.to_string(),
            "Configuration error: host marker must not be empty"
        );
    }

    #[test]
    fn test_serialization_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(!err.is_config());
    }
}
