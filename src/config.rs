// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Logger configuration

use crate::error::{Error, Result};

/// Host substring of the monitored rate API
pub const DEFAULT_HOST_MARKER: &str = "api.starshipit.com";

/// Carrier path marker (case-sensitive)
pub const DEFAULT_CARRIER_MARKER: &str = "DHL";

/// Source tag attached to every emitted record
pub const DEFAULT_SOURCE: &str = "dhl-api-logger";

/// Timeout recorded when the request arguments carry none
pub const DEFAULT_TIMEOUT_SECS: f64 = 30.0;

/// Configuration for [`ApiLogger`](crate::network::ApiLogger)
///
/// Redaction rules are deliberately absent here: they are fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggerConfig {
    /// Substring identifying the monitored API host
    pub host_marker: String,
    /// Substring identifying the carrier integration
    pub carrier_marker: String,
    /// Source tag passed to the sink
    pub source: String,
    /// Timeout logged when a request does not specify one
    pub default_timeout_secs: f64,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            host_marker: DEFAULT_HOST_MARKER.to_string(),
            carrier_marker: DEFAULT_CARRIER_MARKER.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            default_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LoggerConfig {
    /// Create a new logger config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set host marker
    pub fn host_marker(mut self, marker: impl Into<String>) -> Self {
        self.host_marker = marker.into();
        self
    }

    /// Set carrier marker
    pub fn carrier_marker(mut self, marker: impl Into<String>) -> Self {
        self.carrier_marker = marker.into();
        self
    }

    /// Set source tag
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Set default timeout
    pub fn default_timeout_secs(mut self, secs: f64) -> Self {
        self.default_timeout_secs = secs;
        self
    }

    /// Check the config is usable.
    ///
    /// An empty marker is a substring of every URL and would put all traffic
    /// in scope.
    pub fn validate(&self) -> Result<()> {
        if self.host_marker.is_empty() {
            return Err(Error::config("host marker must not be empty"));
        }
        if self.carrier_marker.is_empty() {
            return Err(Error::config("carrier marker must not be empty"));
        }
        if self.source.trim().is_empty() {
            return Err(Error::config("source tag must not be empty"));
        }
        if !self.default_timeout_secs.is_finite() || self.default_timeout_secs < 0.0 {
            return Err(Error::config(format!(
                "default timeout must be a non-negative number, got {}",
                self.default_timeout_secs
            )));
        }
        Ok(())
    }
}
