// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Decides which outbound calls are in scope

use crate::config::{LoggerConfig, DEFAULT_CARRIER_MARKER, DEFAULT_HOST_MARKER};

/// URL classifier for the monitored carrier API.
///
/// Both checks are plain case-sensitive substring containment on the raw
/// URL. No URL parsing happens, so unrelated URLs containing both markers
/// are accepted as monitored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestClassifier {
    host_marker: String,
    carrier_marker: String,
}

impl RequestClassifier {
    /// Create a classifier with explicit markers
    pub fn new(host_marker: impl Into<String>, carrier_marker: impl Into<String>) -> Self {
        Self {
            host_marker: host_marker.into(),
            carrier_marker: carrier_marker.into(),
        }
    }

    /// Create a classifier from logger config
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(config.host_marker.clone(), config.carrier_marker.clone())
    }

    /// Check if a URL belongs to the monitored integration
    pub fn is_monitored(&self, url: &str) -> bool {
        url.contains(&self.host_marker) && url.contains(&self.carrier_marker)
    }

    pub fn host_marker(&self) -> &str {
        &self.host_marker
    }

    pub fn carrier_marker(&self) -> &str {
        &self.carrier_marker
    }
}

impl Default for RequestClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_HOST_MARKER, DEFAULT_CARRIER_MARKER)
    }
}

/// Classify with the default markers
pub fn is_monitored(url: &str) -> bool {
    RequestClassifier::default().is_monitored(url)
}
