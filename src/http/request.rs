// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Per-call request arguments

use serde::Serialize;

use super::{header_value, Headers};
use crate::error::Result;

/// Arguments of one outbound call.
///
/// Every field is optional, as the host receives them. Consumers apply
/// their own defaults for missing values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestArgs {
    /// Request method
    pub method: Option<String>,
    /// Request headers
    pub headers: Option<Headers>,
    /// Request body, possibly JSON-encoded
    pub body: Option<String>,
    /// Timeout in seconds
    pub timeout: Option<f64>,
}

impl RequestArgs {
    /// Create empty request arguments
    pub fn new() -> Self {
        Self::default()
    }

    /// Create arguments for a GET request
    pub fn get() -> Self {
        Self::new().method("GET")
    }

    /// Create arguments for a POST request
    pub fn post() -> Self {
        Self::new().method("POST")
    }

    /// Set the method
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Set a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(name.into(), value.into());
        self
    }

    /// Set the request body
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set a JSON body
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self> {
        self.body = Some(serde_json::to_string(data)?);
        Ok(self.header("Content-Type", "application/json"))
    }

    /// Set timeout in seconds
    pub fn timeout(mut self, secs: f64) -> Self {
        self.timeout = Some(secs);
        self
    }

    /// Method, falling back to GET
    pub fn method_or_default(&self) -> &str {
        self.method.as_deref().unwrap_or("GET")
    }

    /// Case-insensitive header lookup
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.as_ref().and_then(|h| header_value(h, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_args_default_to_get() {
        let args = RequestArgs::new();
        assert_eq!(args.method_or_default(), "GET");
        assert!(args.headers.is_none());
        assert!(args.body.is_none());
        assert!(args.timeout.is_none());
    }

    #[test]
    fn test_builder() {
        let args = RequestArgs::post()
            .header("X-Api-Key", "secret")
            .body("payload")
            .timeout(12.5);

        assert_eq!(args.method_or_default(), "POST");
        assert_eq!(args.header_value("x-api-key"), Some("secret"));
        assert_eq!(args.body.as_deref(), Some("payload"));
        assert_eq!(args.timeout, Some(12.5));
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let args = RequestArgs::post()
            .json(&json!({"apiKey": "k", "weight": 2}))
            .unwrap();

        assert_eq!(args.header_value("content-type"), Some("application/json"));
        let decoded: serde_json::Value =
            serde_json::from_str(args.body.as_deref().unwrap()).unwrap();
        assert_eq!(decoded["weight"], 2);
    }
}
