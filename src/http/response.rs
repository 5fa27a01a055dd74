// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;

use super::{flatten_headers, Headers};

/// Completed HTTP response as handed to post-completion hooks
#[derive(Debug, Clone, PartialEq)]
pub struct HostResponse {
    /// Response status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Bytes,
}

impl HostResponse {
    /// Create a new response
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Create a response with no headers
    pub fn with_body(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self::new(status, HeaderMap::new(), body)
    }

    /// Add a header, ignoring names or values that are not valid
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_ref()),
            HeaderValue::try_from(value.as_ref()),
        ) {
            self.headers.append(name, value);
        }
        self
    }

    /// Get status code as u16
    pub fn code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Reason phrase, empty for unknown codes
    pub fn message(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("")
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Get body as text, lossy conversion
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Headers flattened to one value per name
    pub fn flat_headers(&self) -> Headers {
        flatten_headers(&self.headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_status() {
        let resp = HostResponse::with_body(StatusCode::OK, "{}");
        assert!(resp.is_success());
        assert_eq!(resp.code(), 200);
        assert_eq!(resp.message(), "OK");
    }

    #[test]
    fn test_unknown_status_has_empty_message() {
        let status = StatusCode::from_u16(599).unwrap();
        let resp = HostResponse::with_body(status, "");
        assert_eq!(resp.message(), "");
        assert!(!resp.is_success());
    }

    #[test]
    fn test_response_headers() {
        let resp = HostResponse::with_body(StatusCode::OK, "Hello")
            .header("Content-Type", "text/plain")
            .header("bad header", "ignored");

        assert_eq!(resp.text_lossy(), "Hello");
        let flat = resp.flat_headers();
        assert_eq!(flat.len(), 1);
        assert_eq!(flat["content-type"], "text/plain");
    }
}
