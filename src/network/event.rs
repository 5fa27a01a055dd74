// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Call outcome and pre-send signal types

use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http::HostResponse;

/// Transport-level failure of an outbound call
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct TransportError {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl TransportError {
    /// Request timed out
    pub const TIMEOUT: &'static str = "timeout";
    /// Connection could not be established
    pub const CONNECT: &'static str = "connect";
    /// URL or method could not be parsed
    pub const INVALID_URL: &'static str = "invalid_url";
    /// Any other failure
    pub const REQUEST_FAILED: &'static str = "http_request_failed";

    /// Create a new transport error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Classify a reqwest error.
    ///
    /// The request URL is dropped from the message; it may carry credentials.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        let code = if err.is_timeout() {
            Self::TIMEOUT
        } else if err.is_connect() {
            Self::CONNECT
        } else if err.is_builder() {
            Self::INVALID_URL
        } else {
            Self::REQUEST_FAILED
        };
        let err = err.without_url();

        let mut message = err.to_string();
        let mut cause = err.source();
        while let Some(inner) = cause {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            cause = inner.source();
        }

        Self::new(code, message)
    }
}

/// Terminal result of an outbound call
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A response was received, whatever its status
    Success(HostResponse),
    /// The call failed before a response arrived
    Failure(TransportError),
}

impl Outcome {
    /// Check if the call failed at transport level
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Response, if any
    pub fn response(&self) -> Option<&HostResponse> {
        match self {
            Outcome::Success(response) => Some(response),
            Outcome::Failure(_) => None,
        }
    }

    /// Transport error, if any
    pub fn error(&self) -> Option<&TransportError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(err) => Some(err),
        }
    }
}

impl From<TransportError> for Outcome {
    fn from(err: TransportError) -> Self {
        Outcome::Failure(err)
    }
}

impl From<HostResponse> for Outcome {
    fn from(response: HostResponse) -> Self {
        Outcome::Success(response)
    }
}

/// Signal threaded through pre-send hooks
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Preempt {
    /// Send the request normally
    #[default]
    Proceed,
    /// Skip the network and return this response
    Respond(HostResponse),
    /// Skip the network and fail with this error
    Fail(TransportError),
}

impl Preempt {
    /// Check if the request goes out normally
    pub fn is_proceed(&self) -> bool {
        matches!(self, Preempt::Proceed)
    }

    /// Outcome to hand back when a hook short-circuited the call
    pub fn into_outcome(self) -> Option<Outcome> {
        match self {
            Preempt::Proceed => None,
            Preempt::Respond(response) => Some(Outcome::Success(response)),
            Preempt::Fail(err) => Some(Outcome::Failure(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::new("timeout", "operation timed out");
        assert_eq!(err.to_string(), "timeout: operation timed out");
    }

    #[test]
    fn test_outcome_accessors() {
        let ok: Outcome = HostResponse::with_body(StatusCode::OK, "").into();
        assert!(!ok.is_failure());
        assert_eq!(ok.response().map(|r| r.code()), Some(200));
        assert!(ok.error().is_none());

        let failed: Outcome = TransportError::new("connect", "refused").into();
        assert!(failed.is_failure());
        assert!(failed.response().is_none());
        assert_eq!(failed.error().map(|e| e.code.as_str()), Some("connect"));
    }

    #[test]
    fn test_preempt_into_outcome() {
        assert!(Preempt::default().is_proceed());
        assert_eq!(Preempt::Proceed.into_outcome(), None);

        let fail = Preempt::Fail(TransportError::new("blocked", "by policy"));
        assert!(fail.into_outcome().unwrap().is_failure());

        let mocked = Preempt::Respond(HostResponse::with_body(StatusCode::ACCEPTED, ""));
        assert_eq!(mocked.into_outcome().unwrap().response().unwrap().code(), 202);
    }
}
