// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Structured log records

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::Headers;

/// Deepest array/object nesting accepted when decoding a body
pub const MAX_JSON_DEPTH: usize = 512;

/// Decode JSON text nested at most [`MAX_JSON_DEPTH`] levels deep.
///
/// serde_json's own limit of 128 levels is lifted; the depth is bounded
/// by a scan before decoding instead.
pub fn decode_json(text: &str) -> Option<Value> {
    if nesting_depth(text) > MAX_JSON_DEPTH {
        return None;
    }

    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de).ok()?;
    de.end().ok()?;
    Some(value)
}

/// Maximum bracket nesting outside string literals
fn nesting_depth(text: &str) -> usize {
    let mut depth = 0usize;
    let mut max = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in text.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                max = max.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    max
}

/// Body of a request or response as it is logged.
///
/// JSON bodies are kept decoded so the sink renders them without escaped
/// whitespace; anything else stays verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body {
    /// Text that did not decode to a non-null JSON value
    Raw(String),
    /// Decoded JSON
    Structured(Value),
}

impl Body {
    /// Decode a body if it is JSON, keep it verbatim otherwise.
    ///
    /// A body decoding to JSON `null` is treated as not JSON.
    pub fn from_text(body: &str) -> Self {
        match decode_json(body) {
            Some(value) if !value.is_null() => Body::Structured(value),
            _ => Body::Raw(body.to_string()),
        }
    }

    /// Empty raw body
    pub fn empty() -> Self {
        Body::Raw(String::new())
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Body::Structured(_))
    }

    /// Raw text, if not decoded
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Body::Raw(text) => Some(text),
            Body::Structured(_) => None,
        }
    }

    /// Decoded value, if any
    pub fn as_structured(&self) -> Option<&Value> {
        match self {
            Body::Raw(_) => None,
            Body::Structured(value) => Some(value),
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::empty()
    }
}

/// Logged view of an outbound request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestRecord {
    pub method: String,
    pub url: String,
    pub headers: Headers,
    pub body: Body,
    /// Timeout in seconds
    pub timeout: f64,
    pub timestamp: String,
}

/// Transport error details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

/// Received response details
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseDetails {
    pub code: u16,
    pub message: String,
    pub headers: Headers,
    pub body: Body,
}

/// Either an `error` or a `response` object, never both
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOutcome {
    Error(ErrorDetails),
    Response(ResponseDetails),
}

/// Logged view of a finished call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseRecord {
    pub url: String,
    pub timestamp: String,
    #[serde(flatten)]
    pub outcome: ResponseOutcome,
}

impl ResponseRecord {
    /// Check if the call failed at transport level
    pub fn is_error(&self) -> bool {
        matches!(self.outcome, ResponseOutcome::Error(_))
    }

    pub fn error(&self) -> Option<&ErrorDetails> {
        match &self.outcome {
            ResponseOutcome::Error(details) => Some(details),
            ResponseOutcome::Response(_) => None,
        }
    }

    pub fn response(&self) -> Option<&ResponseDetails> {
        match &self.outcome {
            ResponseOutcome::Error(_) => None,
            ResponseOutcome::Response(details) => Some(details),
        }
    }
}

/// Record handed to the sink
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogRecord {
    Request(RequestRecord),
    Response(ResponseRecord),
}

impl LogRecord {
    /// Kind tag, `request` or `response`
    pub fn kind(&self) -> &'static str {
        match self {
            LogRecord::Request(_) => "request",
            LogRecord::Response(_) => "response",
        }
    }

    pub fn url(&self) -> &str {
        match self {
            LogRecord::Request(r) => &r.url,
            LogRecord::Response(r) => &r.url,
        }
    }

    pub fn timestamp(&self) -> &str {
        match self {
            LogRecord::Request(r) => &r.timestamp,
            LogRecord::Response(r) => &r.timestamp,
        }
    }

    pub fn as_request(&self) -> Option<&RequestRecord> {
        match self {
            LogRecord::Request(r) => Some(r),
            LogRecord::Response(_) => None,
        }
    }

    pub fn as_response(&self) -> Option<&ResponseRecord> {
        match self {
            LogRecord::Request(_) => None,
            LogRecord::Response(r) => Some(r),
        }
    }

    /// Serialize to a JSON value
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl From<RequestRecord> for LogRecord {
    fn from(record: RequestRecord) -> Self {
        LogRecord::Request(record)
    }
}

impl From<ResponseRecord> for LogRecord {
    fn from(record: ResponseRecord) -> Self {
        LogRecord::Response(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_from_json_text() {
        let body = Body::from_text("{\n  \"rate\": 9.99,\n  \"service\": \"express\"\n}");
        assert!(body.is_structured());
        assert_eq!(
            body.as_structured(),
            Some(&json!({"rate": 9.99, "service": "express"}))
        );
    }

    #[test]
    fn test_body_from_plain_text() {
        let body = Body::from_text("not json");
        assert_eq!(body, Body::Raw("not json".to_string()));
        assert_eq!(body.as_raw(), Some("not json"));
    }

    #[test]
    fn test_body_null_and_empty_stay_raw() {
        assert_eq!(Body::from_text("null"), Body::Raw("null".to_string()));
        assert_eq!(Body::from_text(""), Body::empty());
        assert_eq!(Body::default(), Body::empty());
    }

    #[test]
    fn test_body_scalars_and_arrays_decode() {
        assert_eq!(Body::from_text("42"), Body::Structured(json!(42)));
        assert_eq!(Body::from_text("[1,2]"), Body::Structured(json!([1, 2])));
    }

    #[test]
    fn test_body_deep_nesting() {
        let nested = |levels: usize| {
            format!(
                r#"{{"apiKey":"k","nest":{}{}}}"#,
                "[".repeat(levels),
                "]".repeat(levels)
            )
        };

        // Past serde_json's default limit of 128
        assert!(Body::from_text(&nested(200)).is_structured());
        assert!(Body::from_text(&nested(MAX_JSON_DEPTH - 1)).is_structured());
        assert!(!Body::from_text(&nested(MAX_JSON_DEPTH)).is_structured());
    }

    #[test]
    fn test_nesting_depth_ignores_strings() {
        assert_eq!(nesting_depth(r#"{"a":"[[[{"}"#), 1);
        assert_eq!(nesting_depth(r#"["\"]", [1]]"#), 2);
        assert_eq!(nesting_depth("plain"), 0);
    }

    #[test]
    fn test_request_record_serialization() {
        let record = LogRecord::from(RequestRecord {
            method: "POST".to_string(),
            url: "https://api.starshipit.com/v2/DHL/rates".to_string(),
            headers: Headers::new(),
            body: Body::from_text("{\"weight\":2}"),
            timeout: 30.0,
            timestamp: "2026-01-02 03:04:05".to_string(),
        });

        let value = record.to_value().unwrap();
        assert_eq!(value["kind"], "request");
        assert_eq!(value["method"], "POST");
        assert_eq!(value["body"], json!({"weight": 2}));
        assert_eq!(value["timeout"].as_f64(), Some(30.0));
        assert_eq!(value["timestamp"], "2026-01-02 03:04:05");
    }

    #[test]
    fn test_response_record_has_exactly_one_outcome() {
        let failed = LogRecord::from(ResponseRecord {
            url: "u".to_string(),
            timestamp: "t".to_string(),
            outcome: ResponseOutcome::Error(ErrorDetails {
                code: "timeout".to_string(),
                message: "timed out".to_string(),
            }),
        });
        let value = failed.to_value().unwrap();
        assert_eq!(value["kind"], "response");
        assert_eq!(value["error"]["code"], "timeout");
        assert!(value.get("response").is_none());
        assert!(failed.as_response().unwrap().is_error());

        let ok = LogRecord::from(ResponseRecord {
            url: "u".to_string(),
            timestamp: "t".to_string(),
            outcome: ResponseOutcome::Response(ResponseDetails {
                code: 200,
                message: "OK".to_string(),
                headers: Headers::new(),
                body: Body::Raw("plain".to_string()),
            }),
        });
        let value = ok.to_value().unwrap();
        assert_eq!(value["response"]["code"], 200);
        assert_eq!(value["response"]["body"], "plain");
        assert!(value.get("error").is_none());
        assert_eq!(ok.kind(), "response");
        assert_eq!(ok.url(), "u");
        assert_eq!(ok.timestamp(), "t");
    }
}
