// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Credential redaction for log records
//!
//! The rule set is fixed:
//! - `apiKey=<value>` in the URL
//! - header values whose name contains `authorization` or `api-key`,
//!   ignoring case
//! - a top-level `apiKey` field of a JSON object body, on the request
//!   and on the response
//! - `apiKey=<value>` in a transport error message
//!
//! Nothing else is touched. Applying [`redact`] twice gives the same record.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::http::Headers;
use crate::log::{decode_json, Body, LogRecord, ResponseOutcome};

/// Replacement for every detected credential
pub const MASK: &str = "***REDACTED***";

/// Body field holding the API key
pub const API_KEY_FIELD: &str = "apiKey";

/// Header name fragments that mark a credential header (lowercase)
pub const SENSITIVE_HEADER_PATTERNS: &[&str] = &["authorization", "api-key"];

lazy_static! {
    static ref API_KEY_PARAM: Regex =
        Regex::new(r"apiKey=[^&]+").expect("apiKey pattern is valid");
}

/// Mask every credential in a record
pub fn redact(mut record: LogRecord) -> LogRecord {
    redact_in_place(&mut record);
    record
}

/// Mask every credential in a record without moving it
pub fn redact_in_place(record: &mut LogRecord) {
    match record {
        LogRecord::Request(request) => {
            mask_url(&mut request.url);
            redact_headers(&mut request.headers);
            redact_body(&mut request.body);
        }
        LogRecord::Response(response) => {
            mask_url(&mut response.url);
            match &mut response.outcome {
                ResponseOutcome::Response(details) => redact_body(&mut details.body),
                ResponseOutcome::Error(details) => mask_url(&mut details.message),
            }
        }
    }
}

/// Mask the `apiKey` query value in a raw URL
pub fn redact_url(url: &str) -> Cow<'_, str> {
    API_KEY_PARAM.replace_all(url, format!("{API_KEY_FIELD}={MASK}").as_str())
}

fn mask_url(url: &mut String) {
    if API_KEY_PARAM.is_match(url) {
        *url = redact_url(url).into_owned();
    }
}

/// Check if a header name marks a credential
pub fn is_sensitive_header(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    SENSITIVE_HEADER_PATTERNS
        .iter()
        .any(|pattern| lower.contains(pattern))
}

/// Mask values of credential headers, keeping names as they are
pub fn redact_headers(headers: &mut Headers) {
    for (name, value) in headers.iter_mut() {
        if is_sensitive_header(name) {
            *value = MASK.to_string();
        }
    }
}

/// Mask the `apiKey` field of a body.
///
/// A raw body that decodes to an object with `apiKey` is replaced by the
/// decoded, masked form. Raw text that is not such an object is left alone.
pub fn redact_body(body: &mut Body) {
    match body {
        Body::Structured(value) => {
            mask_api_key(value);
        }
        Body::Raw(text) => {
            let Some(mut value) = decode_json(text) else {
                return;
            };
            if mask_api_key(&mut value) {
                *body = Body::Structured(value);
            }
        }
    }
}

/// Mask a non-null top-level `apiKey`, returning whether it was present
fn mask_api_key(value: &mut Value) -> bool {
    match value
        .as_object_mut()
        .and_then(|map| map.get_mut(API_KEY_FIELD))
    {
        Some(field) if !field.is_null() => {
            *field = Value::String(MASK.to_string());
            true
        }
        _ => false,
    }
}
