// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Host HTTP layer
//!
//! A reqwest-backed client exposing the two extension points the logger
//! attaches to: a pre-send hook and a post-completion hook.

mod client;
mod request;
mod response;

use std::collections::BTreeMap;

use reqwest::header::HeaderMap;

pub use client::{HttpClient, HttpClientConfig};
pub use request::RequestArgs;
pub use response::HostResponse;

/// Flat header mapping as seen by hooks and log records
pub type Headers = BTreeMap<String, String>;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("dhl-api-logger/", env!("CARGO_PKG_VERSION"));

/// Transport name reported to post-completion hooks
pub const TRANSPORT_NAME: &str = "reqwest";

/// Request type reported to post-completion hooks
pub const REQUEST_TYPE: &str = "response";

/// Case-insensitive header lookup
pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Flatten a multi-valued header map into one value per name.
///
/// Repeated headers are joined with `", "`. Values that are not valid
/// visible ASCII are converted lossily.
pub fn flatten_headers(map: &HeaderMap) -> Headers {
    let mut flat = Headers::new();
    for name in map.keys() {
        let joined = map
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        flat.insert(name.as_str().to_string(), joined);
    }
    flat
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_header_value_case_insensitive() {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        assert_eq!(header_value(&headers, "content-type"), Some("application/json"));
        assert_eq!(header_value(&headers, "CONTENT-TYPE"), Some("application/json"));
        assert_eq!(header_value(&headers, "accept"), None);
    }

    #[test]
    fn test_flatten_headers_joins_repeated() {
        let mut map = HeaderMap::new();
        map.append("set-cookie", HeaderValue::from_static("a=1"));
        map.append("set-cookie", HeaderValue::from_static("b=2"));
        map.insert("content-type", HeaderValue::from_static("text/plain"));

        let flat = flatten_headers(&map);
        assert_eq!(flat.len(), 2);
        assert_eq!(flat["set-cookie"], "a=1, b=2");
        assert_eq!(flat["content-type"], "text/plain");
    }
}
