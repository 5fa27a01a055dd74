// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Credential protection for logged traffic

mod redaction;

pub use redaction::{
    is_sensitive_header, redact, redact_body, redact_headers, redact_in_place, redact_url,
    API_KEY_FIELD, MASK, SENSITIVE_HEADER_PATTERNS,
};
