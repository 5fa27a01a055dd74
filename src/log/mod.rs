// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Log records, sinks and timestamps

mod clock;
mod record;
mod sink;

pub use clock::{Clock, FixedClock, LocalClock, TIMESTAMP_FORMAT};
pub use record::{
    decode_json, Body, ErrorDetails, LogRecord, RequestRecord, ResponseDetails, ResponseOutcome,
    ResponseRecord, MAX_JSON_DEPTH,
};
pub use sink::{LogContext, LogSink, MemorySink, Severity, SinkEntry, TracingSink};
