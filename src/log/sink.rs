// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Log sinks
//!
//! A sink is the durable destination for records. Storage, rotation and
//! viewing are the sink's business; the logger only writes one entry per
//! hook invocation.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use super::record::LogRecord;
use crate::error::Result;

/// Severity of a sink entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Context passed along with each message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogContext {
    /// Redacted record
    pub data: LogRecord,
    /// Tag identifying the emitter
    pub source: String,
}

/// Structured log destination
pub trait LogSink: Send + Sync {
    fn log(&self, severity: Severity, message: &str, context: LogContext) -> Result<()>;
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn log(&self, severity: Severity, message: &str, context: LogContext) -> Result<()> {
        (**self).log(severity, message, context)
    }
}

/// Forwards entries to `tracing`, with the record rendered as JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, severity: Severity, message: &str, context: LogContext) -> Result<()> {
        let data = serde_json::to_string(&context.data)?;
        match severity {
            Severity::Info => tracing::info!(
                source = %context.source,
                kind = context.data.kind(),
                data = %data,
                "{}",
                message
            ),
            Severity::Error => tracing::error!(
                source = %context.source,
                kind = context.data.kind(),
                data = %data,
                "{}",
                message
            ),
        }
        Ok(())
    }
}

/// Entry captured by [`MemorySink`]
#[derive(Debug, Clone, PartialEq)]
pub struct SinkEntry {
    pub severity: Severity,
    pub message: String,
    pub context: LogContext,
}

/// In-memory sink, mainly for tests
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<RwLock<Vec<SinkEntry>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of captured entries
    pub fn entries(&self) -> Vec<SinkEntry> {
        self.entries.read().clone()
    }

    /// Last captured entry
    pub fn last(&self) -> Option<SinkEntry> {
        self.entries.read().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl LogSink for MemorySink {
    fn log(&self, severity: Severity, message: &str, context: LogContext) -> Result<()> {
        self.entries.write().push(SinkEntry {
            severity,
            message: message.to_string(),
            context,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::record::{ErrorDetails, ResponseOutcome, ResponseRecord};

    fn context() -> LogContext {
        LogContext {
            data: LogRecord::Response(ResponseRecord {
                url: "https://api.starshipit.com/v2/DHL/rates".to_string(),
                timestamp: "2026-01-01 00:00:00".to_string(),
                outcome: ResponseOutcome::Error(ErrorDetails {
                    code: "timeout".to_string(),
                    message: "timed out".to_string(),
                }),
            }),
            source: "test".to_string(),
        }
    }

    #[test]
    fn test_memory_sink_captures() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.log(Severity::Error, "DHL API Response:", context()).unwrap();

        assert_eq!(sink.len(), 1);
        let entry = sink.last().unwrap();
        assert_eq!(entry.severity, Severity::Error);
        assert_eq!(entry.message, "DHL API Response:");
        assert_eq!(entry.context.source, "test");

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_memory_sink_clones_share_entries() {
        let sink = MemorySink::new();
        let shared = Arc::new(sink.clone());
        shared.log(Severity::Info, "m", context()).unwrap();
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_tracing_sink_accepts_records() {
        assert!(TracingSink.log(Severity::Info, "m", context()).is_ok());
        assert!(TracingSink.log(Severity::Error, "m", context()).is_ok());
    }

    #[test]
    fn test_context_serialization() {
        let value = serde_json::to_value(context()).unwrap();
        assert_eq!(value["source"], "test");
        assert_eq!(value["data"]["error"]["code"], "timeout");
        assert_eq!(serde_json::to_value(Severity::Info).unwrap(), "info");
        assert_eq!(Severity::Error.to_string(), "error");
    }
}
