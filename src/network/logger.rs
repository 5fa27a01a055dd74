// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Capture and redact pipeline for monitored API traffic

use std::sync::Arc;

use super::classifier::RequestClassifier;
use super::event::{Outcome, Preempt};
use super::hooks::HttpHooks;
use crate::config::LoggerConfig;
use crate::error::Result;
use crate::http::RequestArgs;
use crate::log::{
    Body, Clock, ErrorDetails, LocalClock, LogContext, LogRecord, LogSink, RequestRecord,
    ResponseDetails, ResponseOutcome, ResponseRecord, Severity,
};
use crate::security::redact;

/// Sink message for request records
pub const REQUEST_LABEL: &str = "DHL API Request:";

/// Sink message for response records
pub const RESPONSE_LABEL: &str = "DHL API Response:";

/// Passive observer logging monitored calls to a sink.
///
/// Never alters, blocks or short-circuits the underlying call. Each hook
/// invocation builds one record, redacts it and writes it to the sink;
/// nothing is retained afterwards.
///
/// # Example
///
/// ```rust
/// use dhl_api_logger::http::RequestArgs;
/// use dhl_api_logger::log::MemorySink;
/// use dhl_api_logger::network::{ApiLogger, Preempt};
///
/// let sink = MemorySink::new();
/// let logger = ApiLogger::new(sink.clone());
///
/// let signal = logger.on_before_send(
///     Preempt::Proceed,
///     &RequestArgs::new(),
///     "https://api.starshipit.com/v2/DHL/rates?apiKey=abc123",
/// );
///
/// assert!(signal.is_proceed());
/// assert_eq!(
///     sink.last().unwrap().context.data.url(),
///     "https://api.starshipit.com/v2/DHL/rates?apiKey=***REDACTED***"
/// );
/// ```
#[derive(Clone)]
pub struct ApiLogger {
    classifier: RequestClassifier,
    sink: Arc<dyn LogSink>,
    clock: Arc<dyn Clock>,
    source: String,
    default_timeout_secs: f64,
}

impl ApiLogger {
    /// Create a logger with default config and the local clock
    pub fn new<S: LogSink + 'static>(sink: S) -> Self {
        Self::from_parts(LoggerConfig::default(), Arc::new(sink), Arc::new(LocalClock))
    }

    /// Create a logger with explicit config, sink and clock
    pub fn with_config<S, C>(config: LoggerConfig, sink: S, clock: C) -> Result<Self>
    where
        S: LogSink + 'static,
        C: Clock + 'static,
    {
        config.validate()?;
        Ok(Self::from_parts(config, Arc::new(sink), Arc::new(clock)))
    }

    fn from_parts(config: LoggerConfig, sink: Arc<dyn LogSink>, clock: Arc<dyn Clock>) -> Self {
        Self {
            classifier: RequestClassifier::from_config(&config),
            sink,
            clock,
            source: config.source,
            default_timeout_secs: config.default_timeout_secs,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Pre-send hook: log the request, hand the signal back untouched
    pub fn on_before_send(&self, preempt: Preempt, args: &RequestArgs, url: &str) -> Preempt {
        if !self.classifier.is_monitored(url) {
            return preempt;
        }

        let record = self.request_record(args, url);
        self.emit(Severity::Info, REQUEST_LABEL, record);
        preempt
    }

    /// Post-completion hook: log the response or transport error
    pub fn on_after_complete(
        &self,
        outcome: &Outcome,
        request_type: &str,
        transport: &str,
        _args: &RequestArgs,
        url: &str,
    ) {
        if !self.classifier.is_monitored(url) {
            return;
        }

        tracing::trace!(request_type, transport, "Monitored call completed");
        let severity = if outcome.is_failure() {
            Severity::Error
        } else {
            Severity::Info
        };
        let record = self.response_record(outcome, url);
        self.emit(severity, RESPONSE_LABEL, record);
    }

    /// Build the unredacted request record
    pub fn request_record(&self, args: &RequestArgs, url: &str) -> LogRecord {
        LogRecord::Request(RequestRecord {
            method: args.method_or_default().to_string(),
            url: url.to_string(),
            headers: args.headers.clone().unwrap_or_default(),
            body: args
                .body
                .as_deref()
                .map(Body::from_text)
                .unwrap_or_default(),
            timeout: args.timeout.unwrap_or(self.default_timeout_secs),
            timestamp: self.clock.now(),
        })
    }

    /// Build the unredacted response record
    pub fn response_record(&self, outcome: &Outcome, url: &str) -> LogRecord {
        let outcome = match outcome {
            Outcome::Failure(err) => ResponseOutcome::Error(ErrorDetails {
                code: err.code.clone(),
                message: err.message.clone(),
            }),
            Outcome::Success(response) => ResponseOutcome::Response(ResponseDetails {
                code: response.code(),
                message: response.message().to_string(),
                headers: response.flat_headers(),
                body: Body::from_text(&response.text_lossy()),
            }),
        };

        LogRecord::Response(ResponseRecord {
            url: url.to_string(),
            timestamp: self.clock.now(),
            outcome,
        })
    }

    /// Redact and write a record; sink failures are reported, never raised
    fn emit(&self, severity: Severity, label: &str, record: LogRecord) {
        let context = LogContext {
            data: redact(record),
            source: self.source.clone(),
        };
        let url = context.data.url().to_string();

        if let Err(e) = self.sink.log(severity, label, context) {
            tracing::warn!(url = %url, error = %e, "Failed to write API log entry");
        }
    }
}

impl HttpHooks for ApiLogger {
    fn pre_send(&self, preempt: Preempt, args: &RequestArgs, url: &str) -> Preempt {
        self.on_before_send(preempt, args, url)
    }

    fn after_complete(
        &self,
        outcome: &Outcome,
        request_type: &str,
        transport: &str,
        args: &RequestArgs,
        url: &str,
    ) {
        self.on_after_complete(outcome, request_type, transport, args, url)
    }

    fn priority(&self) -> i32 {
        -100 // Low priority - observe after other hooks have run
    }
}

impl std::fmt::Debug for ApiLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiLogger")
            .field("classifier", &self.classifier)
            .field("source", &self.source)
            .field("default_timeout_secs", &self.default_timeout_secs)
            .finish()
    }
}
