// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # DHL API Logger
//!
//! Captures outbound calls to the Starshipit DHL rate API, redacts
//! credentials and hands structured request/response records to a log sink.
//!
//! ## Features
//!
//! - Classification: substring match on the API host and carrier marker
//! - Request capture: method, headers, body, timeout
//! - Response capture: status, headers, body, or transport error
//! - Redaction: `apiKey` in URLs and JSON bodies, credential headers
//! - Pluggable sinks: `tracing` output or in-memory capture
//! - Host client: reqwest-backed client with pre-send and post-completion hooks
//!
//! ## Example
//!
//! ```rust,no_run
//! use dhl_api_logger::{ApiLogger, HttpClient, TracingSink};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::new()?.with_hooks(ApiLogger::new(TracingSink));
//!
//!     let outcome = client
//!         .get("https://api.starshipit.com/api/rates/DHL?apiKey=secret")
//!         .await;
//!
//!     if let Some(response) = outcome.response() {
//!         println!("Status: {}", response.status);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod log;
pub mod network;
pub mod security;

// Re-exports for convenience

// Config
pub use config::LoggerConfig;

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{Headers, HostResponse, HttpClient, HttpClientConfig, RequestArgs};

// Logging
pub use log::{Body, Clock, LocalClock, LogRecord, LogSink, MemorySink, Severity, TracingSink};

// Network
pub use network::{is_monitored, ApiLogger, HookChain, HttpHooks, Outcome, Preempt};
pub use network::{RequestClassifier, TransportError};

// Security
pub use security::{redact, redact_url, MASK};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
