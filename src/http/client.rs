// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client implementation

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Client, Method};
use url::Url;

use super::request::RequestArgs;
use super::response::HostResponse;
use super::{DEFAULT_USER_AGENT, REQUEST_TYPE, TRANSPORT_NAME};
use crate::config::{LoggerConfig, DEFAULT_TIMEOUT_SECS};
use crate::error::{Error, Result};
use crate::network::{HookChain, HttpHooks, Outcome, TransportError};
use crate::security::redact_url;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Timeout applied when request arguments carry none.
    ///
    /// Loggers report their own default; build them from
    /// [`HttpClientConfig::logger_config`] to keep both in step.
    pub timeout: Duration,
    /// Accept invalid certificates (dangerous!)
    pub accept_invalid_certs: bool,
    /// Proxy URL
    pub proxy: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
            accept_invalid_certs: false,
            proxy: None,
        }
    }
}

impl HttpClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set default timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set proxy
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Logger config whose default timeout matches the one this client applies
    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig::default().default_timeout_secs(self.timeout.as_secs_f64())
    }
}

/// HTTP client that runs registered hooks around every call
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    hooks: Arc<RwLock<HookChain>>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(config.accept_invalid_certs);

        if let Some(ref proxy_url) = config.proxy {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?,
            );
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            config,
            hooks: Arc::new(RwLock::new(HookChain::new())),
        })
    }

    /// Register hooks on both extension points
    pub fn register<H: HttpHooks + 'static>(&self, hooks: H) {
        self.hooks.write().add(hooks);
    }

    /// Register with a builder-style call
    pub fn with_hooks<H: HttpHooks + 'static>(self, hooks: H) -> Self {
        self.register(hooks);
        self
    }

    /// Number of registered hooks
    pub fn hook_count(&self) -> usize {
        self.hooks.read().len()
    }

    /// Get client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Execute a GET request
    pub async fn get(&self, url: &str) -> Outcome {
        self.execute(url, RequestArgs::get()).await
    }

    /// Execute a POST request
    pub async fn post(&self, url: &str, body: impl Into<String>) -> Outcome {
        self.execute(url, RequestArgs::post().body(body)).await
    }

    /// Execute a request.
    ///
    /// Pre-send hooks run first; if any of them preempts the call, its
    /// outcome is returned as-is and post-completion hooks do not fire.
    /// Transport failures come back as [`Outcome::Failure`].
    pub async fn execute(&self, url: &str, args: RequestArgs) -> Outcome {
        // Snapshot so no lock is held across the await
        let hooks = self.hooks.read().clone();

        if let Some(outcome) = hooks.pre_send(&args, url).into_outcome() {
            tracing::debug!(url = %redact_url(url), "Request preempted by hook");
            return outcome;
        }

        let outcome = match self.send(url, &args).await {
            Ok(response) => Outcome::Success(response),
            Err(err) => Outcome::Failure(err),
        };

        hooks.after_complete(&outcome, REQUEST_TYPE, TRANSPORT_NAME, &args, url);
        outcome
    }

    /// Execute multiple requests concurrently
    pub async fn execute_all(&self, requests: Vec<(String, RequestArgs)>) -> Vec<Outcome> {
        let futures: Vec<_> = requests
            .into_iter()
            .map(|(url, args)| async move { self.execute(&url, args).await })
            .collect();
        futures::future::join_all(futures).await
    }

    async fn send(
        &self,
        url: &str,
        args: &RequestArgs,
    ) -> std::result::Result<HostResponse, TransportError> {
        let parsed = Url::parse(url)
            .map_err(|e| TransportError::new(TransportError::INVALID_URL, e.to_string()))?;
        let method = Method::from_bytes(args.method_or_default().as_bytes()).map_err(|e| {
            TransportError::new(TransportError::INVALID_URL, format!("Invalid method: {}", e))
        })?;

        let mut builder = self.client.request(method, parsed);

        if let Some(ref headers) = args.headers {
            for (name, value) in headers {
                match (
                    HeaderName::try_from(name.as_str()),
                    HeaderValue::try_from(value.as_str()),
                ) {
                    (Ok(name), Ok(value)) => builder = builder.header(name, value),
                    _ => tracing::debug!(header = %name, "Skipping invalid header"),
                }
            }
        }

        if let Some(ref body) = args.body {
            builder = builder.body(body.clone());
        }

        builder = builder.timeout(self.timeout_for(args));

        let response = builder
            .send()
            .await
            .map_err(TransportError::from_reqwest)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(TransportError::from_reqwest)?;

        Ok(HostResponse::new(status, headers, body))
    }

    /// Per-request timeout, falling back to the client default
    fn timeout_for(&self, args: &RequestArgs) -> Duration {
        args.timeout
            .filter(|secs| *secs > 0.0)
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            .unwrap_or(self.config.timeout)
    }
}
