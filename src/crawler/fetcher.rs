//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the shared HTTP client (user agent, timeout, TLS policy)
//! - GET requests returning the page body
//! - Retry with exponential backoff for connection failures
//! - Error classification

use crate::config::HttpConfig;
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::error::Error as StdError;
use std::time::Duration;
use thiserror::Error;

/// Classified failure of a single page fetch
///
/// Fetch errors never abort a crawl; the coordinator logs them and treats the
/// page as having no contacts and no links.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("TLS failure: {0}")]
    Tls(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("request failed: {0}")]
    Request(String),
}

/// A source of page bodies
///
/// The coordinator only ever talks to this trait, which lets tests drive a
/// crawl from in-memory pages.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches `url` and returns the body of a successful response
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Retry policy for connection failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first failed attempt
    pub max_retries: u32,

    /// Delay before the first retry; doubles on every further retry
    pub backoff_base: Duration,
}

impl RetryPolicy {
    /// Delay before retry number `retry` (1-based): `base * 2^(retry - 1)`
    pub fn delay_for(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(16);
        self.backoff_base.saturating_mul(1u32 << exponent)
    }
}

impl From<&HttpConfig> for RetryPolicy {
    fn from(config: &HttpConfig) -> Self {
        Self {
            max_retries: config.connect_retries,
            backoff_base: Duration::from_millis(config.backoff_base_ms),
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// The client is shared across every request of a run so connections to the
/// same origin are reused.
///
/// # Example
///
/// ```no_run
/// use contact_scraper::config::HttpConfig;
/// use contact_scraper::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    if config.accept_invalid_certs {
        tracing::debug!("TLS certificate validation is disabled");
    }

    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Network-backed [`PageSource`]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    retry: RetryPolicy,
}

impl HttpFetcher {
    pub fn new(client: Client, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }

    /// Builds the client and retry policy from configuration
    pub fn from_config(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(config)?, RetryPolicy::from(config)))
    }
}

#[async_trait]
impl PageSource for HttpFetcher {
    /// Fetches a URL with error classification and connection retries
    ///
    /// # Retry Logic
    ///
    /// | Condition | Action |
    /// |-----------|--------|
    /// | Connection failure | Retry up to `max_retries`, exponential backoff |
    /// | Timeout | Immediate → Timeout |
    /// | TLS/SSL error | Immediate → Tls |
    /// | Non-2xx status after redirects | Immediate → Status |
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let mut retry = 0;

        loop {
            tracing::trace!("GET {} (attempt {})", url, retry + 1);

            let error = match self.client.get(url).send().await {
                Ok(response) => return read_body(response).await,
                Err(e) => classify_error(&e),
            };

            if !matches!(error, FetchError::Connect(_)) || retry >= self.retry.max_retries {
                return Err(error);
            }

            retry += 1;
            let delay = self.retry.delay_for(retry);
            tracing::debug!(
                "Connection to {} failed ({}), retry {}/{} in {:?}",
                url,
                error,
                retry,
                self.retry.max_retries,
                delay
            );
            tokio::time::sleep(delay).await;
        }
    }
}

/// Returns the body of a 2xx response, or the status as an error
async fn read_body(response: Response) -> Result<String, FetchError> {
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::Body(e.to_string()))
}

/// Maps a reqwest error onto the fetch failure taxonomy
fn classify_error(error: &reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if is_tls_failure(error) {
        FetchError::Tls(error_chain(error))
    } else if error.is_connect() {
        FetchError::Connect(error_chain(error))
    } else if error.is_body() || error.is_decode() {
        FetchError::Body(error_chain(error))
    } else if let Some(status) = error.status() {
        FetchError::Status(status.as_u16())
    } else {
        FetchError::Request(error_chain(error))
    }
}

/// TLS failures surface as connect errors; look for them in the source chain.
/// The top-level message is skipped because it embeds the request URL.
fn is_tls_failure(error: &reqwest::Error) -> bool {
    let mut source = StdError::source(error);
    while let Some(cause) = source {
        let message = cause.to_string().to_lowercase();
        if ["certificate", "tls", "ssl", "handshake"]
            .iter()
            .any(|marker| message.contains(marker))
        {
            return true;
        }
        source = cause.source();
    }
    false
}

/// Describes an error by its innermost cause
///
/// reqwest's own message already embeds its sources, so appending the chain
/// would repeat them. The root cause (`Connection refused`, a certificate
/// complaint) is what the log line needs; the URL is logged separately.
fn error_chain(error: &reqwest::Error) -> String {
    let mut root: &dyn StdError = error;
    while let Some(cause) = root.source() {
        root = cause;
    }
    root.to_string()
}
