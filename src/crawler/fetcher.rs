//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests made by both stages:
//! - Building the HTTP client with a proper user agent string
//! - GET requests with a per-request timeout
//! - Error classification (never raises for an individual page)

use crate::config::UserAgentConfig;
use crate::state::PageOutcome;
use reqwest::Client;
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Server answered with a non-2xx status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, unreadable body, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Returns true for a 2xx response with a readable body
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Human-readable reason a fetch failed, None on success
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            Self::Success { .. } => None,
            Self::HttpError { status_code } => Some(format!("HTTP status {}", status_code)),
            Self::NetworkError { error } => Some(error.clone()),
        }
    }

    /// Maps a failed fetch onto the scrape outcome it produces
    pub fn outcome(&self) -> Option<PageOutcome> {
        match self {
            Self::Success { .. } => None,
            Self::HttpError { .. } => Some(PageOutcome::HttpError),
            Self::NetworkError { .. } => Some(PageOutcome::NetworkError),
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// Timeouts are applied per request by [`fetch_page`], since the sitemap
/// probe, the link crawl, and the scrape stage each use a different one.
///
/// # Example
///
/// ```no_run
/// use site_scribe::config::UserAgentConfig;
/// use site_scribe::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL, classifying every failure instead of returning an error
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx with readable body | Success |
/// | Any other status | HttpError |
/// | Timeout | NetworkError ("Request timeout") |
/// | Connection refused / DNS | NetworkError ("Connection failed") |
/// | Body read failure | NetworkError |
pub async fn fetch_page(client: &Client, url: &str, timeout: Duration) -> FetchResult {
    match client.get(url).timeout(timeout).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if !status.is_success() {
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success {
                    final_url,
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchResult::NetworkError {
                    error: format!("Failed to read body: {}", e),
                },
            }
        }
        Err(e) => {
            if e.is_timeout() {
                FetchResult::NetworkError {
                    error: "Request timeout".to_string(),
                }
            } else if e.is_connect() {
                FetchResult::NetworkError {
                    error: format!("Connection failed: {}", e),
                }
            } else {
                FetchResult::NetworkError {
                    error: e.to_string(),
                }
            }
        }
    }
}
