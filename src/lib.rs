//! Site-Scribe: a polite two-step site scraper
//!
//! This crate discovers the pages of a website (via its sitemap or a
//! same-domain breadth-first crawl), records them in a plan file, and later
//! fetches every planned page and stores it as a Markdown document.

pub mod config;
pub mod crawler;
pub mod output;
pub mod pipeline;
pub mod plan;
pub mod state;
pub mod url;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Site-Scribe operations
#[derive(Debug, Error)]
pub enum ScribeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),

    #[error("A target URL is required for scanning")]
    MissingUrl,

    #[error("No pages discovered for {url}")]
    NothingDiscovered { url: String },

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Errors raised while persisting or reading the crawl plan
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("No plan file found at {}. Run the scan step first.", .path.display())]
    NotFound { path: PathBuf },

    #[error("Plan file {} is corrupt: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize plan: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Plan file IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for Site-Scribe operations
pub type Result<T> = std::result::Result<T, ScribeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

/// Result type alias for plan file operations
pub type PlanResult<T> = std::result::Result<T, PlanError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{run_scan, LinkGraphCrawler, SitemapProber};
pub use pipeline::{run_scrape, ContentPipeline};
pub use plan::CrawlPlan;
pub use state::{CrawlState, PageOutcome};
pub use crate::url::{extract_authority, normalize_url, page_slug};
