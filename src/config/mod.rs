//! Configuration module for Site-Scribe
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Command-line flags override values loaded here.
//!
//! # Example
//!
//! ```no_run
//! use site_scribe::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scribe.toml")).unwrap();
//! println!("Scrape delay: {}s", config.scrape.delay_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, ScanConfig, ScrapeConfig, UserAgentConfig, DEFAULT_DELAY_SECS, DEFAULT_MAX_PAGES,
};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default};
pub use validation::validate_delay;
