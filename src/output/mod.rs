//! Output module for scraped documents and run reports
//!
//! This module handles:
//! - Rendering and writing one Markdown document per scraped page
//! - Summaries reported at the end of each stage

mod markdown;
pub mod stats;

pub use markdown::{PageRecord, DATE_FORMAT, DOCUMENT_EXTENSION};
pub use stats::{
    log_scan_summary, log_scrape_summary, DiscoverySource, ScanSummary, ScrapeSummary,
};
