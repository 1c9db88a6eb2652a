//! State module for tracking crawl and scrape progress
//!
//! # Components
//!
//! - `CrawlState`: visited set and FIFO frontier of the fallback link crawl
//! - `PageOutcome`: how processing of a single planned page ended

mod crawl_state;
mod page_state;

// Re-export main types
pub use crawl_state::CrawlState;
pub use page_state::PageOutcome;
