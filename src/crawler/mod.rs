//! Crawler module: the scan stage
//!
//! This module contains the page discovery logic, including:
//! - HTTP fetching with failure classification
//! - Sitemap probing
//! - HTML link extraction
//! - Breadth-first same-site crawling
//! - Scan coordination and plan writing

mod coordinator;
mod fetcher;
mod link_crawler;
mod parser;
mod sitemap;

pub use coordinator::run_scan;
pub use fetcher::{build_http_client, fetch_page, FetchResult};
pub use link_crawler::LinkGraphCrawler;
pub use parser::extract_links;
pub use sitemap::{parse_sitemap_locations, SitemapProber, SITEMAP_PATH};
