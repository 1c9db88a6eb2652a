//! Sitemap probing
//!
//! Fetches `/sitemap.xml` from the site root and collects its `<loc>`
//! entries. A missing or unusable sitemap is an expected condition: the
//! prober logs it and returns an empty list so the caller can fall back to
//! link crawling.

use crate::crawler::fetcher::{fetch_page, FetchResult};
use crate::url::normalize_url;
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

/// Canonical sitemap location at the root of a site
pub const SITEMAP_PATH: &str = "/sitemap.xml";

/// Tries to obtain a complete URL list from a site's sitemap
pub struct SitemapProber {
    client: Client,
    timeout: Duration,
}

impl SitemapProber {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Requests the sitemap at the root of `base_url`'s authority
    ///
    /// Returns the deduplicated `<loc>` URLs in document order, or an empty
    /// list on network failure, non-2xx status, or unparseable content.
    pub async fn probe(&self, base_url: &Url) -> Vec<String> {
        let sitemap_url = match base_url.join(SITEMAP_PATH) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Cannot build sitemap URL from {}: {}", base_url, e);
                return Vec::new();
            }
        };
        tracing::info!("Checking for sitemap at: {}", sitemap_url);

        let body = match fetch_page(&self.client, sitemap_url.as_str(), self.timeout).await {
            FetchResult::Success { body, .. } => body,
            failed => {
                tracing::info!(
                    "No usable sitemap at {} ({})",
                    sitemap_url,
                    failed.failure_reason().unwrap_or_default()
                );
                return Vec::new();
            }
        };

        let locations = match parse_sitemap_locations(&body) {
            Ok(locations) => locations,
            Err(e) => {
                tracing::warn!("Could not parse sitemap at {}: {}", sitemap_url, e);
                return Vec::new();
            }
        };

        let urls = resolve_locations(&locations, base_url);
        if urls.is_empty() {
            tracing::info!("Sitemap at {} lists no URLs", sitemap_url);
        } else {
            tracing::info!("Found {} URLs in sitemap", urls.len());
        }
        urls
    }
}

/// Extracts the text of every `<loc>` element, in document order
///
/// Works for both `<urlset>` and `<sitemapindex>` documents. Index entries
/// are returned as-is; they are not fetched recursively.
pub fn parse_sitemap_locations(xml: &str) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut locations = Vec::new();
    let mut buf = Vec::new();
    let mut in_loc = false;
    let mut current = String::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.local_name().as_ref() == b"loc" => {
                in_loc = true;
                current.clear();
            }
            Event::End(e) if e.local_name().as_ref() == b"loc" => {
                let loc = current.trim();
                if !loc.is_empty() {
                    locations.push(loc.to_string());
                }
                in_loc = false;
            }
            Event::Text(e) if in_loc => {
                current.push_str(&e.unescape()?);
            }
            Event::CData(e) if in_loc => {
                current.push_str(&String::from_utf8_lossy(&e));
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(locations)
}

/// Resolves raw `<loc>` values into absolute, fragment-free, unique URLs
fn resolve_locations(locations: &[String], base_url: &Url) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for loc in locations {
        let absolute = match base_url.join(loc) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("Skipping sitemap entry {}: {}", loc, e);
                continue;
            }
        };
        match normalize_url(absolute.as_str()) {
            Ok(url) => {
                if seen.insert(url.to_string()) {
                    urls.push(url.to_string());
                }
            }
            Err(e) => tracing::debug!("Skipping sitemap entry {}: {}", loc, e),
        }
    }

    urls
}
