//! Breadth-first same-site link crawler
//!
//! Used when a site publishes no sitemap. Pages are visited in strict FIFO
//! order, so for a fixed link order on every page the visit order (and which
//! pages survive the page cap) is deterministic.

use crate::crawler::fetcher::{fetch_page, FetchResult};
use crate::crawler::parser::extract_links;
use crate::state::CrawlState;
use crate::url::{extract_authority, should_follow};
use crate::UrlError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Discovers pages by following hyperlinks that stay on the seed's authority
pub struct LinkGraphCrawler {
    client: Client,
    timeout: Duration,
    max_pages: usize,
}

impl LinkGraphCrawler {
    pub fn new(client: Client, timeout: Duration, max_pages: usize) -> Self {
        Self {
            client,
            timeout,
            max_pages,
        }
    }

    /// Crawls from `seed` and returns the visited URLs in visit order
    ///
    /// Pages that fail to fetch are still counted and returned; only their
    /// outgoing links are lost.
    pub async fn crawl(&self, seed: &Url) -> Result<Vec<String>, UrlError> {
        let domain = extract_authority(seed).ok_or(UrlError::MissingDomain)?;
        let mut seed = seed.clone();
        seed.set_fragment(None);

        tracing::info!(
            "Starting crawl on {} (limit: {} pages)",
            seed,
            self.max_pages
        );

        let mut state = CrawlState::new(seed, domain);

        while !state.is_finished(self.max_pages) {
            let Some(current) = state.visit_next() else {
                break;
            };
            self.step(&mut state, &current).await;
        }

        tracing::info!(
            "Crawl finished: {} pages visited, {} left in frontier",
            state.visited_count(),
            state.frontier_len()
        );

        Ok(state.into_visited())
    }

    /// Fetches one visited page and queues its eligible links
    async fn step(&self, state: &mut CrawlState, current: &Url) {
        tracing::debug!("Crawling {}", current);

        let body = match fetch_page(&self.client, current.as_str(), self.timeout).await {
            FetchResult::Success { body, .. } => body,
            failed => {
                tracing::warn!(
                    "Failed to crawl {}: {}",
                    current,
                    failed.failure_reason().unwrap_or_default()
                );
                return;
            }
        };

        // Relative hrefs resolve against the seed, not the page they appear on
        let links = extract_links(&body, state.seed());
        let mut queued = 0;
        for link in links {
            if should_follow(&link, state.domain()) && state.enqueue(link) {
                queued += 1;
            }
        }

        tracing::trace!(
            "{}: queued {} new links, frontier size {}",
            current,
            queued,
            state.frontier_len()
        );
    }
}
