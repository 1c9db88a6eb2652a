//! Scan stage coordination
//!
//! Discovery strategy: sitemap first, breadth-first link crawl as fallback.
//! The result is written to the plan file and nothing else is persisted.

use crate::config::Config;
use crate::crawler::link_crawler::LinkGraphCrawler;
use crate::crawler::sitemap::SitemapProber;
use crate::crawler::build_http_client;
use crate::output::{DiscoverySource, ScanSummary};
use crate::plan::CrawlPlan;
use crate::url::normalize_url;
use crate::ScribeError;
use std::path::Path;
use std::time::Duration;

/// Runs the scan stage for `url` and writes the plan into `output_dir`
///
/// # Returns
///
/// * `Ok(ScanSummary)` - Plan written
/// * `Err(ScribeError::MissingUrl)` - No target URL given; nothing was done
/// * `Err(ScribeError)` - Invalid URL, HTTP client setup, or plan write failure
pub async fn run_scan(
    config: &Config,
    url: Option<&str>,
    output_dir: &Path,
) -> Result<ScanSummary, ScribeError> {
    let base_url = url
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or(ScribeError::MissingUrl)?;
    let seed = normalize_url(base_url)?;

    let client = build_http_client(&config.user_agent)?;

    let prober = SitemapProber::new(
        client.clone(),
        Duration::from_secs(config.scan.sitemap_timeout_secs),
    );
    let mut urls = prober.probe(&seed).await;
    let mut source = DiscoverySource::Sitemap;

    if urls.is_empty() {
        tracing::info!("No sitemap found. Falling back to crawler.");
        let crawler = LinkGraphCrawler::new(
            client,
            Duration::from_secs(config.scan.crawl_timeout_secs),
            config.scan.max_pages,
        );
        urls = crawler.crawl(&seed).await?;
        source = DiscoverySource::Crawl;
    }

    let plan = CrawlPlan::new(base_url, urls);
    if plan.is_empty() {
        return Err(ScribeError::NothingDiscovered {
            url: base_url.to_string(),
        });
    }

    let plan_path = plan.save(output_dir)?;
    tracing::info!("Plan saved to {}", plan_path.display());

    Ok(ScanSummary {
        base_url: plan.base_url.clone(),
        source,
        pages_discovered: plan.len(),
        plan_path,
    })
}
