//! Run summaries for the scan and scrape stages

use crate::state::PageOutcome;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// How the scan stage found its pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoverySource {
    /// URLs came from `/sitemap.xml`
    Sitemap,
    /// URLs came from the breadth-first link crawl
    Crawl,
}

impl fmt::Display for DiscoverySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sitemap => write!(f, "sitemap"),
            Self::Crawl => write!(f, "link crawl"),
        }
    }
}

/// Result of a scan run
#[derive(Debug, Clone)]
pub struct ScanSummary {
    pub base_url: String,
    pub source: DiscoverySource,
    pub pages_discovered: usize,
    pub plan_path: PathBuf,
}

/// Result of a scrape run
#[derive(Debug, Clone, Default)]
pub struct ScrapeSummary {
    /// Number of URLs in the plan
    pub total_pages: usize,

    /// Count of pages by outcome
    pub outcomes: HashMap<PageOutcome, usize>,

    /// Files that were written, in processing order
    pub written_files: Vec<PathBuf>,
}

impl ScrapeSummary {
    pub fn new(total_pages: usize) -> Self {
        Self {
            total_pages,
            ..Self::default()
        }
    }

    /// Records the outcome of one page
    pub fn record(&mut self, outcome: PageOutcome) {
        *self.outcomes.entry(outcome).or_insert(0) += 1;
    }

    pub fn count(&self, outcome: PageOutcome) -> usize {
        self.outcomes.get(&outcome).copied().unwrap_or(0)
    }

    /// Number of pages written to disk
    pub fn scraped(&self) -> usize {
        self.count(PageOutcome::Written)
    }

    /// Number of pages skipped for any reason
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(outcome, _)| !outcome.is_success())
            .map(|(_, count)| count)
            .sum()
    }

    /// Number of pages taken off the plan so far
    pub fn processed(&self) -> usize {
        self.outcomes.values().sum()
    }
}

/// Logs the end-of-stage report for a scan
pub fn log_scan_summary(summary: &ScanSummary) {
    tracing::info!(
        "Total pages identified: {} (via {}) for {}",
        summary.pages_discovered,
        summary.source,
        summary.base_url
    );
    tracing::info!("Plan file: {}", summary.plan_path.display());
    tracing::info!("Ready for step 2. Run with '--step scrape'");
}

/// Logs the end-of-stage report for a scrape
pub fn log_scrape_summary(summary: &ScrapeSummary) {
    tracing::info!(
        "Scraping complete: {} of {} pages written, {} skipped",
        summary.scraped(),
        summary.total_pages,
        summary.skipped()
    );

    let mut failures: Vec<_> = summary
        .outcomes
        .iter()
        .filter(|(outcome, count)| !outcome.is_success() && **count > 0)
        .collect();
    failures.sort_by(|a, b| b.1.cmp(a.1));

    for (outcome, count) in failures {
        tracing::info!("  {}: {}", outcome, count);
    }
}
