//! Content pipeline: the scrape stage
//!
//! Every planned URL is processed strictly in order, one at a time:
//! politeness delay, fetch, conversion, file naming, write. A failure on one
//! page is logged and never stops the run.

mod convert;
mod naming;
mod progress;

pub use convert::{ConversionError, MarkdownConverter, TextConverter};
pub use naming::FileNamer;
pub use progress::create_progress_bar;

use crate::config::{validate_delay, Config};
use crate::crawler::{build_http_client, fetch_page, FetchResult};
use crate::output::{PageRecord, ScrapeSummary};
use crate::plan::CrawlPlan;
use crate::state::PageOutcome;
use crate::url::normalize_url;
use crate::ScribeError;
use chrono::Local;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Fetches, converts, and stores the pages of a crawl plan
pub struct ContentPipeline {
    client: Client,
    output_dir: PathBuf,
    delay: Duration,
    timeout: Duration,
    converter: Box<dyn TextConverter>,
    show_progress: bool,
}

impl ContentPipeline {
    /// Creates a pipeline writing into `output_dir` with the Markdown converter
    pub fn new(
        client: Client,
        output_dir: impl Into<PathBuf>,
        delay: Duration,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            output_dir: output_dir.into(),
            delay,
            timeout,
            converter: Box::new(MarkdownConverter),
            show_progress: false,
        }
    }

    /// Replaces the HTML conversion step
    pub fn with_converter(mut self, converter: impl TextConverter + 'static) -> Self {
        self.converter = Box::new(converter);
        self
    }

    /// Draws a progress bar on stderr while the run is in progress
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Processes every URL of the plan in order
    ///
    /// Dropping the returned future stops the run at its current await point
    /// (delay or fetch); files are written synchronously, so a document is
    /// either fully written or not started.
    pub async fn run(&self, plan: &CrawlPlan) -> ScrapeSummary {
        let mut summary = ScrapeSummary::new(plan.len());
        let mut namer = FileNamer::new();
        let pb = create_progress_bar(plan.len() as u64, self.show_progress);

        tracing::info!(
            "Starting scrape of {} pages with {:.2}s delay",
            plan.len(),
            self.delay.as_secs_f64()
        );

        for (index, url) in plan.urls.iter().enumerate() {
            tracing::debug!("[{}/{}] {}", index + 1, plan.len(), url);

            let outcome = match self.process_page(url, &mut namer).await {
                Ok(path) => {
                    tracing::debug!("Wrote {}", path.display());
                    summary.written_files.push(path);
                    PageOutcome::Written
                }
                Err(outcome) => outcome,
            };
            summary.record(outcome);

            pb.set_message(format!("({} written)", summary.scraped()));
            pb.inc(1);
            if pb.is_hidden() && (index + 1) % 10 == 0 {
                tracing::info!(
                    "Progress: {}/{} pages processed, {} written",
                    index + 1,
                    plan.len(),
                    summary.scraped()
                );
            }
        }

        pb.finish_and_clear();
        summary
    }

    /// Runs the delay, fetch, convert, and write steps for a single URL
    async fn process_page(
        &self,
        url: &str,
        namer: &mut FileNamer,
    ) -> Result<PathBuf, PageOutcome> {
        tokio::time::sleep(self.delay).await;

        let parsed = normalize_url(url).map_err(|e| {
            tracing::warn!("Skipping {}: {}", url, e);
            PageOutcome::NetworkError
        })?;

        let html = match fetch_page(&self.client, url, self.timeout).await {
            FetchResult::Success { body, .. } => body,
            failed => {
                tracing::warn!(
                    "Failed to fetch {} ({})",
                    url,
                    failed.failure_reason().unwrap_or_default()
                );
                return Err(failed.outcome().unwrap_or(PageOutcome::NetworkError));
            }
        };
        let fetched_at = Local::now();

        let body = self.converter.convert(&html).map_err(|e| {
            tracing::warn!("Failed to convert {}: {}", url, e);
            PageOutcome::ConversionFailed
        })?;

        let record = PageRecord::new(url, fetched_at, body);
        let path = self.output_dir.join(namer.file_name(&parsed));

        record.write_to(&path).map_err(|e| {
            tracing::error!("Error writing {} for {}: {}", path.display(), url, e);
            PageOutcome::WriteFailed
        })?;

        Ok(path)
    }
}

/// Runs the scrape stage for the plan stored in `output_dir`
///
/// # Arguments
///
/// * `config` - Loaded configuration
/// * `output_dir` - Directory holding the plan; documents are written here too
/// * `delay_override` - Politeness delay in seconds, replacing the configured one
///
/// # Returns
///
/// * `Ok(ScrapeSummary)` - The run completed (individual pages may have failed)
/// * `Err(ScribeError::Plan)` - The plan file is missing or corrupt; nothing was fetched
pub async fn run_scrape(
    config: &Config,
    output_dir: &Path,
    delay_override: Option<f64>,
) -> Result<ScrapeSummary, ScribeError> {
    let delay_secs = delay_override.unwrap_or(config.scrape.delay_secs);
    let delay = validate_delay(delay_secs)?;

    let plan = CrawlPlan::load_from_dir(output_dir)?;
    if plan.is_empty() {
        tracing::warn!("No URLs found in the plan file");
        return Ok(ScrapeSummary::new(0));
    }

    let client = build_http_client(&config.user_agent)?;
    let pipeline = ContentPipeline::new(
        client,
        output_dir,
        delay,
        Duration::from_secs(config.scrape.timeout_secs),
    )
    .with_progress(config.scrape.show_progress);

    Ok(pipeline.run(&plan).await)
}
