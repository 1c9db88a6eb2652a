//! Site-Scribe main entry point
//!
//! This is the command-line interface for the two-step site scraper.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use site_scribe::config::{load_config_or_default, Config};
use site_scribe::output::{log_scan_summary, log_scrape_summary};
use site_scribe::{run_scan, run_scrape};
use std::future::Future;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Exit status of a run stopped by Ctrl-C (128 + SIGINT)
const EXIT_INTERRUPTED: i32 = 130;

/// Site-Scribe: a polite two-step site scraper
///
/// Step 1 (scan) identifies the pages of a site via its sitemap or a
/// same-domain crawl and writes a plan file. Step 2 (scrape) downloads every
/// planned page with a polite delay and saves it as Markdown.
#[derive(Parser, Debug)]
#[command(name = "site-scribe")]
#[command(version)]
#[command(about = "A polite two-step site scraper", long_about = None)]
struct Cli {
    /// Action to perform
    #[arg(long, value_enum, default_value_t = Step::Scan)]
    step: Step,

    /// Target URL (required for scan)
    #[arg(long)]
    url: Option<String>,

    /// Output directory for the plan file and scraped documents
    #[arg(long, value_name = "DIR")]
    output: PathBuf,

    /// Delay between requests in seconds (scrape only)
    #[arg(long, value_name = "SECS")]
    delay: Option<f64>,

    /// Maximum pages visited by the fallback crawler (scan only)
    #[arg(long, value_name = "N")]
    max_pages: Option<usize>,

    /// Path to an optional TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Step {
    /// Identify pages to scrape and write the plan
    Scan,
    /// Download planned pages and convert them to Markdown
    Scrape,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = load_config_or_default(cli.config.as_deref()).with_context(|| {
        match &cli.config {
            Some(path) => format!("Failed to load configuration from {}", path.display()),
            None => "Invalid default configuration".to_string(),
        }
    })?;
    if cli.quiet {
        config.scrape.show_progress = false;
    }
    if let Some(max_pages) = cli.max_pages {
        anyhow::ensure!(max_pages > 0, "--max-pages must be at least 1");
        config.scan.max_pages = max_pages;
    }

    let interrupt = async {
        // If the handler cannot be installed, never report an interrupt
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    let result = match until_interrupted(run_step(&cli, &config), interrupt).await {
        StepOutcome::Finished(result) => result,
        StepOutcome::Interrupted => {
            tracing::warn!("Interrupted; files written so far are kept");
            std::process::exit(EXIT_INTERRUPTED);
        }
    };

    if let Err(e) = &result {
        tracing::error!("{:#}", e);
    }
    result
}

/// How a stage run ended
#[derive(Debug)]
enum StepOutcome {
    Finished(anyhow::Result<()>),
    Interrupted,
}

/// Runs `step` until it completes or `interrupt` resolves, whichever is first
///
/// On interrupt the step future is dropped at its current await point.
async fn until_interrupted<S, I>(step: S, interrupt: I) -> StepOutcome
where
    S: Future<Output = anyhow::Result<()>>,
    I: Future<Output = ()>,
{
    tokio::select! {
        result = step => StepOutcome::Finished(result),
        _ = interrupt => StepOutcome::Interrupted,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_scribe=info,warn"),
            1 => EnvFilter::new("site_scribe=debug,info"),
            2 => EnvFilter::new("site_scribe=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Dispatches to the selected stage
async fn run_step(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    match cli.step {
        Step::Scan => {
            let summary = run_scan(config, cli.url.as_deref(), &cli.output)
                .await
                .context("Scan failed")?;
            log_scan_summary(&summary);
        }
        Step::Scrape => {
            if cli.url.is_some() {
                tracing::debug!("--url is ignored by the scrape step");
            }
            let summary = run_scrape(config, &cli.output, cli.delay)
                .await
                .context("Scrape failed")?;
            log_scrape_summary(&summary);
            tracing::info!("Files saved in {}", cli.output.display());
        }
    }
    Ok(())
}
