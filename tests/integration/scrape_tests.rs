use crate::common::{markdown_files, mount_page, mount_status, page_with_links, test_config};
use site_scribe::config::UserAgentConfig;
use site_scribe::crawler::build_http_client;
use site_scribe::output::DATE_FORMAT;
use site_scribe::pipeline::{ContentPipeline, ConversionError, TextConverter};
use site_scribe::plan::{CrawlPlan, PLAN_FILE_NAME};
use site_scribe::state::PageOutcome;
use site_scribe::{run_scrape, PlanError, ScribeError};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tempfile::TempDir;
use wiremock::MockServer;

fn pipeline(dir: &std::path::Path, delay: Duration) -> ContentPipeline {
    let client = build_http_client(&UserAgentConfig::default()).unwrap();
    ContentPipeline::new(client, dir, delay, Duration::from_secs(2))
}

struct FailingConverter;

impl TextConverter for FailingConverter {
    fn convert(&self, _html: &str) -> Result<String, ConversionError> {
        Err(ConversionError::Unsupported("unsupported markup".to_string()))
    }
}

/// Records when conversion started, then takes longer than a second
#[derive(Clone, Default)]
struct SlowConverter {
    started: Arc<Mutex<Option<String>>>,
}

impl TextConverter for SlowConverter {
    fn convert(&self, html: &str) -> Result<String, ConversionError> {
        let now = chrono::Local::now().format(DATE_FORMAT).to_string();
        *self.started.lock().unwrap() = Some(now);
        std::thread::sleep(Duration::from_millis(1100));
        Ok(html.to_string())
    }
}

#[tokio::test]
async fn test_scrape_skips_failed_page_and_continues() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(&server, "/docs/getting-started", &page_with_links("Start", &[])).await;
    mount_status(&server, "/broken", 500).await;

    let dir = TempDir::new().unwrap();
    CrawlPlan::new(
        format!("{base}/"),
        vec![
            format!("{base}/docs/getting-started"),
            format!("{base}/broken"),
        ],
    )
    .save(dir.path())
    .unwrap();

    let summary = run_scrape(&test_config(), dir.path(), None)
        .await
        .expect("scrape should complete despite a failing page");

    assert_eq!(summary.total_pages, 2);
    assert_eq!(summary.scraped(), 1);
    assert_eq!(summary.count(PageOutcome::HttpError), 1);
    assert_eq!(markdown_files(dir.path()), vec!["docs_getting_started.md"]);
}

#[tokio::test]
async fn test_scraped_document_has_metadata_header() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_page(&server, "/", &page_with_links("Welcome", &["/about"])).await;

    let dir = TempDir::new().unwrap();
    let plan = CrawlPlan::new(format!("{base}/"), vec![format!("{base}/")]);

    let summary = pipeline(dir.path(), Duration::ZERO).run(&plan).await;
    assert_eq!(summary.scraped(), 1);

    let content = std::fs::read_to_string(dir.path().join("index.md")).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("---"));
    assert_eq!(lines.next(), Some(format!("url: {base}/").as_str()));

    let date_line = lines.next().unwrap();
    let date = date_line.strip_prefix("date: ").unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").is_ok());

    assert_eq!(lines.next(), Some("---"));
    assert_eq!(lines.next(), Some(""));
    assert!(content.contains("Welcome"));
    assert!(!content.contains("<h1>"));
}

#[tokio::test]
async fn test_scrape_delay_is_applied_before_every_request() {
    let server = MockServer::start().await;
    let base = server.uri();
    for page in ["/one", "/two", "/three"] {
        mount_page(&server, page, &page_with_links(page, &[])).await;
    }

    let dir = TempDir::new().unwrap();
    let plan = CrawlPlan::new(
        format!("{base}/"),
        vec![
            format!("{base}/one"),
            format!("{base}/two"),
            format!("{base}/three"),
        ],
    );

    let delay = Duration::from_millis(200);
    let started = Instant::now();
    let summary = pipeline(dir.path(), delay).run(&plan).await;

    assert!(started.elapsed() >= delay * 3);
    assert_eq!(summary.scraped(), 3);
}

#[tokio::test]
async fn test_scrape_without_plan_reports_missing_scan() {
    let dir = TempDir::new().unwrap();

    let result = run_scrape(&test_config(), dir.path(), None).await;

    assert!(matches!(
        result,
        Err(ScribeError::Plan(PlanError::NotFound { .. }))
    ));
    assert!(markdown_files(dir.path()).is_empty());
}

#[tokio::test]
async fn test_scrape_with_corrupt_plan() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(PLAN_FILE_NAME), "[1, 2,").unwrap();

    let result = run_scrape(&test_config(), dir.path(), None).await;

    assert!(matches!(
        result,
        Err(ScribeError::Plan(PlanError::Corrupt { .. }))
    ));
}

#[tokio::test]
async fn test_scrape_rejects_negative_delay() {
    let dir = TempDir::new().unwrap();
    let result = run_scrape(&test_config(), dir.path(), Some(-1.0)).await;
    assert!(matches!(result, Err(ScribeError::Config(_))));
}

#[tokio::test]
async fn test_scrape_rejects_out_of_range_delay() {
    let dir = TempDir::new().unwrap();
    let result = run_scrape(&test_config(), dir.path(), Some(1e20)).await;
    assert!(matches!(result, Err(ScribeError::Config(_))));

    let mut config = test_config();
    config.scrape.delay_secs = 1e20;
    let result = run_scrape(&config, dir.path(), None).await;
    assert!(matches!(result, Err(ScribeError::Config(_))));
}

#[tokio::test]
async fn test_document_date_is_taken_at_fetch_time() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_page(&server, "/slow", &page_with_links("Slow", &[])).await;

    let dir = TempDir::new().unwrap();
    let plan = CrawlPlan::new(format!("{base}/"), vec![format!("{base}/slow")]);
    let converter = SlowConverter::default();

    let summary = pipeline(dir.path(), Duration::ZERO)
        .with_converter(converter.clone())
        .run(&plan)
        .await;
    assert_eq!(summary.scraped(), 1);

    let content = std::fs::read_to_string(dir.path().join("slow.md")).unwrap();
    let date = content
        .lines()
        .find_map(|line| line.strip_prefix("date: "))
        .unwrap()
        .to_string();
    let conversion_started = converter.started.lock().unwrap().clone().unwrap();

    // Both use DATE_FORMAT, so string order is time order
    assert!(date <= conversion_started);
}

#[tokio::test]
async fn test_scrape_does_not_modify_plan() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_page(&server, "/a", &page_with_links("A", &[])).await;

    let dir = TempDir::new().unwrap();
    let plan_path = CrawlPlan::new(format!("{base}/"), vec![format!("{base}/a")])
        .save(dir.path())
        .unwrap();
    let before = std::fs::read_to_string(&plan_path).unwrap();

    run_scrape(&test_config(), dir.path(), None).await.unwrap();

    assert_eq!(std::fs::read_to_string(&plan_path).unwrap(), before);
}

#[tokio::test]
async fn test_colliding_slugs_are_both_kept() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_page(&server, "/a-b", &page_with_links("Dash", &[])).await;
    mount_page(&server, "/a/b", &page_with_links("Nested", &[])).await;

    let dir = TempDir::new().unwrap();
    let plan = CrawlPlan::new(
        format!("{base}/"),
        vec![format!("{base}/a-b"), format!("{base}/a/b")],
    );

    let summary = pipeline(dir.path(), Duration::ZERO).run(&plan).await;

    assert_eq!(summary.scraped(), 2);
    let files = markdown_files(dir.path());
    assert_eq!(files.len(), 2);
    assert!(files.contains(&"a_b.md".to_string()));

    let dash = std::fs::read_to_string(dir.path().join("a_b.md")).unwrap();
    assert!(dash.contains(&format!("url: {base}/a-b")));
}

#[tokio::test]
async fn test_conversion_failure_skips_page() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_page(&server, "/a", &page_with_links("A", &[])).await;

    let dir = TempDir::new().unwrap();
    let plan = CrawlPlan::new(format!("{base}/"), vec![format!("{base}/a")]);

    let summary = pipeline(dir.path(), Duration::ZERO)
        .with_converter(FailingConverter)
        .run(&plan)
        .await;

    assert_eq!(summary.count(PageOutcome::ConversionFailed), 1);
    assert!(markdown_files(dir.path()).is_empty());
}

#[tokio::test]
async fn test_scrape_existing_file_is_overwritten() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_page(&server, "/about", &page_with_links("Fresh", &[])).await;

    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("about.md"), "old content").unwrap();
    let plan = CrawlPlan::new(format!("{base}/"), vec![format!("{base}/about")]);

    pipeline(dir.path(), Duration::ZERO).run(&plan).await;

    let content = std::fs::read_to_string(dir.path().join("about.md")).unwrap();
    assert!(content.contains("Fresh"));
    assert!(!content.contains("old content"));
}
