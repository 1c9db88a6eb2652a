use site_scribe::config::Config;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Configuration with short timeouts and no politeness delay
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.scan.crawl_timeout_secs = 2;
    config.scan.sitemap_timeout_secs = 2;
    config.scrape.delay_secs = 0.0;
    config.scrape.timeout_secs = 2;
    config.scrape.show_progress = false;
    config.user_agent.crawler_name = "TestBot".to_string();
    config
}

/// Mounts an HTML page at `page_path`
pub async fn mount_page(server: &MockServer, page_path: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html.to_string())
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Mounts a bare status response at `page_path`
pub async fn mount_status(server: &MockServer, page_path: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Builds an HTML page whose body is a list of links
pub fn page_with_links(title: &str, hrefs: &[&str]) -> String {
    let links: String = hrefs
        .iter()
        .map(|href| format!(r#"<a href="{}">{}</a>"#, href, href))
        .collect();
    format!(
        "<html><head><title>{}</title></head><body><h1>{}</h1>{}</body></html>",
        title, title, links
    )
}

/// Names of the Markdown documents in `dir`, sorted
pub fn markdown_files(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| name.ends_with(".md"))
        .collect();
    names.sort();
    names
}
