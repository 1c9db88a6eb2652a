//! HTML parser for extracting hyperlinks
//!
//! Links are returned in document order; the crawler depends on that order
//! to keep its breadth-first traversal deterministic.

use crate::url::resolve_link;
use scraper::{Html, Selector};
use url::Url;

/// Extracts all followable hyperlinks from an HTML page
///
/// Every `<a href>` target is resolved against `base_url`. Fragments are
/// stripped and `javascript:`, `mailto:`, `tel:`, `data:` and fragment-only
/// links are dropped. Duplicates are kept; the crawler deduplicates.
///
/// # Example
///
/// ```
/// use site_scribe::crawler::extract_links;
/// use url::Url;
///
/// let html = r#"<html><body><a href="/page">Link</a></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let links = extract_links(html, &base_url);
/// assert_eq!(links[0].as_str(), "https://example.com/page");
/// ```
pub fn extract_links(html: &str, base_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);

    let mut links = Vec::new();
    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_link(href, base_url) {
                    links.push(absolute_url);
                }
            }
        }
    }
    links
}
