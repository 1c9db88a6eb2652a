//! URL handling module for Site-Scribe
//!
//! This module provides URL normalization, link resolution, authority
//! extraction, and the slug function that turns page URLs into file names.

mod domain;
mod normalize;
mod slug;

// Re-export main functions
pub use domain::extract_authority;
pub use normalize::{is_non_page_resource, normalize_url, resolve_link};
pub use slug::{page_slug, slug_from_path, INDEX_SLUG};

use url::Url;

/// Returns true if `url` lives on the site identified by `authority`
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_scribe::url::is_same_site;
///
/// let url = Url::parse("https://example.com/b").unwrap();
/// assert!(is_same_site(&url, "example.com"));
/// assert!(!is_same_site(&url, "other.example"));
/// ```
pub fn is_same_site(url: &Url, authority: &str) -> bool {
    extract_authority(url).as_deref() == Some(authority)
}

/// Returns true if a discovered link should be followed by the crawler
///
/// A link is followed when it shares the crawl authority and does not point
/// at an image, document, stylesheet, or script.
pub fn should_follow(url: &Url, authority: &str) -> bool {
    is_same_site(url, authority) && !is_non_page_resource(url)
}
