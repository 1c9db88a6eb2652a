use crate::UrlError;
use url::Url;

/// Path suffixes that never point at an HTML page
const NON_PAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".pdf", ".css", ".js"];

/// Parses and normalizes a URL into the form stored in crawl plans
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Require an HTTP or HTTPS scheme
/// 3. Require a host
/// 4. Remove the fragment (everything after #)
///
/// Path and query are kept verbatim so the stored URL still fetches the
/// exact resource the site linked to.
///
/// # Examples
///
/// ```
/// use site_scribe::url::normalize_url;
///
/// let url = normalize_url("https://example.com/docs#install").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/docs");
/// ```
pub fn normalize_url(url_str: &str) -> Result<Url, UrlError> {
    let mut url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingDomain);
    }

    url.set_fragment(None);

    Ok(url)
}

/// Resolves a link href against a base URL
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - Fragment-only anchors
/// - Invalid URLs
/// - Non-HTTP(S) URLs after resolution
///
/// The returned URL has its fragment stripped.
pub fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if lowered.starts_with("javascript:")
        || lowered.starts_with("mailto:")
        || lowered.starts_with("tel:")
        || lowered.starts_with("data:")
    {
        return None;
    }

    let mut absolute = base_url.join(href).ok()?;
    if absolute.scheme() != "http" && absolute.scheme() != "https" {
        return None;
    }
    absolute.set_fragment(None);
    Some(absolute)
}

/// Returns true when the URL path ends in an image, document, or asset extension
pub fn is_non_page_resource(url: &Url) -> bool {
    let path = url.path().to_ascii_lowercase();
    NON_PAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
