use url::Url;

/// Extracts the network authority (lowercase host plus explicit port) from a URL
///
/// Two URLs belong to the same site when their authorities are equal, so a
/// server on `127.0.0.1:8080` is a different site than one on `127.0.0.1:9090`.
/// Default ports are not written out by the `url` crate, which makes
/// `https://example.com:443/` and `https://example.com/` the same authority.
///
/// # Returns
///
/// * `Some(String)` - The authority, e.g. `example.com` or `localhost:8080`
/// * `None` - If the URL has no host
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_scribe::url::extract_authority;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_authority(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://localhost:8080/").unwrap();
/// assert_eq!(extract_authority(&url), Some("localhost:8080".to_string()));
/// ```
pub fn extract_authority(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_lowercase();
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host),
    }
}
