use url::Url;

/// Stem used for the site root
pub const INDEX_SLUG: &str = "index";

/// Derives a filesystem-safe file stem from a URL path
///
/// Leading and trailing slashes are trimmed, an empty path becomes `index`,
/// and every `/` and `-` is replaced with `_`. Query strings are ignored,
/// so `/a?x=1` and `/a?x=2` share the stem `a`.
///
/// # Examples
///
/// ```
/// use site_scribe::url::slug_from_path;
///
/// assert_eq!(slug_from_path("/a/b-c/"), "a_b_c");
/// assert_eq!(slug_from_path(""), "index");
/// ```
pub fn slug_from_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return INDEX_SLUG.to_string();
    }
    trimmed.replace(['/', '-'], "_")
}

/// Derives the file stem for a page URL
pub fn page_slug(url: &Url) -> String {
    slug_from_path(url.path())
}
