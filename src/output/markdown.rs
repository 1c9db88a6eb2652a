//! Markdown document rendering
//!
//! Each scraped page becomes one document: a front-matter style header with
//! provenance metadata followed by the converted body.

use chrono::{DateTime, Local};
use std::path::Path;

/// Timestamp format used in the `date:` header line
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Extension of every output document
pub const DOCUMENT_EXTENSION: &str = "md";

/// A successfully fetched and converted page, alive only until written
#[derive(Debug, Clone)]
pub struct PageRecord {
    /// The planned URL the page was fetched from
    pub url: String,

    /// When the fetch completed
    pub fetched_at: DateTime<Local>,

    /// Converted Markdown body
    pub body: String,
}

impl PageRecord {
    pub fn new(
        url: impl Into<String>,
        fetched_at: DateTime<Local>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            fetched_at,
            body: body.into(),
        }
    }

    /// Renders the metadata header followed by the body
    pub fn render(&self) -> String {
        let mut doc = String::with_capacity(self.body.len() + 96);
        doc.push_str("---\n");
        doc.push_str(&format!("url: {}\n", self.url));
        doc.push_str(&format!("date: {}\n", self.fetched_at.format(DATE_FORMAT)));
        doc.push_str("---\n\n");
        doc.push_str(&self.body);
        doc
    }

    /// Writes the rendered document to `path`, replacing any existing file
    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.render())
    }
}
