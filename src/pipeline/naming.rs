//! Output file naming
//!
//! File names come from the URL path slug. Two distinct URLs can share a
//! slug (`/a-b` and `/a/b`, or the same path with different queries); within
//! one run the second one gets a short hash of its URL appended so neither
//! document is lost. Files left over from earlier runs are overwritten.

use crate::output::DOCUMENT_EXTENSION;
use crate::url::page_slug;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use url::Url;

/// Number of hex characters of the URL hash used to disambiguate slugs
const HASH_SUFFIX_LEN: usize = 8;

/// Assigns output file names, tracking which URL claimed which stem
#[derive(Debug, Default)]
pub struct FileNamer {
    claimed: HashMap<String, String>,
}

impl FileNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the file name (with extension) for `url`
    ///
    /// The same URL always gets the same name within a run.
    pub fn file_name(&mut self, url: &Url) -> String {
        let slug = page_slug(url);

        let stem = match self.claimed.get(&slug) {
            None => slug,
            Some(owner) if owner == url.as_str() => slug,
            Some(owner) => {
                let stem = format!("{}_{}", slug, url_hash(url));
                tracing::warn!(
                    "{} and {} share the file name '{}'; writing the latter as '{}'",
                    owner,
                    url,
                    slug,
                    stem
                );
                stem
            }
        };

        self.claimed
            .entry(stem.clone())
            .or_insert_with(|| url.to_string());
        format!("{}.{}", stem, DOCUMENT_EXTENSION)
    }
}

/// Short hex digest of a URL
fn url_hash(url: &Url) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_str().as_bytes());
    let digest = hex::encode(hasher.finalize());
    digest[..HASH_SUFFIX_LEN].to_string()
}
