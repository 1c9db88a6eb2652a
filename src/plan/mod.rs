//! Crawl plan persistence
//!
//! The plan file is the only contract between the scan and scrape stages:
//! scan writes it once, scrape reads it and never modifies it. Operators may
//! edit the file between stages to add or drop pages.

use crate::url::normalize_url;
use crate::PlanError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Fixed name of the plan file inside the output directory
pub const PLAN_FILE_NAME: &str = "sitemap.json";

/// The persisted result of the scan stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlPlan {
    /// The URL the scan was started from
    pub base_url: String,

    /// Absolute, fragment-free, unique page URLs in discovery order
    pub urls: Vec<String>,
}

impl CrawlPlan {
    /// Builds a plan, stripping fragments and dropping duplicates
    ///
    /// The first occurrence of each URL wins. Entries that do not parse as
    /// absolute http(s) URLs are dropped with a warning.
    pub fn new(base_url: impl Into<String>, urls: impl IntoIterator<Item = String>) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();

        for raw in urls {
            match normalize_url(&raw) {
                Ok(url) => {
                    let url = url.to_string();
                    if seen.insert(url.clone()) {
                        unique.push(url);
                    }
                }
                Err(e) => tracing::warn!("Dropping invalid plan entry {}: {}", raw, e),
            }
        }

        Self {
            base_url: base_url.into(),
            urls: unique,
        }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Location of the plan file inside `output_dir`
    pub fn path_in(output_dir: &Path) -> PathBuf {
        output_dir.join(PLAN_FILE_NAME)
    }

    /// Writes the plan as pretty-printed JSON into `output_dir`
    ///
    /// The directory is created if missing and an existing plan is replaced.
    ///
    /// # Returns
    ///
    /// * `Ok(PathBuf)` - Path of the written plan file
    /// * `Err(PlanError)` - Failed to serialize or write the plan
    pub fn save(&self, output_dir: &Path) -> Result<PathBuf, PlanError> {
        std::fs::create_dir_all(output_dir).map_err(|source| PlanError::Io {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let path = Self::path_in(output_dir);
        let json = serde_json::to_string_pretty(self).map_err(PlanError::Serialize)?;
        std::fs::write(&path, json).map_err(|source| PlanError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }

    /// Reads a plan file
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlPlan)` - The plan, deduplicated
    /// * `Err(PlanError::NotFound)` - No file at `path`; the scan step has not run
    /// * `Err(PlanError::Corrupt)` - The file exists but is not a valid plan
    /// * `Err(PlanError::Io)` - Any other read failure
    pub fn load(path: &Path) -> Result<Self, PlanError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PlanError::NotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(source) => {
                return Err(PlanError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let raw: CrawlPlan =
            serde_json::from_str(&content).map_err(|source| PlanError::Corrupt {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::new(raw.base_url, raw.urls))
    }

    /// Reads the plan stored in `output_dir`
    pub fn load_from_dir(output_dir: &Path) -> Result<Self, PlanError> {
        Self::load(&Self::path_in(output_dir))
    }
}
