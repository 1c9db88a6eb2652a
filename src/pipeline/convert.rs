//! HTML to text conversion

use thiserror::Error;

/// Failure to turn a fetched HTML body into a document
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Markdown conversion failed: {0}")]
    Markdown(#[from] std::io::Error),

    #[error("Unsupported content: {0}")]
    Unsupported(String),
}

/// Converts a fetched HTML body into the normalized text stored on disk
pub trait TextConverter: Send + Sync {
    fn convert(&self, html: &str) -> Result<String, ConversionError>;
}

/// Default converter producing Markdown
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownConverter;

impl TextConverter for MarkdownConverter {
    fn convert(&self, html: &str) -> Result<String, ConversionError> {
        Ok(htmd::convert(html)?)
    }
}
