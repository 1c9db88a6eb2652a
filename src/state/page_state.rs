/// Per-page outcome definitions for the scrape stage
///
/// Every URL in a plan ends in exactly one of these outcomes. Only `Written`
/// produces a file on disk; all others are logged and skipped.
use std::fmt;

/// Represents how processing of a single planned page ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageOutcome {
    // ===== Success =====
    /// Page was fetched, converted, and written to disk
    Written,

    // ===== Skips =====
    /// Server answered with a non-2xx status
    HttpError,

    /// Request failed before a response arrived (DNS, refused, timeout)
    NetworkError,

    /// Page body could not be converted to Markdown
    ConversionFailed,

    /// Converted document could not be written to the output directory
    WriteFailed,
}

impl PageOutcome {
    /// Returns true if this outcome produced an output file
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Written)
    }

    /// Returns true if the failure happened on the network side
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, Self::HttpError | Self::NetworkError)
    }

    /// Short label used in logs and summaries
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Written => "written",
            Self::HttpError => "http_error",
            Self::NetworkError => "network_error",
            Self::ConversionFailed => "conversion_failed",
            Self::WriteFailed => "write_failed",
        }
    }

    /// Returns all possible outcomes
    pub fn all() -> [Self; 5] {
        [
            Self::Written,
            Self::HttpError,
            Self::NetworkError,
            Self::ConversionFailed,
            Self::WriteFailed,
        ]
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
