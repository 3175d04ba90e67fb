//! Unified error types for chatzip.
//!
//! This module provides a single [`ChatzipError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular
//! crates like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! Parsing itself never produces an error: unparseable lines and ambiguous
//! authors degrade into heuristic fallbacks instead of failing the run.
//! Errors only come from the archive layer (I/O, zip structure, UTF-8) and
//! from invalid configuration such as malformed filter dates.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatzip operations.
///
/// # Example
///
/// ```rust
/// use chatzip::error::Result;
/// use chatzip::ParsedMessage;
///
/// fn my_function() -> Result<Vec<ParsedMessage>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatzipError>;

/// The error type for all chatzip operations.
///
/// Each variant contains context about what went wrong and, where
/// applicable, the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatzipError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The archive file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The file is not a valid zip archive.
    #[error("Malformed archive{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    MalformedArchive {
        /// The underlying zip error
        #[source]
        source: zip::result::ZipError,
        /// The archive path, if available
        path: Option<PathBuf>,
    },

    /// The archive does not contain the expected transcript entry.
    ///
    /// WhatsApp exports always place the transcript in an entry named
    /// `_chat.txt`; an archive without it is not a chat export.
    #[error("Archive is missing transcript entry '{entry}'{}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    MissingTranscriptEntry {
        /// The entry name that was looked up
        entry: String,
        /// The archive path, if available
        path: Option<PathBuf>,
    },

    /// The transcript bytes are not valid UTF-8 text.
    #[error("Transcript entry '{entry}' is not valid UTF-8: {source}")]
    Decoding {
        /// The entry whose contents failed to decode
        entry: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested output format is unavailable or unrecognized.
    #[error("Invalid output format: {message}")]
    InvalidFormat {
        /// Description of what's wrong
        message: String,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatzipError {
    /// Creates a malformed-archive error.
    pub fn malformed_archive(source: zip::result::ZipError, path: Option<PathBuf>) -> Self {
        ChatzipError::MalformedArchive { source, path }
    }

    /// Creates a missing-transcript-entry error.
    pub fn missing_entry(entry: impl Into<String>, path: Option<PathBuf>) -> Self {
        ChatzipError::MissingTranscriptEntry {
            entry: entry.into(),
            path,
        }
    }

    /// Creates a decoding error for a transcript entry.
    pub fn decoding(entry: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatzipError::Decoding {
            entry: entry.into(),
            source,
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatzipError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid output format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        ChatzipError::InvalidFormat {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatzipError::Io(_))
    }

    /// Returns `true` if this is a malformed-archive error.
    pub fn is_malformed_archive(&self) -> bool {
        matches!(self, ChatzipError::MalformedArchive { .. })
    }

    /// Returns `true` if this is a missing-transcript-entry error.
    pub fn is_missing_entry(&self) -> bool {
        matches!(self, ChatzipError::MissingTranscriptEntry { .. })
    }

    /// Returns `true` if this is a UTF-8 decoding error.
    pub fn is_decoding(&self) -> bool {
        matches!(self, ChatzipError::Decoding { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatzipError::InvalidDate { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
