//! The parsed message record.
//!
//! This module provides [`ParsedMessage`], the structured representation of
//! one transcript message. The parsing pipeline emits these in transcript
//! order; they are plain data and are never mutated after assembly.
//!
//! # Overview
//!
//! A record carries four string fields, all kept exactly as written in the
//! transcript:
//! - `date` — calendar date, locale-dependent day/month ordering
//! - `time` — time of day, `HH:MM` or `HH:MM:SS`
//! - `author` — sender label, possibly a heuristic guess
//! - `message` — body text, line breaks collapsed to spaces
//!
//! # Examples
//!
//! ```
//! use chatzip::ParsedMessage;
//!
//! let msg = ParsedMessage::new("01/02/20", "09:01:05", "Alice Smith", "Hello there");
//! assert_eq!(msg.author(), "Alice Smith");
//! assert_eq!(msg.message(), "Hello there");
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatzip::ParsedMessage;
//!
//! let msg = ParsedMessage::new("01/02/20", "09:01:05", "Bob", "Hi");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: ParsedMessage = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single parsed transcript message.
///
/// All four fields are stored as written in the transcript. The date is not
/// normalized: WhatsApp exports use locale-dependent day/month ordering, and
/// the pipeline does not attempt to guess which convention a transcript
/// uses. The `author` field is always populated, but when the transcript
/// carried no recognizable author label it holds the first two words of the
/// message as a best-effort guess.
///
/// # Construction
///
/// ```
/// use chatzip::ParsedMessage;
///
/// let msg = ParsedMessage::new("18/06/17", "22:47:15", "Alice", "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// Calendar date as written in the transcript, e.g. `18/06/17`.
    pub date: String,

    /// Time of day as written, e.g. `22:47:15` or `22:47`.
    pub time: String,

    /// Sender label. Never empty unless the message body itself was empty.
    ///
    /// When the transcript carries no recognizable author label this holds
    /// the first two words of the body, which may be wrong.
    pub author: String,

    /// Body text with embedded line breaks collapsed to single spaces and
    /// directional marks stripped. May be empty.
    pub message: String,
}

impl ParsedMessage {
    /// Creates a new record from its four fields.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        author: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            author: author.into(),
            message: message.into(),
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the date as written in the transcript.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the time as written in the transcript.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the author label.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Best-effort timestamp for this record.
    ///
    /// Interprets the as-written fields as `DD/MM/YY` or `DD/MM/YYYY` plus
    /// `HH:MM` or `HH:MM:SS`. Returns `None` when the fields don't parse
    /// under that reading; the record itself is still valid. Used by the
    /// date filters.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        const FORMATS: &[&str] = &[
            "%d/%m/%y %H:%M:%S",
            "%d/%m/%Y %H:%M:%S",
            "%d/%m/%y %H:%M",
            "%d/%m/%Y %H:%M",
        ];

        let combined = format!("{} {}", self.date, self.time);
        FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(&combined, fmt).ok())
    }

    /// Returns `true` if this record's body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.message.trim().is_empty()
    }
}
