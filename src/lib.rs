//! # Chatzip
//!
//! A Rust library for extracting and parsing WhatsApp chat-export archives
//! into structured message records.
//!
//! ## Overview
//!
//! A WhatsApp export is a zip archive whose transcript lives in an entry
//! named `_chat.txt`. The transcript is human-formatted text: every
//! top-level message is stamped with a bracketed timestamp, bodies may span
//! several lines, and the author label comes in a handful of shapes (names
//! of one to three words, or phone numbers). Chatzip turns that into an
//! ordered sequence of [`ParsedMessage`] records, each with a date, time,
//! author, and body — all kept exactly as written.
//!
//! Parsing is deliberately forgiving: lines that don't fit the format
//! degrade into heuristic fallbacks instead of failing the run. Only the
//! archive layer produces errors (bad zip, missing entry, invalid UTF-8).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use chatzip::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parser = ArchiveParser::new();
//!     let messages = parser.parse(Path::new("WhatsApp Chat - Alice.zip"))?;
//!
//!     // Keep one author's messages
//!     let config = FilterConfig::new().with_author("Alice Smith");
//!     let filtered = apply_filters(messages, &config);
//!
//!     // Write to CSV
//!     write_csv(&filtered, "output.csv")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Boundary Strategies
//!
//! Two detection strategies exist for locating message starts; they agree
//! on well-formed transcripts and differ only in how odd continuation
//! text is carried:
//!
//! ```rust
//! use chatzip::parser::ArchiveParser;
//! use chatzip::boundary::BoundaryStrategy;
//!
//! let parser = ArchiveParser::with_strategy(BoundaryStrategy::LineScan);
//! let messages = parser.parse_str("[01/02/20, 09:00:00] header\n[01/02/20, 09:01:05] Bob: hi");
//! assert_eq!(messages.len(), 1);
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — **Pipeline facade** (start here)
//!   - [`ArchiveParser`](parser::ArchiveParser) — archive path in, records out
//! - [`config`] — [`ParserConfig`](config::ParserConfig) (strategy, entry name)
//! - [`record`] — [`ParsedMessage`] output record
//! - [`archive`] — transcript extraction from the zip container
//! - [`boundary`] — [`BoundaryStrategy`](boundary::BoundaryStrategy) and span detection
//! - [`timestamp`] — timestamp token parsing, directional-mark handling
//! - [`author`] — author-label extraction and the two-word fallback
//! - [`assembler`] — span normalization and record assembly
//! - [`filter`] — [`FilterConfig`](filter::FilterConfig), [`apply_filters`](filter::apply_filters)
//! - [`format`] / [`output`] — CSV / JSON / JSONL writers
//! - [`cli`] — CLI types (binary only)
//! - [`error`] — [`ChatzipError`], [`Result`]

pub mod archive;
pub mod assembler;
pub mod author;
pub mod boundary;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod output;
pub mod parser;
pub mod record;
pub mod timestamp;

// Re-export the main types at the crate root for convenience
pub use error::{ChatzipError, Result};
pub use record::ParsedMessage;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatzip::prelude::*;
/// ```
pub mod prelude {
    // Core record type
    pub use crate::ParsedMessage;

    // Error types
    pub use crate::error::{ChatzipError, Result};

    // Pipeline facade and configuration
    pub use crate::boundary::BoundaryStrategy;
    pub use crate::config::ParserConfig;
    pub use crate::parser::ArchiveParser;

    // Archive access
    pub use crate::archive::{TRANSCRIPT_ENTRY, read_transcript};

    // Filtering
    pub use crate::filter::{FilterConfig, apply_filters};

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, to_jsonl, write_json, write_jsonl};
    pub use crate::format::{OutputFormat, write_to_format};
}
