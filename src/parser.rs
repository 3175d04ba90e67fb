//! The parsing pipeline facade.
//!
//! [`ArchiveParser`] is the single public entry point: give it the path to
//! a WhatsApp export archive and it returns the ordered list of
//! [`ParsedMessage`] records. Internally it runs the transcript loader,
//! then the assembler; each call is independent and stateless.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use chatzip::parser::ArchiveParser;
//!
//! let parser = ArchiveParser::new();
//! let messages = parser.parse(Path::new("WhatsApp Chat - Alice.zip"))?;
//!
//! for msg in &messages {
//!     println!("{} {} {}: {}", msg.date, msg.time, msg.author, msg.message);
//! }
//! # Ok::<(), chatzip::ChatzipError>(())
//! ```

use std::path::Path;

use crate::archive::read_transcript_entry;
use crate::assembler::parse_transcript;
use crate::boundary::BoundaryStrategy;
use crate::config::ParserConfig;
use crate::error::Result;
use crate::record::ParsedMessage;

/// Parser for WhatsApp export archives.
///
/// Construct with [`new`](Self::new) for the defaults (span-scan boundary
/// detection, `_chat.txt` entry) or [`with_config`](Self::with_config) to
/// customize.
#[derive(Debug, Clone, Default)]
pub struct ArchiveParser {
    config: ParserConfig,
}

impl ArchiveParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Creates a parser using the given boundary strategy.
    pub fn with_strategy(strategy: BoundaryStrategy) -> Self {
        Self {
            config: ParserConfig::new().with_strategy(strategy),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses an export archive into ordered message records.
    ///
    /// # Errors
    ///
    /// Returns [`ChatzipError`](crate::ChatzipError) when the archive
    /// cannot be opened, is not a valid zip, lacks the transcript entry, or
    /// the transcript is not valid UTF-8. Parsing itself never fails; see
    /// [`parse_str`](Self::parse_str).
    pub fn parse(&self, path: &Path) -> Result<Vec<ParsedMessage>> {
        let transcript = read_transcript_entry(path, &self.config.entry_name)?;
        Ok(self.parse_str(&transcript))
    }

    /// Parses an export archive (convenience method accepting a `&str`
    /// path).
    pub fn parse_file(&self, path: &str) -> Result<Vec<ParsedMessage>> {
        self.parse(Path::new(path))
    }

    /// Parses an already-loaded transcript string.
    ///
    /// Useful for testing and for content that didn't come from a zip
    /// archive. This never fails: malformed lines degrade into heuristic
    /// fallbacks rather than errors.
    pub fn parse_str(&self, transcript: &str) -> Vec<ParsedMessage> {
        parse_transcript(transcript, self.config.strategy)
    }
}
