//! Parser configuration.
//!
//! [`ParserConfig`] selects the boundary-detection strategy and the archive
//! entry the transcript is read from. Defaults match a stock WhatsApp
//! export; the builder methods exist for the occasional repackaged archive
//! or for comparing the two detection strategies.
//!
//! # Example
//!
//! ```rust
//! use chatzip::boundary::BoundaryStrategy;
//! use chatzip::config::ParserConfig;
//!
//! let config = ParserConfig::new()
//!     .with_strategy(BoundaryStrategy::LineScan)
//!     .with_entry_name("chat-backup.txt");
//! ```

use serde::{Deserialize, Serialize};

use crate::archive::TRANSCRIPT_ENTRY;
use crate::boundary::BoundaryStrategy;

/// Configuration for archive parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Boundary-detection strategy (default: span-scan)
    pub strategy: BoundaryStrategy,

    /// Archive entry holding the transcript (default: `_chat.txt`)
    pub entry_name: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            strategy: BoundaryStrategy::SpanScan,
            entry_name: TRANSCRIPT_ENTRY.to_string(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the boundary-detection strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: BoundaryStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the archive entry the transcript is read from.
    #[must_use]
    pub fn with_entry_name(mut self, entry: impl Into<String>) -> Self {
        self.entry_name = entry.into();
        self
    }
}
