//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Strategy`] - Boundary-detection strategy options
//! - [`OutputFormat`] - Output format options
//!
//! The CLI enums convert into their library counterparts
//! ([`crate::boundary::BoundaryStrategy`], [`crate::format::OutputFormat`])
//! so library code stays free of clap.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Extract and parse a WhatsApp chat-export archive into structured
/// message records.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatzip")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatzip \"WhatsApp Chat - Alice.zip\"
    chatzip export.zip -o messages.json --format json
    chatzip export.zip --strategy line
    chatzip export.zip --after 2024-01-01 --before 2024-06-30
    chatzip export.zip --from \"Alice Smith\"")]
pub struct Args {
    /// Path to the export archive (.zip)
    pub archive: String,

    /// Path to output file
    #[arg(short, long, default_value = "parsed_chat.csv")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Boundary-detection strategy
    #[arg(short, long, value_enum, default_value = "span")]
    pub strategy: Strategy,

    /// Archive entry holding the transcript
    #[arg(long, value_name = "NAME", default_value = crate::archive::TRANSCRIPT_ENTRY)]
    pub entry: String,

    /// Filter messages after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Filter messages before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Filter messages from specific author
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,
}

/// Boundary-detection strategy options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Scan the whole transcript for timestamp tokens
    #[default]
    Span,

    /// Scan line by line, folding continuation lines
    Line,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Span => write!(f, "span-scan"),
            Strategy::Line => write!(f, "line-scan"),
        }
    }
}

// Conversion to the library strategy type
impl From<Strategy> for crate::boundary::BoundaryStrategy {
    fn from(strategy: Strategy) -> crate::boundary::BoundaryStrategy {
        match strategy {
            Strategy::Span => crate::boundary::BoundaryStrategy::SpanScan,
            Strategy::Line => crate::boundary::BoundaryStrategy::LineScan,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines - one JSON object per line
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

// Conversion to the library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
