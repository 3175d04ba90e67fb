//! Message boundary detection.
//!
//! The transcript has no explicit message delimiter; the only reliable
//! structural anchor is the timestamp the exporter stamps on every
//! top-level message. A multi-line body has no timestamp of its own, so
//! its extra lines must be folded into the preceding message.
//!
//! Two detection strategies exist, matching the two ways real exports have
//! been cut up in the wild. They agree on well-formed single-line
//! transcripts and differ only in how continuation text is carried.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::timestamp::{DIRECTIONAL_MARK, Timestamp, matches_line_start};

/// How message boundaries are located in the raw transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryStrategy {
    /// Scan the whole text for timestamp tokens; each match starts a span
    /// that runs to the next match (or the end of the text).
    #[default]
    SpanScan,

    /// Scan line by line. A line starts a new span when a timestamp is
    /// anchored at its start or when it contains a directional mark; any
    /// other line continues the previous span, joined with a single space.
    LineScan,
}

impl BoundaryStrategy {
    /// Returns all available strategies.
    pub fn all() -> &'static [BoundaryStrategy] {
        &[BoundaryStrategy::SpanScan, BoundaryStrategy::LineScan]
    }
}

impl std::fmt::Display for BoundaryStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryStrategy::SpanScan => write!(f, "span-scan"),
            BoundaryStrategy::LineScan => write!(f, "line-scan"),
        }
    }
}

impl std::str::FromStr for BoundaryStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "span" | "spanscan" | "span-scan" => Ok(BoundaryStrategy::SpanScan),
            "line" | "linescan" | "line-scan" => Ok(BoundaryStrategy::LineScan),
            _ => Err(format!(
                "Unknown boundary strategy: '{}'. Expected 'span' or 'line'",
                s
            )),
        }
    }
}

/// Splits the transcript into message spans using the given strategy.
///
/// Spans are ordered, non-overlapping, and each begins at a detected
/// boundary. A transcript with no boundaries yields an empty vector, not
/// an error. The first span — when any exist — is the export's
/// creation/header event and is discarded by the assembler, not here.
pub fn detect_spans(transcript: &str, strategy: BoundaryStrategy) -> Vec<Cow<'_, str>> {
    match strategy {
        BoundaryStrategy::SpanScan => span_scan(transcript),
        BoundaryStrategy::LineScan => line_scan(transcript),
    }
}

/// Every timestamp match in the text starts a span; spans borrow straight
/// from the transcript.
fn span_scan(transcript: &str) -> Vec<Cow<'_, str>> {
    let starts: Vec<usize> = transcript
        .char_indices()
        .filter(|&(_, c)| c == '[')
        .filter(|&(pos, _)| Timestamp::parse_at(transcript, pos).is_some())
        .map(|(pos, _)| pos)
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(transcript.len());
            Cow::Borrowed(&transcript[start..end])
        })
        .collect()
}

/// Line-oriented detection: timestamp-anchored or marker-carrying lines
/// open a span, every other line is appended to the previous one.
fn line_scan(transcript: &str) -> Vec<Cow<'_, str>> {
    let mut spans: Vec<String> = Vec::new();

    for line in transcript.lines() {
        let starts_message = matches_line_start(line) || line.contains(DIRECTIONAL_MARK);

        if starts_message {
            spans.push(line.to_string());
        } else if let Some(last) = spans.last_mut() {
            last.push(' ');
            last.push_str(line);
        }
        // A continuation line before any boundary has nothing to attach to
    }

    spans.into_iter().map(Cow::Owned).collect()
}
