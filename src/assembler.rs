//! Assembly of message spans into parsed records.
//!
//! Each span is normalized (line breaks collapsed, directional marks
//! stripped), validated against the anchored timestamp token, and split
//! into its date, time, author, and body. The first span of every
//! transcript is the export's creation/header event and never becomes a
//! record.
//!
//! Assembly never fails: a span that doesn't carry a well-formed timestamp
//! prefix is skipped, and a body with no recognizable author label falls
//! back to the two-word author guess.

use crate::author::{fallback_author, split_author};
use crate::boundary::{BoundaryStrategy, detect_spans};
use crate::record::ParsedMessage;
use crate::timestamp::{Timestamp, strip_directional_marks};

/// Parses a full transcript into ordered records.
///
/// Records preserve transcript order; no sorting or deduplication is
/// performed. A transcript with zero or one detected boundaries yields no
/// records at all (the lone span, if any, is the header event).
///
/// # Example
///
/// ```
/// use chatzip::assembler::parse_transcript;
/// use chatzip::boundary::BoundaryStrategy;
///
/// let transcript = "\
/// [01/02/20, 09:00:00] Messages to this chat are now secured.
/// [01/02/20, 09:01:05] Alice Smith: Hello there";
///
/// let records = parse_transcript(transcript, BoundaryStrategy::SpanScan);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].author, "Alice Smith");
/// ```
pub fn parse_transcript(transcript: &str, strategy: BoundaryStrategy) -> Vec<ParsedMessage> {
    detect_spans(transcript, strategy)
        .iter()
        .skip(1) // creation/header event
        .filter_map(|span| build_record(span))
        .collect()
}

/// Builds one record from a single span, or `None` when the span has no
/// well-formed timestamp prefix after normalization.
fn build_record(span: &str) -> Option<ParsedMessage> {
    let normalized = normalize_span(span);

    let ts = Timestamp::parse_at(&normalized, 0)?;
    let body = normalized[ts.matched_len()..]
        .strip_prefix(' ')
        .unwrap_or(&normalized[ts.matched_len()..]);

    let (author, message) = split_author(body);
    let author = author.unwrap_or_else(|| fallback_author(&message));

    Some(ParsedMessage::new(ts.date(), ts.time(), author, message))
}

/// Collapses line breaks to single spaces, strips carriage returns and
/// directional marks, and trims the ends.
fn normalize_span(span: &str) -> String {
    let flattened = span.replace('\n', " ").replace('\r', "");
    strip_directional_marks(&flattened).trim().to_string()
}
