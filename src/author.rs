//! Author extraction from message bodies.
//!
//! After the timestamp bracket has been split off, a message body either
//! begins with an author label (`Author: text`) or it doesn't (system
//! notices, group events). The label comes in a handful of shapes — one to
//! three words, or one of three phone-number layouts — and nothing in the
//! export marks which one is in use, so each shape is checked in turn.
//!
//! Extraction never fails. A body with no colon, or with a colon but no
//! recognizable label, degrades to a heuristic: the first two words of the
//! body are taken as the author. That guess is wrong for plenty of system
//! notices; it is preserved as-is because downstream consumers already
//! depend on the exact output.
//!
//! # Example
//!
//! ```
//! use chatzip::author::split_author;
//!
//! let (author, message) = split_author("Alice Smith: Hello there");
//! assert_eq!(author.as_deref(), Some("Alice Smith"));
//! assert_eq!(message, "Hello there");
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::timestamp::strip_directional_marks;

// One shape per label category, each anchored and testable on its own.
static ONE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\w]+:").unwrap());
static TWO_WORDS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\w]+[\s]+[\w]+:").unwrap());
static THREE_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w]+[\s]+[\w]+[\s]+[\w]+:").unwrap());
// +1 (571) 324-0857:
static PHONE_US_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\d \(\d{3}\) \d{3}-\d{4}:").unwrap());
// +44 123 456 7890:
static PHONE_GROUPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\d{2} \d{3} \d{3} \d{4}:").unwrap());
// +31 6412 3456789 — the exporter omits the colon for this layout
static PHONE_COMPACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\d{2} \d{4} \d{7}").unwrap());

/// Returns `true` if `body` begins with one of the recognized author-label
/// shapes.
///
/// The shapes are mutually distinguishing (by token count and the leading
/// `+`), so the order of checks carries no precedence.
pub fn starts_with_author(body: &str) -> bool {
    ONE_WORD.is_match(body)
        || TWO_WORDS.is_match(body)
        || THREE_WORDS.is_match(body)
        || PHONE_US_PAREN.is_match(body)
        || PHONE_GROUPED.is_match(body)
        || PHONE_COMPACT.is_match(body)
}

/// Splits a message body into `(author, message)`.
///
/// - Body without any `:` — the first two whitespace-separated words become
///   the author, the body stays as the message.
/// - Body with `:` and a recognized label shape — the text before the first
///   `": "` is the author; everything after is the message, with any
///   further `": "` occurrences collapsed to single spaces (a preserved
///   quirk of the format's original tooling).
/// - Body with `:` but no recognized shape — no author; the caller applies
///   the two-word fallback.
///
/// The returned author has directional marks stripped. An empty body yields
/// `(None, "")`.
pub fn split_author(body: &str) -> (Option<String>, String) {
    if body.contains(':') {
        if starts_with_author(body) {
            let mut pieces = body.split(": ");
            let author = pieces.next().unwrap_or_default();
            let message = pieces.collect::<Vec<_>>().join(" ");
            return (Some(strip_directional_marks(author)), message);
        }
        // Colon present but nothing label-shaped in front of it
        return (None, body.to_string());
    }

    (
        Some(strip_directional_marks(&fallback_author(body))),
        body.to_string(),
    )
}

/// The two-word author guess used when no label is recognized.
///
/// Takes the first two whitespace-separated words of `message`; fewer
/// words (or an empty body) yield a shorter or empty guess.
pub fn fallback_author(message: &str) -> String {
    message
        .split_whitespace()
        .take(2)
        .collect::<Vec<_>>()
        .join(" ")
}
