//! Filter records by date range and author.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering record collections.
//!
//! Records store their date and time as written, so date filtering relies
//! on [`ParsedMessage::timestamp`], the best-effort `DD/MM` reading of
//! those fields. Records whose fields don't parse under that reading are
//! excluded whenever a date filter is active.
//!
//! # Examples
//!
//! ```
//! use chatzip::filter::{FilterConfig, apply_filters};
//! use chatzip::ParsedMessage;
//!
//! let records = vec![
//!     ParsedMessage::new("01/02/20", "09:01:05", "Alice", "Hello"),
//!     ParsedMessage::new("01/02/20", "09:02:10", "Bob", "Hi"),
//! ];
//!
//! // Case-insensitive author matching
//! let config = FilterConfig::new().with_author("alice");
//! let filtered = apply_filters(records, &config);
//!
//! assert_eq!(filtered.len(), 1);
//! ```

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::ChatzipError;
use crate::record::ParsedMessage;

/// Configuration for filtering records by date and author.
///
/// Filters combine with AND logic: a record must match every active filter
/// to be included.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only records on or after this timestamp.
    pub after: Option<NaiveDateTime>,

    /// Include only records on or before this timestamp.
    pub before: Option<NaiveDateTime>,

    /// Include only records from this author (case-insensitive).
    pub from: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatzipError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatzipError> {
        let naive = parse_filter_date(date_str)?;
        self.after = naive.and_hms_opt(0, 0, 0);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatzipError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatzipError> {
        let naive = parse_filter_date(date_str)?;
        // End of the day to include the full day
        self.before = naive.and_hms_opt(23, 59, 59);
        Ok(self)
    }

    /// Sets the author filter. Matching is case-insensitive for ASCII.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.from = Some(author.into());
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.from.is_some()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }
}

fn parse_filter_date(date_str: &str) -> Result<NaiveDate, ChatzipError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatzipError::invalid_date(date_str))
}

/// Filters a collection of records based on the provided configuration.
///
/// Returns a new vector containing only records that match all active
/// filters. If no filters are active, returns the input unchanged.
///
/// # Filter Behavior
///
/// - **Author filter**: case-insensitive ASCII matching
/// - **Date filters**: records without a parseable timestamp are excluded
/// - **Multiple filters**: combined with AND logic
pub fn apply_filters(records: Vec<ParsedMessage>, config: &FilterConfig) -> Vec<ParsedMessage> {
    if !config.is_active() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| {
            if let Some(ref from) = config.from {
                if !record.author.eq_ignore_ascii_case(from) {
                    return false;
                }
            }

            if config.has_date_filter() {
                match record.timestamp() {
                    Some(ts) => {
                        if config.after.is_some_and(|after| ts < after) {
                            return false;
                        }
                        if config.before.is_some_and(|before| ts > before) {
                            return false;
                        }
                    }
                    None => {
                        // As-written fields don't parse; exclude from
                        // date-filtered results
                        return false;
                    }
                }
            }

            true
        })
        .collect()
}
