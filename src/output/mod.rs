//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines (one JSON per line) - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatzip::Result<()> {
//! use chatzip::output::{write_csv, write_json, write_jsonl, to_csv};
//! use chatzip::ParsedMessage;
//!
//! let records = vec![
//!     ParsedMessage::new("01/02/20", "09:01:05", "Alice", "Hello!"),
//!     ParsedMessage::new("01/02/20", "09:02:10", "Bob", "Hi there!"),
//! ];
//!
//! // Write to files
//! write_csv(&records, "output.csv")?;
//! write_json(&records, "output.json")?;
//! write_jsonl(&records, "output.jsonl")?;
//!
//! // Or get as strings
//! let csv_string = to_csv(&records)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
