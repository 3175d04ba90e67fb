//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::error::Result;
use crate::record::ParsedMessage;

/// Writes records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"date": "01/02/20", "time": "09:01:05", "author": "Alice", "message": "Hello"},
///   {"date": "01/02/20", "time": "09:02:10", "author": "Bob", "message": "Hi"}
/// ]
/// ```
pub fn write_json(records: &[ParsedMessage], output_path: &str) -> Result<()> {
    let json = to_json(records)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a JSON array string.
///
/// Same format as [`write_json`], but returns a String instead of writing
/// to a file.
pub fn to_json(records: &[ParsedMessage]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
