//! JSON Lines (JSONL) output writer.
//!
//! One JSON object per line; suited for line-oriented tooling and
//! ingestion pipelines.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::error::Result;
use crate::record::ParsedMessage;

/// Writes records to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"date":"01/02/20","time":"09:01:05","author":"Alice","message":"Hello"}
/// {"date":"01/02/20","time":"09:02:10","author":"Bob","message":"Hi"}
/// ```
pub fn write_jsonl(records: &[ParsedMessage], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        let line = serde_json::to_string(record)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
///
/// Same format as [`write_jsonl`], but returns a String instead of writing
/// to a file.
pub fn to_jsonl(records: &[ParsedMessage]) -> Result<String> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}
