//! CSV output writer.

use std::fs::File;

use crate::error::Result;
use crate::record::ParsedMessage;

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date`, `Time`, `Author`, `Message`
/// - Encoding: UTF-8
pub fn write_csv(records: &[ParsedMessage], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);

    write_records(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing
/// to a file.
pub fn to_csv(records: &[ParsedMessage]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    write_records(&mut writer, records)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| std::io::Error::other(e.to_string()).into())
}

fn write_records<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    records: &[ParsedMessage],
) -> Result<()> {
    writer.write_record(["Date", "Time", "Author", "Message"])?;

    for record in records {
        writer.write_record([
            record.date.as_str(),
            record.time.as_str(),
            record.author.as_str(),
            record.message.as_str(),
        ])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::NamedTempFile;

    fn sample_records() -> Vec<ParsedMessage> {
        vec![
            ParsedMessage::new("01/02/20", "09:01:05", "Alice Smith", "Hello there"),
            ParsedMessage::new("01/02/20", "09:02:10", "Bob", "Hi"),
        ]
    }

    #[test]
    fn test_write_csv_basic() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_csv(&sample_records(), path).unwrap();

        let mut content = String::new();
        std::fs::File::open(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        assert!(content.contains("Date;Time;Author;Message"));
        assert!(content.contains("01/02/20;09:01:05;Alice Smith;Hello there"));
        assert!(content.contains("01/02/20;09:02:10;Bob;Hi"));
    }

    #[test]
    fn test_to_csv_quotes_delimiter_in_body() {
        let records = vec![ParsedMessage::new(
            "01/02/20",
            "09:01:05",
            "Alice",
            "semi;colon",
        )];
        let csv = to_csv(&records).unwrap();
        assert!(csv.contains("\"semi;colon\""));
    }

    #[test]
    fn test_to_csv_empty_records() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(csv.trim_end(), "Date;Time;Author;Message");
    }
}
