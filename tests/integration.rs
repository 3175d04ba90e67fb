//! Integration tests running the whole pipeline against real archives.
//!
//! Fixtures are built on the fly: each test writes a zip archive into a
//! temp directory, exactly the way WhatsApp lays out an export (`_chat.txt`
//! plus optional media entries).

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use chatzip::boundary::BoundaryStrategy;
use chatzip::config::ParserConfig;
use chatzip::filter::{FilterConfig, apply_filters};
use chatzip::parser::ArchiveParser;
use chatzip::{ChatzipError, ParsedMessage};

const TRANSCRIPT: &str = "\
[01/02/20, 09:00:00] Messages to this chat are now secured.
[01/02/20, 09:01:05] Alice Smith: Hello there
[01/02/20, 09:02:10] Bob: Hi
Alice,
how are you?
[01/02/20, 09:03:00] +1 (571) 324-0857: Call me
[02/02/20, 10:00:00] \u{200E}Alice Smith: \u{200E}image omitted";

fn write_archive(dir: &TempDir, name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
    let path = dir.path().join(name);
    let file = std::fs::File::create(&path).unwrap();
    let mut writer = ZipWriter::new(file);
    for (entry, bytes) in entries {
        writer
            .start_file(*entry, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(bytes).unwrap();
    }
    writer.finish().unwrap();
    path
}

fn export_archive(dir: &TempDir, transcript: &str) -> PathBuf {
    write_archive(
        dir,
        "export.zip",
        &[
            ("_chat.txt", transcript.as_bytes()),
            ("IMG-20200201-WA0001.jpg", &[0xff, 0xd8, 0xff]),
        ],
    )
}

#[test]
fn test_full_pipeline_span_scan() {
    let dir = tempfile::tempdir().unwrap();
    let archive = export_archive(&dir, TRANSCRIPT);

    let messages = ArchiveParser::new().parse(&archive).unwrap();

    assert_eq!(messages.len(), 4);
    assert_eq!(
        messages[0],
        ParsedMessage::new("01/02/20", "09:01:05", "Alice Smith", "Hello there")
    );
    assert_eq!(
        messages[1],
        ParsedMessage::new("01/02/20", "09:02:10", "Bob", "Hi Alice, how are you?")
    );
    assert_eq!(
        messages[2],
        ParsedMessage::new("01/02/20", "09:03:00", "+1 (571) 324-0857", "Call me")
    );
    assert_eq!(
        messages[3],
        ParsedMessage::new("02/02/20", "10:00:00", "Alice Smith", "image omitted")
    );
}

#[test]
fn test_full_pipeline_line_scan() {
    let dir = tempfile::tempdir().unwrap();
    let archive = export_archive(&dir, TRANSCRIPT);

    let parser = ArchiveParser::with_strategy(BoundaryStrategy::LineScan);
    let messages = parser.parse(&archive).unwrap();

    assert_eq!(messages.len(), 4);
    assert_eq!(messages[1].message, "Hi Alice, how are you?");
    assert_eq!(messages[3].author, "Alice Smith");
}

#[test]
fn test_no_directional_marks_in_output() {
    let dir = tempfile::tempdir().unwrap();
    let archive = export_archive(&dir, TRANSCRIPT);

    for &strategy in BoundaryStrategy::all() {
        let parser = ArchiveParser::with_strategy(strategy);
        for msg in parser.parse(&archive).unwrap() {
            assert!(!msg.author.contains('\u{200E}'));
            assert!(!msg.message.contains('\u{200E}'));
        }
    }
}

#[test]
fn test_missing_transcript_entry() {
    let dir = tempfile::tempdir().unwrap();
    let archive = write_archive(&dir, "nochat.zip", &[("readme.txt", b"not a chat")]);

    let err = ArchiveParser::new().parse(&archive).unwrap_err();
    assert!(matches!(
        err,
        ChatzipError::MissingTranscriptEntry { ref entry, .. } if entry == "_chat.txt"
    ));
}

#[test]
fn test_invalid_utf8_transcript() {
    let dir = tempfile::tempdir().unwrap();
    let archive = write_archive(&dir, "binary.zip", &[("_chat.txt", &[0xff, 0xfe, 0x01])]);

    let err = ArchiveParser::new().parse(&archive).unwrap_err();
    assert!(err.is_decoding());
}

#[test]
fn test_not_an_archive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.zip");
    std::fs::write(&path, b"definitely not a zip").unwrap();

    let err = ArchiveParser::new().parse(&path).unwrap_err();
    assert!(err.is_malformed_archive());
}

#[test]
fn test_empty_transcript_yields_no_messages() {
    let dir = tempfile::tempdir().unwrap();
    let archive = write_archive(&dir, "empty.zip", &[("_chat.txt", b"")]);

    let messages = ArchiveParser::new().parse(&archive).unwrap();
    assert!(messages.is_empty());
}

#[test]
fn test_header_only_transcript_yields_no_messages() {
    let dir = tempfile::tempdir().unwrap();
    let archive = write_archive(
        &dir,
        "header.zip",
        &[("_chat.txt", b"[01/02/20, 09:00:00] Messages to this chat are now secured.")],
    );

    let messages = ArchiveParser::new().parse(&archive).unwrap();
    assert!(messages.is_empty());
}

#[test]
fn test_custom_entry_name() {
    let dir = tempfile::tempdir().unwrap();
    let archive = write_archive(
        &dir,
        "repacked.zip",
        &[(
            "chat-backup.txt",
            "[01/02/20, 09:00:00] header\n[01/02/20, 09:01:05] Bob: hi".as_bytes(),
        )],
    );

    let parser =
        ArchiveParser::with_config(ParserConfig::new().with_entry_name("chat-backup.txt"));
    let messages = parser.parse(&archive).unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].author, "Bob");
}

#[test]
fn test_parse_then_filter() {
    let dir = tempfile::tempdir().unwrap();
    let archive = export_archive(&dir, TRANSCRIPT);

    let messages = ArchiveParser::new().parse(&archive).unwrap();
    let config = FilterConfig::new().with_author("Alice Smith");
    let filtered = apply_filters(messages, &config);

    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|m| m.author == "Alice Smith"));
}

#[test]
fn test_filter_by_date_range() {
    let dir = tempfile::tempdir().unwrap();
    let archive = export_archive(&dir, TRANSCRIPT);

    let messages = ArchiveParser::new().parse(&archive).unwrap();
    let config = FilterConfig::new()
        .with_date_from("2020-02-02")
        .unwrap()
        .with_date_to("2020-02-02")
        .unwrap();
    let filtered = apply_filters(messages, &config);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].date, "02/02/20");
}

#[test]
fn test_two_invocations_identical() {
    let dir = tempfile::tempdir().unwrap();
    let archive = export_archive(&dir, TRANSCRIPT);

    let parser = ArchiveParser::new();
    let first = parser.parse(&archive).unwrap();
    let second = parser.parse(&archive).unwrap();
    assert_eq!(first, second);
}

#[cfg(all(feature = "csv-output", feature = "json-output"))]
#[test]
fn test_write_all_formats() {
    use chatzip::format::{OutputFormat, write_to_format};

    let dir = tempfile::tempdir().unwrap();
    let archive = export_archive(&dir, TRANSCRIPT);
    let messages = ArchiveParser::new().parse(&archive).unwrap();

    for format in OutputFormat::all() {
        let out = dir
            .path()
            .join(format!("out.{}", format.extension()))
            .to_str()
            .unwrap()
            .to_string();
        write_to_format(&messages, &out, *format).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.contains("Alice Smith"));
    }
}

#[cfg(feature = "json-output")]
#[test]
fn test_jsonl_round_trip() {
    use chatzip::output::to_jsonl;

    let dir = tempfile::tempdir().unwrap();
    let archive = export_archive(&dir, TRANSCRIPT);
    let messages = ArchiveParser::new().parse(&archive).unwrap();

    let jsonl = to_jsonl(&messages).unwrap();
    let reparsed: Vec<ParsedMessage> = jsonl
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(reparsed, messages);
}
