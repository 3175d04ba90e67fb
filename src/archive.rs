//! Transcript extraction from WhatsApp export archives.
//!
//! A WhatsApp export is a zip archive whose transcript always lives in an
//! entry named `_chat.txt` (media attachments sit alongside it and are
//! ignored here). This module is a thin wrapper over the `zip` crate: open
//! the archive, read the one entry, decode it as UTF-8. The archive handle
//! is scoped to each call and released on every exit path.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use chatzip::archive::read_transcript;
//!
//! let transcript = read_transcript(Path::new("export.zip"))?;
//! println!("{} bytes of chat", transcript.len());
//! # Ok::<(), chatzip::ChatzipError>(())
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{ChatzipError, Result};

/// The entry name WhatsApp uses for the transcript in every export.
pub const TRANSCRIPT_ENTRY: &str = "_chat.txt";

/// Reads and decodes the standard `_chat.txt` transcript entry.
///
/// # Errors
///
/// - [`ChatzipError::Io`] — the archive file cannot be opened or read
/// - [`ChatzipError::MalformedArchive`] — the file is not a valid zip
/// - [`ChatzipError::MissingTranscriptEntry`] — no `_chat.txt` entry
/// - [`ChatzipError::Decoding`] — the entry is not valid UTF-8
pub fn read_transcript(path: &Path) -> Result<String> {
    read_transcript_entry(path, TRANSCRIPT_ENTRY)
}

/// Reads and decodes a named transcript entry from the archive.
///
/// Same contract as [`read_transcript`], for the rare export that was
/// repackaged under a different entry name.
pub fn read_transcript_entry(path: &Path, entry: &str) -> Result<String> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| ChatzipError::malformed_archive(e, Some(path.to_path_buf())))?;

    let mut transcript = match archive.by_name(entry) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => {
            return Err(ChatzipError::missing_entry(entry, Some(path.to_path_buf())));
        }
        Err(e) => return Err(ChatzipError::malformed_archive(e, Some(path.to_path_buf()))),
    };

    let mut bytes = Vec::with_capacity(usize::try_from(transcript.size()).unwrap_or(0));
    transcript.read_to_end(&mut bytes)?;

    String::from_utf8(bytes).map_err(|e| ChatzipError::decoding(entry, e))
}

/// Lists the entry names in the archive, in archive order.
///
/// Useful for diagnostics when the transcript entry is missing.
pub fn list_entries(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let archive = ZipArchive::new(file)
        .map_err(|e| ChatzipError::malformed_archive(e, Some(path.to_path_buf())))?;

    Ok(archive.file_names().map(String::from).collect())
}
