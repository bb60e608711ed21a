// SPDX-License-Identifier: MIT
//! Extraction of decoded payloads to a directory
//!
//! Consumes the archive's record collection and writes each payload to disk.
//! Per-record failures are logged and skipped; only output directory creation
//! is fatal.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::archive::Archive;
use crate::record::DocumentRecord;
use crate::verify::verify_sha1;

/// Characters replaced with `_` in output filenames
const FORBIDDEN_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("failed to create output directory {dir:?}: {source}")]
    CreateDir {
        dir: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {filename:?}: {source}")]
    Write {
        filename: String,
        source: std::io::Error,
    },
}

/// Write every record's payload into `out_dir`
///
/// Returns the number of files written. Records with empty content are
/// skipped without error; when a record declares a SHA-1 digest the written
/// content is verified and a mismatch logged.
pub fn extract_all(archive: &Archive, out_dir: &Path) -> Result<usize, ExtractError> {
    create_output_dir(out_dir)?;

    let mut written = 0;
    for (index, entry) in archive.entries().iter().enumerate() {
        match write_entry(entry, index, out_dir) {
            Ok(true) => written += 1,
            Ok(false) => {}
            Err(err) => warn!(index, error = %err, "failed to extract entry"),
        }
    }

    Ok(written)
}

/// Extract a single record into `out_dir`
///
/// Returns whether a file was written (empty content writes nothing).
pub fn extract_entry(
    entry: &DocumentRecord,
    index: usize,
    out_dir: &Path,
) -> Result<bool, ExtractError> {
    create_output_dir(out_dir)?;
    write_entry(entry, index, out_dir)
}

fn create_output_dir(out_dir: &Path) -> Result<(), ExtractError> {
    fs::create_dir_all(out_dir).map_err(|source| ExtractError::CreateDir {
        dir: out_dir.to_path_buf(),
        source,
    })
}

fn write_entry(
    entry: &DocumentRecord,
    index: usize,
    out_dir: &Path,
) -> Result<bool, ExtractError> {
    let filename = output_filename(entry, index);

    if entry.content.is_empty() {
        info!(%filename, "skipping empty file");
        return Ok(false);
    }

    let path = out_dir.join(&filename);
    fs::write(&path, &entry.content).map_err(|source| ExtractError::Write {
        filename: filename.clone(),
        source,
    })?;
    info!(%filename, bytes = entry.content.len(), "extracted");

    if !entry.sha1.is_empty() {
        match verify_sha1(&entry.content, &entry.sha1) {
            Ok(()) => info!(%filename, "sha1 verified"),
            Err(err) => warn!(%filename, error = %err, "sha1 verification failed"),
        }
    }

    Ok(true)
}

/// Derive a filesystem-safe output name for an entry
///
/// Falls back to a synthetic `file_<index>_<doctype><extension>` name when
/// no filename was declared.
pub fn output_filename(entry: &DocumentRecord, index: usize) -> String {
    let name = if entry.filename.is_empty() {
        format!("file_{}_{}{}", index, entry.doc_type, entry.extension)
    } else {
        entry.filename.clone()
    };

    name.chars()
        .map(|c| if FORBIDDEN_CHARS.contains(&c) { '_' } else { c })
        .collect()
}
