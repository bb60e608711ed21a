// SPDX-License-Identifier: MIT
//! Archive store and parse driver
//!
//! Drives the section iterator over a raw buffer, logging and skipping bad
//! sections, and holds the resulting ordered record collection.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::reader::{SectionOutcome, Sections, SkipReason};
use crate::record::DocumentRecord;

/// Errors fatal to the whole parse
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("archive data is empty")]
    EmptyInput,

    #[error("failed to read archive file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from record lookup
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("index {index} out of range [0, {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("entry with filename {0:?} not found")]
    NotFound(String),
}

/// An ordered collection of decoded document records plus the raw source
/// buffer
///
/// Populated by a single parse and read-only afterwards. Every record owns
/// its bytes; nothing borrows from the retained buffer.
#[derive(Debug, Default)]
pub struct Archive {
    entries: Vec<DocumentRecord>,
    data: Vec<u8>,
}

impl Archive {
    /// Parse an archive from owned data (takes ownership)
    ///
    /// Fails only when `data` is empty. Malformed sections are logged and
    /// skipped; the parse always runs over the full buffer.
    pub fn from_vec(data: Vec<u8>) -> Result<Self, ParseError> {
        if data.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let mut entries = Vec::new();
        let mut sections = 0usize;
        let mut skipped = 0usize;

        for (index, outcome) in Sections::new(&data).enumerate() {
            sections += 1;
            match outcome {
                SectionOutcome::Decoded(record) => {
                    debug!(
                        index,
                        filename = %record.filename,
                        size = record.content.len(),
                        declared = record.content_length_hint,
                        "decoded section"
                    );
                    entries.push(record);
                }
                SectionOutcome::Skipped(SkipReason::Empty) => {}
                SectionOutcome::Skipped(SkipReason::NotDocument { preview }) => {
                    skipped += 1;
                    warn!(index, %preview, "skipping non-document section");
                }
                SectionOutcome::Failed(err) => {
                    skipped += 1;
                    warn!(index, error = %err, "failed to decode section");
                }
            }
        }

        info!(sections, entries = entries.len(), skipped, "archive parsed");
        Ok(Archive { entries, data })
    }

    /// Parse an archive from borrowed data (copies)
    pub fn from_slice(data: &[u8]) -> Result<Self, ParseError> {
        Self::from_vec(data.to_vec())
    }

    /// Parse an archive file from disk (reads the entire file)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let data = std::fs::read(path)?;
        Self::from_vec(data)
    }

    /// Number of decoded records
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All decoded records, in source order
    pub fn entries(&self) -> &[DocumentRecord] {
        &self.entries
    }

    /// The retained raw source buffer
    pub fn raw(&self) -> &[u8] {
        &self.data
    }

    /// Record at `index`
    pub fn entry(&self, index: usize) -> Result<&DocumentRecord, LookupError> {
        self.entries.get(index).ok_or(LookupError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// First record with the given declared filename
    pub fn entry_by_filename(&self, filename: &str) -> Result<&DocumentRecord, LookupError> {
        self.entries
            .iter()
            .find(|entry| entry.filename == filename)
            .ok_or_else(|| LookupError::NotFound(filename.to_string()))
    }
}
