// SPDX-License-Identifier: MIT
//! Lazy section iteration over a raw archive buffer
//!
//! Splits the buffer on the section delimiter and yields one
//! [`SectionOutcome`] per chunk, in source order. The iterator is cheap to
//! restart from the source buffer and never aborts on a bad section.

use crate::format::{find_token, DOCUMENT_PREFIX, END_MARKER, SECTION_DELIMITER};
use crate::record::DocumentRecord;
use crate::section::{decode_section, SectionError};

/// Longest section preview carried in a skip diagnostic
const PREVIEW_LEN: usize = 50;

/// Why a section produced no record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Whitespace-only chunk between delimiters
    Empty,

    /// Chunk does not start with the document prefix
    NotDocument {
        /// Head of the offending chunk, for diagnostics
        preview: String,
    },
}

/// Outcome of decoding one delimiter-bounded section
#[derive(Debug)]
pub enum SectionOutcome {
    /// A complete record was decoded
    Decoded(DocumentRecord),

    /// The chunk was filtered out before extraction
    Skipped(SkipReason),

    /// Extraction failed; the section is dropped
    Failed(SectionError),
}

/// Iterator over per-section decode outcomes
pub struct Sections<'a> {
    rest: Option<&'a [u8]>,
}

impl<'a> Sections<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Sections { rest: Some(data) }
    }

    /// Next delimiter-bounded chunk, with the archive terminator stripped
    /// from the final one
    fn next_chunk(&mut self) -> Option<&'a [u8]> {
        let rest = self.rest?;
        match find_token(rest, SECTION_DELIMITER) {
            Some(at) => {
                self.rest = Some(&rest[at + SECTION_DELIMITER.len()..]);
                Some(&rest[..at])
            }
            None => {
                self.rest = None;
                Some(rest.strip_suffix(END_MARKER).unwrap_or(rest))
            }
        }
    }
}

impl<'a> Iterator for Sections<'a> {
    type Item = SectionOutcome;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.next_chunk()?;
        let trimmed = chunk.trim_ascii();

        if trimmed.is_empty() {
            return Some(SectionOutcome::Skipped(SkipReason::Empty));
        }
        if !trimmed.starts_with(DOCUMENT_PREFIX.as_bytes()) {
            return Some(SectionOutcome::Skipped(SkipReason::NotDocument {
                preview: preview(trimmed),
            }));
        }

        Some(match decode_section(chunk) {
            Ok(record) => SectionOutcome::Decoded(record),
            Err(err) => SectionOutcome::Failed(err),
        })
    }
}

fn preview(chunk: &[u8]) -> String {
    let head = &chunk[..chunk.len().min(PREVIEW_LEN)];
    String::from_utf8_lossy(head).into_owned()
}
