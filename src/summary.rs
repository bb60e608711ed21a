// SPDX-License-Identifier: MIT
//! Archive summary statistics and reporting

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::archive::Archive;
use crate::record::DocumentRecord;

/// Aggregate statistics over a parsed archive
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub total_entries: usize,

    /// Entry counts keyed by declared extension
    pub extensions: HashMap<String, usize>,

    /// Entry counts keyed by document type
    pub document_types: HashMap<String, usize>,

    /// Total payload bytes across all entries
    pub total_content_size: usize,
}

impl Summary {
    pub fn from_archive(archive: &Archive) -> Self {
        let mut summary = Summary {
            total_entries: archive.len(),
            ..Summary::default()
        };

        for entry in archive.entries() {
            if !entry.extension.is_empty() {
                *summary.extensions.entry(entry.extension.clone()).or_default() += 1;
            }
            if !entry.doc_type.is_empty() {
                *summary
                    .document_types
                    .entry(entry.doc_type.clone())
                    .or_default() += 1;
            }
            summary.total_content_size += entry.content.len();
        }

        summary
    }
}

/// Human-readable per-entry report over a parsed archive
pub struct Report<'a>(pub &'a Archive);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Archive Summary ===")?;
        writeln!(f, "Total entries: {}", self.0.len())?;

        for (index, entry) in self.0.entries().iter().enumerate() {
            writeln!(f)?;
            write_entry_details(f, index + 1, entry)?;
        }

        Ok(())
    }
}

fn write_entry_details(
    f: &mut fmt::Formatter<'_>,
    index: usize,
    entry: &DocumentRecord,
) -> fmt::Result {
    writeln!(f, "Entry {index}:")?;
    writeln!(f, "  Document Type: {}", entry.doc_type)?;
    writeln!(f, "  Filename: {}", entry.filename)?;
    writeln!(f, "  Extension: {}", entry.extension)?;
    writeln!(f, "  GUID: {}", entry.guid)?;
    writeln!(f, "  Type: {}", entry.kind)?;
    writeln!(f, "  Content Size: {} bytes", entry.content.len())?;

    if !entry.sha1.is_empty() {
        writeln!(f, "  SHA1: {}", entry.sha1)?;
    }

    // Keys already shown above are elided; the rest are sorted for stable
    // output
    let mut extra: Vec<(&String, &String)> = entry
        .metadata
        .iter()
        .filter(|(key, _)| !DocumentRecord::is_promoted_key(key))
        .collect();
    extra.sort_by(|(a, _), (b, _)| a.cmp(b));

    if !extra.is_empty() {
        writeln!(f, "  Additional Metadata:")?;
        for (key, value) in extra {
            writeln!(f, "    {key}: {value}")?;
        }
    }

    Ok(())
}
