// SPDX-License-Identifier: MIT
//! Header text decoding
//!
//! Parses the textual header preceding a section's signature marker into a
//! record's named fields and its generic metadata map. Absence of fields is a
//! valid outcome; decoding never fails.

use crate::format::{COMMENT_PREFIX, DOCUMENT_PREFIX, SIGNATURE_MARKER};
use crate::record::DocumentRecord;

/// Decode a section header into `record`
pub fn decode_header(header: &str, record: &mut DocumentRecord) {
    let lines: Vec<&str> = header.split('\n').collect();

    if let Some(first) = lines.first() {
        decode_doc_type(first, record);
    }

    for line in &lines {
        decode_metadata_line(line, record);
    }
}

/// Extract the document type from the first header line
fn decode_doc_type(first_line: &str, record: &mut DocumentRecord) {
    let trimmed = first_line.trim();
    if let Some(rest) = trimmed.strip_prefix(DOCUMENT_PREFIX) {
        let doc_type = rest.trim_matches(|c: char| !c.is_alphanumeric());
        if !doc_type.is_empty() {
            record.doc_type = doc_type.to_string();
        }
    }
}

/// Decode a single `KEY/value` line, if it is one
fn decode_metadata_line(line: &str, record: &mut DocumentRecord) {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return;
    }
    if line.starts_with(SIGNATURE_MARKER) {
        return;
    }

    // Key and value split on the first '/' only
    if let Some((key, value)) = line.split_once('/') {
        let key = key.trim();
        let value = value.trim();
        record.metadata.insert(key.to_string(), value.to_string());
        record.promote_field(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(header: &str) -> DocumentRecord {
        let mut record = DocumentRecord::default();
        decode_header(header, &mut record);
        record
    }

    #[test]
    fn test_round_trip_header() {
        let record = decode("DOCUTest\nFILENAME/test.txt\nGUID/1234\nSHA1/abcd");

        assert_eq!(record.doc_type, "Test");
        assert_eq!(record.filename, "test.txt");
        assert_eq!(record.guid, "1234");
        assert_eq!(record.sha1, "abcd");
        assert_eq!(record.metadata["FILENAME"], "test.txt");
        assert_eq!(record.metadata["GUID"], "1234");
        assert_eq!(record.metadata["SHA1"], "abcd");
    }

    #[test]
    fn test_doc_type_strips_non_alphanumeric() {
        let record = decode("  DOCU Invoice-2 !!\n");
        assert_eq!(record.doc_type, "Invoice-2");
    }

    #[test]
    fn test_doc_type_trims_surrounding_punctuation_only() {
        let record = decode("DOCU--Note--");
        assert_eq!(record.doc_type, "Note");
    }

    #[test]
    fn test_first_line_without_prefix_leaves_doc_type_empty() {
        let record = decode("something else\nFILENAME/a.txt");
        assert_eq!(record.doc_type, "");
        assert_eq!(record.filename, "a.txt");
    }

    #[test]
    fn test_doctype_key_used_when_first_line_has_no_type() {
        let record = decode("DOCU\nDOCTYPE/Fallback");
        assert_eq!(record.doc_type, "Fallback");
    }

    #[test]
    fn test_first_line_doc_type_wins_over_doctype_key() {
        let record = decode("DOCUPrimary\nDOCTYPE/Secondary");
        assert_eq!(record.doc_type, "Primary");
        assert_eq!(record.metadata["DOCTYPE"], "Secondary");
    }

    #[test]
    fn test_comment_lines_are_skipped() {
        let record = decode("DOCUTest\n%% FILENAME/ignored.txt\nFILENAME/real.txt");
        assert_eq!(record.filename, "real.txt");
        assert!(!record.metadata.contains_key("%% FILENAME"));
    }

    #[test]
    fn test_signature_marker_line_is_not_a_pair() {
        let record = decode("DOCUTest\n_SIG/D.C.");
        assert!(!record.metadata.contains_key("_SIG"));
    }

    #[test]
    fn test_unknown_keys_land_in_metadata_only() {
        let record = decode("DOCUTest\nAUTHOR/someone\nREVISION/7");
        assert_eq!(record.metadata["AUTHOR"], "someone");
        assert_eq!(record.metadata["REVISION"], "7");
        assert_eq!(record.filename, "");
    }

    #[test]
    fn test_value_keeps_later_slashes() {
        let record = decode("DOCUTest\nFILENAME/dir/sub/file.txt");
        assert_eq!(record.filename, "dir/sub/file.txt");
    }

    #[test]
    fn test_key_and_value_are_trimmed() {
        let record = decode("DOCUTest\n  FILENAME  /  spaced.txt  ");
        assert_eq!(record.filename, "spaced.txt");
        assert_eq!(record.metadata["FILENAME"], "spaced.txt");
    }

    #[test]
    fn test_empty_header_is_valid() {
        let record = decode("");
        assert_eq!(record, DocumentRecord::default());
    }

    #[test]
    fn test_line_without_slash_is_ignored() {
        let record = decode("DOCUTest\njust some text");
        assert!(record.metadata.is_empty());
    }
}
