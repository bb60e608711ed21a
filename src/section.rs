// SPDX-License-Identifier: MIT
//! Single-section payload extraction
//!
//! Locates the signature marker separating header from payload, reads the
//! 4-byte little-endian length field, and slices out the payload bytes.

use tracing::warn;

use crate::format::{find_token, CONTENT_LENGTH_HINT_KEY, LENGTH_FIELD_SIZE, SIGNATURE_MARKER};
use crate::header::decode_header;
use crate::record::DocumentRecord;

/// Errors fatal to a single section
///
/// The caller drops the section and continues with the next one.
#[derive(Debug, thiserror::Error)]
pub enum SectionError {
    #[error("no signature marker found")]
    SignatureNotFound,

    #[error("not enough bytes after signature marker for length field")]
    TruncatedLength,
}

/// Decode one section into a complete record
pub fn decode_section(section: &[u8]) -> Result<DocumentRecord, SectionError> {
    let mut record = DocumentRecord::new();

    let sig_index = find_token(section, SIGNATURE_MARKER.as_bytes())
        .ok_or(SectionError::SignatureNotFound)?;

    let header = String::from_utf8_lossy(&section[..sig_index]);
    decode_header(&header, &mut record);

    record.content = extract_content(section, sig_index, &mut record)?;
    Ok(record)
}

/// Slice the payload bytes declared by the length field
///
/// A declared length larger than the remaining bytes yields the full
/// remainder instead of an error; the hint keeps the declared value.
fn extract_content(
    section: &[u8],
    sig_index: usize,
    record: &mut DocumentRecord,
) -> Result<Vec<u8>, SectionError> {
    let length_offset = sig_index + SIGNATURE_MARKER.len();
    let length_end = length_offset + LENGTH_FIELD_SIZE;
    if length_end > section.len() {
        return Err(SectionError::TruncatedLength);
    }

    let declared = u32::from_le_bytes(section[length_offset..length_end].try_into().unwrap());
    record.content_length_hint = declared;
    record
        .metadata
        .insert(CONTENT_LENGTH_HINT_KEY.to_string(), declared.to_string());

    let raw = &section[length_end..];
    if declared as usize <= raw.len() {
        Ok(raw[..declared as usize].to_vec())
    } else {
        warn!(
            declared,
            available = raw.len(),
            "declared content length exceeds available data"
        );
        Ok(raw.to_vec())
    }
}
