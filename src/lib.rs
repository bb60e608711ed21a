// SPDX-License-Identifier: MIT
//! # ENV Archive Decoder
//!
//! A decoder for the ENV multi-document container format: a single file
//! packing many documents, each preceded by a textual key/value header and
//! followed by a binary length-prefixed payload.
//!
//! ## Format Overview
//!
//! ```text
//! ENV Archive Format
//! ==================
//!
//! archive  := section ( "**%%" section )* "**"
//! section  := header "_SIG/D.C." <LE32 length> <payload bytes>
//! header   := "DOCU" doctype "\n" line*
//! line     := KEY "/" value | "%%" comment | blank
//! ```
//!
//! Sections are separated by the literal delimiter `**%%`; the final section
//! is closed by the `**` terminator. A section is recognized as a document
//! only when its trimmed text starts with `DOCU`. The four bytes after the
//! signature marker declare the payload length, little-endian.
//!
//! ## Decoding Behavior
//!
//! - Malformed sections (missing signature marker, truncated length field)
//!   are dropped with a warning; a parse never aborts on one bad section.
//! - A declared length larger than the remaining bytes truncates the payload
//!   to what is available while keeping the declared value in
//!   [`DocumentRecord::content_length_hint`]. This accepts corrupted length
//!   headers silently and is a known hardening point.
//! - Declared SHA-1 digests are verified after extraction; a mismatch is
//!   reported, never fatal.
//!
//! ## Usage
//!
//! ```rust
//! use envarc::Archive;
//!
//! let mut data = b"DOCUNote\nFILENAME/hello.txt\n_SIG/D.C.".to_vec();
//! data.extend_from_slice(&5u32.to_le_bytes());
//! data.extend_from_slice(b"hello");
//! data.extend_from_slice(b"**");
//!
//! let archive = Archive::from_vec(data).unwrap();
//! assert_eq!(archive.len(), 1);
//! assert_eq!(archive.entries()[0].filename, "hello.txt");
//! assert_eq!(archive.entries()[0].content, b"hello");
//! ```
//!
//! For streaming consumption, [`Sections`] iterates per-section decode
//! outcomes lazily without materializing the whole archive.

pub mod archive;
pub mod extract;
pub mod format;
pub mod header;
pub mod reader;
pub mod record;
pub mod section;
pub mod summary;
pub mod verify;

// Re-export main types
pub use archive::{Archive, LookupError, ParseError};
pub use extract::{extract_all, extract_entry, output_filename, ExtractError};
pub use reader::{SectionOutcome, Sections, SkipReason};
pub use record::DocumentRecord;
pub use section::SectionError;
pub use summary::{Report, Summary};
pub use verify::{verify_sha1, VerifyError};
