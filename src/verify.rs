// SPDX-License-Identifier: MIT
//! SHA-1 content verification
//!
//! Checks extracted payloads against the digest declared in the section
//! header. Callers treat a mismatch as a warning, never as cause to drop the
//! payload.

use sha1::{Digest, Sha1};

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("expected digest cannot be empty")]
    EmptyDigest,

    #[error("sha1 mismatch: expected {expected}, got {actual}")]
    Mismatch { expected: String, actual: String },
}

/// Verify `content` against a declared hex digest, case-insensitively
pub fn verify_sha1(content: &[u8], expected: &str) -> Result<(), VerifyError> {
    if expected.is_empty() {
        return Err(VerifyError::EmptyDigest);
    }

    let actual = hex::encode(Sha1::digest(content));
    if actual.eq_ignore_ascii_case(expected) {
        return Ok(());
    }

    Err(VerifyError::Mismatch {
        expected: expected.to_string(),
        actual,
    })
}
