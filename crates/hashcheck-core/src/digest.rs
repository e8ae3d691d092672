//! SHA-256 digest engine.
//!
//! The engine itself is a pure function over an in-memory byte slice. The
//! readers around it materialise a whole file first and map any I/O failure
//! to [`HashError::InputUnavailable`].

use crate::error::{HashError, Result};
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::Path;

/// Length of a rendered SHA-256 digest (32 bytes, two hex digits each).
pub const DIGEST_HEX_LEN: usize = 64;

/// Entire content of a selected file, loaded into memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteInput(Vec<u8>);

impl ByteInput {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for ByteInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for ByteInput {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

/// Lowercase hex rendering of a SHA-256 digest.
///
/// Always exactly 64 characters from `[0-9a-f]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigestHex(String);

impl DigestHex {
    /// Accept an already-rendered digest if it has the canonical shape.
    /// Uppercase input is rejected rather than folded.
    pub fn parse(s: &str) -> Option<Self> {
        let canonical = s.len() == DIGEST_HEX_LEN
            && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
        canonical.then(|| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DigestHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DigestHex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for DigestHex {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DigestHex {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Compute SHA-256 of `input` in one pass and render it as lowercase hex.
pub fn compute_digest(input: &[u8]) -> DigestHex {
    let mut hasher = Sha256::new();
    hasher.update(input);
    let digest = hasher.finalize();
    tracing::debug!(len = input.len(), "computed sha256");
    DigestHex(hex::encode(digest))
}

/// Read a whole file into memory.
pub fn read_input(path: &Path) -> Result<ByteInput> {
    std::fs::read(path)
        .map(ByteInput::new)
        .map_err(|e| HashError::input_unavailable(path, e))
}

/// Async variant of [`read_input`] for use inside the digest task.
pub async fn read_input_async(path: &Path) -> Result<ByteInput> {
    tokio::fs::read(path)
        .await
        .map(ByteInput::new)
        .map_err(|e| HashError::input_unavailable(path, e))
}

/// Read `path` fully and return its digest.
pub fn digest_file(path: &Path) -> Result<DigestHex> {
    let input = read_input(path)?;
    Ok(compute_digest(input.as_bytes()))
}
