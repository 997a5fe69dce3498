use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::PathBuf;

/// What a single patch run did to its file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchOutcome {
    pub path: PathBuf,
    /// Occurrences of the old literal that were replaced
    pub replacements: usize,
    pub bytes_before: usize,
    pub bytes_after: usize,
    pub digest_before: String,
    pub digest_after: String,
}

impl PatchOutcome {
    pub fn new(path: impl Into<PathBuf>, replacements: usize, before: &str, after: &str) -> Self {
        Self {
            path: path.into(),
            replacements,
            bytes_before: before.len(),
            bytes_after: after.len(),
            digest_before: content_digest(before),
            digest_after: content_digest(after),
        }
    }

    /// Whether the written content differs from what was read
    pub fn changed(&self) -> bool {
        self.digest_before != self.digest_after
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Hex SHA-256 of a text buffer
pub fn content_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
