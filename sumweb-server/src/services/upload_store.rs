//! Filesystem store for uploaded documents
//!
//! Documents live directly in the upload folder, keyed by sanitized
//! filename. There is no locking: a second upload with the same name
//! replaces the first.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info};

/// Upload store errors
#[derive(Debug, Error)]
pub enum UploadError {
    /// Filename is empty after sanitization
    #[error("Invalid filename: {0:?}")]
    InvalidFilename(String),

    #[error("Uploaded file not found: {0}")]
    NotFound(String),

    #[error("Uploaded file is not valid UTF-8: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Make a client-supplied filename safe to use as a storage key
///
/// Path separators, reserved and control characters are removed, spaces
/// become underscores, and anything outside `[A-Za-z0-9._-]` is dropped so
/// the key is also safe in a URL path segment. Leading and trailing dots
/// and underscores are trimmed. Returns `None` when nothing usable is left.
pub fn clean_filename(filename: &str) -> Option<String> {
    let sanitized = sanitize_filename::sanitize(filename);

    let restricted: String = sanitized
        .chars()
        .filter_map(|c| match c {
            c if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') => Some(c),
            c if c.is_whitespace() => Some('_'),
            _ => None,
        })
        .collect();

    let trimmed = restricted.trim_matches(|c: char| c == '.' || c == '_');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Upload folder handle
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    /// Open the upload folder, creating it if absent
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, UploadError> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        info!("Upload folder: {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Save `content` under the sanitized form of `filename`
    ///
    /// Returns the key the document was stored under.
    pub async fn store(&self, filename: &str, content: &[u8]) -> Result<String, UploadError> {
        let key = clean_filename(filename)
            .ok_or_else(|| UploadError::InvalidFilename(filename.to_string()))?;

        fs::write(self.root.join(&key), content).await?;
        debug!(filename = %key, bytes = content.len(), "Stored upload");

        Ok(key)
    }

    /// Read a stored document as UTF-8 text
    ///
    /// The name is sanitized again, so a crafted key can never escape the
    /// upload folder.
    pub async fn retrieve(&self, filename: &str) -> Result<String, UploadError> {
        let key = clean_filename(filename)
            .ok_or_else(|| UploadError::InvalidFilename(filename.to_string()))?;

        let bytes = match fs::read(self.root.join(&key)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(UploadError::NotFound(key));
            }
            Err(e) => return Err(UploadError::Io(e)),
        };

        String::from_utf8(bytes).map_err(|e| UploadError::Decode(e.to_string()))
    }
}
