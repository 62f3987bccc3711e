// Rust guideline compliant 2026-10-12

//! Blob storage for uploaded images.

use crate::{BlobRef, Error, Result};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Storage for binary uploads addressed by key.
pub trait BlobStore {
    /// Stores `bytes` under a key derived from the content and `filename`.
    ///
    /// # Returns
    ///
    /// The public URL and the stored key.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload is rejected or cannot be written.
    fn upload(&self, bytes: &[u8], filename: &str) -> Result<BlobRef>;

    /// Deletes a stored blob.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the key does not exist.
    fn delete(&self, key: &str) -> Result<()>;
}

/// Blob store backed by a local directory.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
    base_url: String,
}

impl FsBlobStore {
    /// Creates a blob store rooted at `root`, serving files under `base_url`.
    pub fn new(root: PathBuf, base_url: impl Into<String>) -> Self {
        Self {
            root,
            base_url: base_url.into(),
        }
    }

    /// Returns the storage directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the public URL for a key.
    pub fn url_for(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains('/') || key.contains('\\') || key.starts_with('.') {
            return Err(Error::InvalidBlob(format!("Invalid key: {key}")));
        }
        Ok(self.root.join(key))
    }
}

impl BlobStore for FsBlobStore {
    fn upload(&self, bytes: &[u8], filename: &str) -> Result<BlobRef> {
        if bytes.is_empty() {
            return Err(Error::InvalidBlob("Upload is empty".to_string()));
        }
        let name = sanitize_filename(filename);
        if name.is_empty() {
            return Err(Error::InvalidBlob(format!("Unusable file name: {filename}")));
        }

        let digest = format!("{:x}", Sha256::digest(bytes));
        let key = format!("{}-{}", &digest[..12], name);

        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.path_for(&key)?, bytes)?;
        tracing::debug!(key = %key, size = bytes.len(), "Stored blob");

        Ok(BlobRef {
            url: self.url_for(&key),
            key,
        })
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Err(Error::NotFound(format!("blob {key}")));
        }
        std::fs::remove_file(path)?;
        tracing::debug!(key, "Deleted blob");
        Ok(())
    }
}

/// Reduces a file name to `[A-Za-z0-9._-]`, dropping any directory part.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    cleaned.trim_start_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("My Logo (1).png"), "My-Logo-1.png");
        assert_eq!(sanitize_filename("C:\\images\\logo.svg"), "logo.svg");
        assert_eq!(sanitize_filename("..."), "");
    }

    #[test]
    fn test_upload_then_delete() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsBlobStore::new(temp_dir.path().join("blobs"), "/media/");

        let blob = store.upload(b"png-bytes", "logo.png").unwrap();
        assert!(blob.key.ends_with("-logo.png"));
        assert_eq!(blob.url, format!("/media/{}", blob.key));
        assert!(temp_dir.path().join("blobs").join(&blob.key).exists());

        store.delete(&blob.key).unwrap();
        assert!(!temp_dir.path().join("blobs").join(&blob.key).exists());
        assert!(matches!(store.delete(&blob.key), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_rejects_empty_upload_and_bad_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsBlobStore::new(temp_dir.path().to_path_buf(), "/media");
        assert!(matches!(store.upload(b"", "a.png"), Err(Error::InvalidBlob(_))));
        assert!(matches!(store.upload(b"x", "///"), Err(Error::InvalidBlob(_))));
        assert!(matches!(store.delete("../x"), Err(Error::InvalidBlob(_))));
    }
}
