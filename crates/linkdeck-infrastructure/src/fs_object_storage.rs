//! Filesystem-backed ObjectStorage implementation.

use async_trait::async_trait;
use linkdeck_core::avatar::ObjectStorage;
use linkdeck_core::{LinkdeckError, Result};
use std::path::{Component, Path, PathBuf};

/// Stores objects as files under a base directory and serves them from a
/// configured public base URL.
///
/// Suitable for local runs and tests; production deployments would swap in
/// a client for a hosted object store behind the same trait.
pub struct FsObjectStorage {
    base_dir: PathBuf,
    public_base_url: String,
}

impl FsObjectStorage {
    /// # Arguments
    ///
    /// * `base_dir` - Directory objects are written under
    /// * `public_base_url` - URL prefix objects are served from, without a
    ///   trailing slash
    pub fn new(base_dir: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        let mut public_base_url = public_base_url.into();
        while public_base_url.ends_with('/') {
            public_base_url.pop();
        }
        Self {
            base_dir: base_dir.into(),
            public_base_url,
        }
    }

    /// Resolves an object path to a file path, rejecting traversal.
    fn file_path(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path);
        let safe = relative.components().all(|c| matches!(c, Component::Normal(_)));
        if path.is_empty() || !safe {
            return Err(LinkdeckError::validation(
                "path",
                format!("'{}' is not a plain relative object path", path),
            ));
        }
        Ok(self.base_dir.join(relative))
    }
}

#[async_trait]
impl ObjectStorage for FsObjectStorage {
    async fn put(&self, path: &str, bytes: &[u8], content_type: &str) -> Result<String> {
        let file_path = self.file_path(path)?;

        if let Some(expected) = mime_guess::from_path(&file_path).first_raw() {
            if !expected.eq_ignore_ascii_case(content_type) {
                tracing::debug!(path, content_type, expected, "extension does not match content type");
            }
        }

        if let Some(parent) = file_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| LinkdeckError::upstream(format!("create {}: {}", parent.display(), e)))?;
        }
        tokio::fs::write(&file_path, bytes)
            .await
            .map_err(|e| LinkdeckError::upstream(format!("write {}: {}", file_path.display(), e)))?;

        Ok(self.public_url(path))
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let file_path = self.file_path(path)?;
        match tokio::fs::remove_file(&file_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LinkdeckError::upstream(format!(
                "delete {}: {}",
                file_path.display(),
                e
            ))),
        }
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.public_base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_writes_and_returns_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsObjectStorage::new(dir.path(), "https://cdn.example/");

        let url = storage
            .put("avatars/p1-1.png", &[1, 2, 3], "image/png")
            .await
            .unwrap();
        assert_eq!(url, "https://cdn.example/avatars/p1-1.png");
        let written = std::fs::read(dir.path().join("avatars/p1-1.png")).unwrap();
        assert_eq!(written, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsObjectStorage::new(dir.path(), "https://cdn.example");

        storage
            .put("avatars/p1-1.png", &[1], "image/png")
            .await
            .unwrap();
        storage.delete("avatars/p1-1.png").await.unwrap();
        assert!(!dir.path().join("avatars/p1-1.png").exists());
        // Deleting a missing object is not an error.
        storage.delete("avatars/p1-1.png").await.unwrap();
    }

    #[tokio::test]
    async fn test_put_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsObjectStorage::new(dir.path(), "https://cdn.example");

        let err = storage
            .put("../escape.png", &[1], "image/png")
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }
}
