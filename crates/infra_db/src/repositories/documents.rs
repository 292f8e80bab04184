//! Filesystem document store
//!
//! Persists uploaded claim documents under a configurable root directory.
//! File names are flattened to their final path component before writing,
//! so an upload cannot escape the root. Saving under an existing name
//! overwrites the previous file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use domain_claims::{DocumentStore, StoreError};

/// Filesystem-backed document store
#[derive(Debug, Clone)]
pub struct FilesystemDocumentStore {
    root: PathBuf,
}

impl FilesystemDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory documents are written under
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn sanitized_name(file_name: &str) -> Result<&str, StoreError> {
        Path::new(file_name)
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                StoreError::WriteRejected(format!("Unusable file name '{}'", file_name))
            })
    }
}

#[async_trait]
impl DocumentStore for FilesystemDocumentStore {
    async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<String, StoreError> {
        let name = Self::sanitized_name(file_name)?;

        fs::create_dir_all(&self.root).await?;
        let target = self.root.join(name);
        fs::write(&target, bytes).await?;

        debug!(path = %target.display(), size = bytes.len(), "Document written");
        Ok(target.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_writes_the_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemDocumentStore::new(dir.path());

        let path = store.save("timesheet.pdf", b"%PDF-1.4").await.unwrap();

        let written = tokio::fs::read(&path).await.unwrap();
        assert_eq!(written, b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_save_flattens_directory_components() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemDocumentStore::new(dir.path());

        let path = store.save("../../etc/timesheet.pdf", b"data").await.unwrap();

        assert!(path.ends_with("timesheet.pdf"));
        assert!(Path::new(&path).starts_with(dir.path()));
    }

    #[tokio::test]
    async fn test_same_name_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemDocumentStore::new(dir.path());

        store.save("a.pdf", b"one").await.unwrap();
        let path = store.save("a.pdf", b"two").await.unwrap();

        let written = tokio::fs::read(&path).await.unwrap();
        assert_eq!(written, b"two");
    }
}
