//! File-based Session Store Adapter
//!
//! Stores each session blob as a JSON file under a base directory. Keys are
//! sanitised into file names.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{SessionStore, SessionStoreError};

/// File-based key-value store
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    base_path: PathBuf,
}

impl FileSessionStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileSessionStore::new("./data/sessions");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of the file holding `key`
    fn file_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_path.join(format!("{}.json", name))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        match fs::read_to_string(self.file_path(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionStoreError::Io(e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SessionStoreError::Io(e.to_string()))?;

        fs::write(self.file_path(key), value)
            .await
            .map_err(|e| SessionStoreError::Io(e.to_string()))
    }

    async fn clear(&self, key: &str) -> Result<(), SessionStoreError> {
        match fs::remove_file(self.file_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn creates_directory_on_first_write() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("sessions"));

        store.set("chat:abc", "{}").await.unwrap();

        assert!(dir.path().join("sessions").join("chat_abc.json").exists());
        assert_eq!(store.get("chat:abc").await.unwrap().as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn missing_key_is_none_and_clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path());

        assert_eq!(store.get("nothing").await.unwrap(), None);
        store.clear("nothing").await.unwrap();

        store.set("k", "v").await.unwrap();
        store.clear("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[test]
    fn keys_cannot_escape_the_base_path() {
        let store = FileSessionStore::new("/tmp/sessions");
        let path = store.file_path("../../etc/passwd");
        assert_eq!(path, PathBuf::from("/tmp/sessions/______etc_passwd.json"));
    }
}
