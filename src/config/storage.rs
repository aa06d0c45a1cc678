//! Session storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Which session store backs the conversation manager
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
}

/// Session storage configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for the file backend
    pub directory: Option<PathBuf>,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File && self.directory.is_none() {
            return Err(ValidationError::MissingStorageDirectory);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_backend_needs_directory() {
        let config = StorageConfig {
            backend: StorageBackend::File,
            directory: None,
        };
        assert_eq!(config.validate(), Err(ValidationError::MissingStorageDirectory));

        let config = StorageConfig {
            backend: StorageBackend::File,
            directory: Some(PathBuf::from("./data/sessions")),
        };
        assert!(config.validate().is_ok());
    }
}
