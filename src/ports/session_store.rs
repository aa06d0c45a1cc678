//! SessionStore port - Interface for the session-scoped key-value store.
//!
//! The conversation manager persists one JSON blob per session after every
//! turn. Hosts supply the backing store: in-memory for tests, files or a
//! browser/session database in production.

use async_trait::async_trait;

/// Errors that can occur during session storage operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize session: {0}")]
    Serialization(String),

    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

/// Port for a session-scoped key-value store.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Reads the value stored under `key`, `None` when absent.
    async fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError>;

    /// Removes `key`. Clearing a missing key is not an error.
    async fn clear(&self, key: &str) -> Result<(), SessionStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn SessionStore) {}

    #[test]
    fn errors_display_their_cause() {
        let err = SessionStoreError::Unavailable("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Session store unavailable: quota exceeded");
    }
}
