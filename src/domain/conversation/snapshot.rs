//! The persisted session blob.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::message::Message;
use super::state::ConversationState;

/// Errors encoding or decoding a session blob.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to encode session snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode session snapshot: {0}")]
    Decode(#[source] serde_json::Error),
}

/// State plus the most recent messages, as stored between turns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: ConversationState,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl SessionSnapshot {
    /// Snapshot keeping at most the last `keep` messages.
    pub fn capture(state: &ConversationState, messages: &[Message], keep: usize) -> Self {
        let start = messages.len().saturating_sub(keep);
        Self {
            state: state.clone(),
            messages: messages[start..].to_vec(),
        }
    }

    /// JSON encoding; timestamps become RFC 3339 strings.
    pub fn encode(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(SnapshotError::Encode)
    }

    pub fn decode(raw: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(raw).map_err(SnapshotError::Decode)
    }
}
