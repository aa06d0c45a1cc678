//! Chat messages and their attachments.

use serde::{Deserialize, Serialize};

use super::reply::ReplyData;
use crate::domain::foundation::{MessageId, Timestamp};
use crate::domain::intent::IntentKind;

/// Who sent a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Bot,
}

/// Image metadata attached to a user message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub url: String,
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    pub mime_type: String,
}

/// A message in the conversation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    pub role: MessageRole,
    pub timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<IntentKind>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Handler payload shown alongside a bot message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ReplyData>,
}

impl Message {
    pub fn user(content: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            id: MessageId::new(),
            content: content.into(),
            role: MessageRole::User,
            timestamp,
            intent: None,
            attachments: Vec::new(),
            metadata: None,
        }
    }

    pub fn bot(content: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            role: MessageRole::Bot,
            ..Self::user(content, timestamp)
        }
    }

    pub fn with_intent(mut self, intent: IntentKind) -> Self {
        self.intent = Some(intent);
        self
    }

    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = attachments;
        self
    }

    pub fn with_metadata(mut self, metadata: Option<ReplyData>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bot_message_keeps_content_and_role() {
        let msg = Message::bot("Hej!", Timestamp::now());
        assert_eq!(msg.role, MessageRole::Bot);
        assert_eq!(msg.content, "Hej!");
        assert!(!msg.is_user());
    }

    #[test]
    fn empty_optionals_are_omitted() {
        let msg = Message::user("Hej", Timestamp::now());
        let json = serde_json::to_value(&msg).unwrap();
        assert!(json.get("intent").is_none());
        assert!(json.get("attachments").is_none());
        assert_eq!(json["role"], "user");
    }

    #[test]
    fn attachments_roundtrip() {
        let msg = Message::user("Se bild", Timestamp::now()).with_attachments(vec![Attachment {
            id: "a1".to_string(),
            url: "https://cdn.example.se/a1.jpg".to_string(),
            name: "kok.jpg".to_string(),
            size: 20_480,
            mime_type: "image/jpeg".to_string(),
        }]);
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"mimeType\":\"image/jpeg\""));
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
