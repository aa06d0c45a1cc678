//! The reply contract handed to the presentation layer.

use serde::{Deserialize, Serialize};

use super::booking::AppointmentSlot;
use super::mode::ChatMode;
use crate::domain::intent::SlotName;
use crate::domain::pricing::PriceBreakdown;

/// Structured payload rendered next to the response text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReplyData {
    PriceBreakdown(PriceBreakdown),
    BookingSlots {
        slots: Vec<AppointmentSlot>,
    },
    MissingFields {
        fields: Vec<SlotName>,
    },
    Faq {
        question: String,
        answer: String,
    },
    #[serde(rename_all = "camelCase")]
    Contact {
        phone: String,
        email: String,
        whatsapp_url: String,
        response_time: String,
    },
    BookingConfirmed {
        slot: AppointmentSlot,
    },
}

/// Advisory UI hint. The presentation layer may ignore any of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatAction {
    ShowCalculator,
    ShowForm,
    ShowBooking,
    HighlightPhone { phone: String },
    CallPhone { phone: String },
    OpenWhatsapp { url: String },
    SendEmail { email: String },
}

/// Result of one chat turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode_change: Option<ChatMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ReplyData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ChatAction>,
}

impl ChatReply {
    pub fn text(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            mode_change: None,
            data: None,
            actions: Vec::new(),
        }
    }

    pub fn with_mode(mut self, mode: ChatMode) -> Self {
        self.mode_change = Some(mode);
        self
    }

    pub fn with_data(mut self, data: ReplyData) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_action(mut self, action: ChatAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Generic Swedish failure reply for a turn that returned an error.
    pub fn apology(phone: &str) -> Self {
        Self::text(format!(
            "Ursäkta, något gick fel. Försök igen om en liten stund eller ring oss på {}.",
            phone
        ))
        .with_action(ChatAction::HighlightPhone {
            phone: phone.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_serializes_camel_case_and_omits_empty_fields() {
        let reply = ChatReply::text("Hej").with_mode(ChatMode::Calculator);
        let json = serde_json::to_value(&reply).unwrap();

        assert_eq!(json["response"], "Hej");
        assert_eq!(json["modeChange"], "calculator");
        assert!(json.get("data").is_none());
        assert!(json.get("actions").is_none());
    }

    #[test]
    fn actions_are_tagged_by_type() {
        let json = serde_json::to_value(ChatAction::HighlightPhone {
            phone: "08-123 456 78".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "highlight_phone");
        assert_eq!(json["phone"], "08-123 456 78");

        let json = serde_json::to_value(ChatAction::ShowCalculator).unwrap();
        assert_eq!(json["type"], "show_calculator");
    }

    #[test]
    fn data_is_tagged_by_kind() {
        let json = serde_json::to_value(ReplyData::MissingFields {
            fields: vec![SlotName::Phone, SlotName::Location],
        })
        .unwrap();
        assert_eq!(json["kind"], "missing_fields");
        assert_eq!(json["fields"][1], "location");
    }

    #[test]
    fn apology_offers_phone_fallback() {
        let reply = ChatReply::apology("08-123 456 78");
        assert!(reply.response.contains("08-123 456 78"));
        assert_eq!(reply.actions.len(), 1);
        assert!(reply.mode_change.is_none());
    }
}
