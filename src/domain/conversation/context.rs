//! Per-turn context derived from recent history.

use serde::{Deserialize, Serialize};

use super::message::Message;
use super::mode::ChatMode;
use crate::domain::intent::{IntentContext, IntentKind};

/// Values recomputed at the start of every turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_intent: Option<IntentKind>,
    /// Intents of the recent window, oldest first.
    #[serde(default)]
    pub recent_intents: Vec<IntentKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<String>,
    #[serde(default)]
    pub message_count: usize,
    #[serde(default)]
    pub has_asked_about_price: bool,
    /// Id of the service shown in the calculator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_service: Option<String>,
    #[serde(default)]
    pub mode: ChatMode,
    #[serde(default)]
    pub filled_slot_count: usize,
}

impl ConversationContext {
    /// Builds the context for `current` from the history that precedes it.
    ///
    /// Only the last `window` messages are scanned for intents and price
    /// questions.
    pub fn from_history(history: &[Message], current: &str, window: usize) -> Self {
        let start = history.len().saturating_sub(window);
        let recent = &history[start..];

        let recent_intents: Vec<IntentKind> = recent.iter().filter_map(|m| m.intent).collect();
        let has_asked_about_price = recent.iter().any(|m| {
            m.intent.is_some_and(|kind| kind.is_price_related())
                || (m.is_user() && m.content.to_lowercase().contains("pris"))
        });

        Self {
            last_intent: recent_intents.last().copied(),
            recent_intents,
            last_message: Some(current.to_string()),
            message_count: history.len() + 1,
            has_asked_about_price,
            ..Self::default()
        }
    }

    /// The ambient signals the intent engine consumes.
    pub fn intent_context(&self, local_hour: u32) -> IntentContext {
        IntentContext {
            has_asked_about_price: self.has_asked_about_price,
            has_selected_service: self.selected_service.is_some(),
            local_hour,
        }
    }
}
