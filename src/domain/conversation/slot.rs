use serde::{Deserialize, Serialize};

use crate::domain::intent::{SlotName, SlotValue};

/// A piece of information accumulated across turns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSlot {
    pub name: SlotName,
    pub value: SlotValue,
    /// Confidence of the intent that last set the slot.
    pub confidence: f64,
    pub required: bool,
    pub filled: bool,
}

impl ConversationSlot {
    pub fn filled(name: SlotName, value: SlotValue, confidence: f64, required: bool) -> Self {
        Self {
            name,
            value,
            confidence,
            required,
            filled: true,
        }
    }
}
