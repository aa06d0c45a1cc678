//! Chat panel mode.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Which panel the presentation layer shows.
///
/// Modes only move forward along chat, calculator, form, booking. Only an
/// explicit clear returns the conversation to `Chat`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatMode {
    #[default]
    Chat,
    Calculator,
    Form,
    Booking,
}

impl ChatMode {
    fn rank(&self) -> u8 {
        match self {
            ChatMode::Chat => 0,
            ChatMode::Calculator => 1,
            ChatMode::Form => 2,
            ChatMode::Booking => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChatMode::Chat => "chat",
            ChatMode::Calculator => "calculator",
            ChatMode::Form => "form",
            ChatMode::Booking => "booking",
        }
    }
}

impl fmt::Display for ChatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for ChatMode {
    fn can_transition_to(&self, target: &Self) -> bool {
        target.rank() > self.rank()
    }

    fn valid_transitions(&self) -> Vec<Self> {
        [ChatMode::Calculator, ChatMode::Form, ChatMode::Booking]
            .into_iter()
            .filter(|target| self.can_transition_to(target))
            .collect()
    }
}
