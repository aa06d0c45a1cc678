//! Conversation domain events.

use serde::{Deserialize, Serialize};

use super::mode::ChatMode;
use crate::domain::foundation::{EventId, SessionId, Timestamp};
use crate::domain::intent::IntentKind;

// ════════════════════════════════════════════════════════════════════════════════
// Turn Events
// ════════════════════════════════════════════════════════════════════════════════

/// Published once per processed chat turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurnProcessed {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub intent: IntentKind,
    pub confidence: f64,
    /// Whether the turn extracted at least one slot.
    pub slots_filled: bool,
    pub mode: ChatMode,
    pub occurred_at: Timestamp,
}

crate::domain_event!(
    ChatTurnProcessed,
    event_type = "chat.turn_processed.v1",
    session = session_id,
    occurred_at = occurred_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, EventEnvelope};

    fn sample() -> ChatTurnProcessed {
        ChatTurnProcessed {
            event_id: EventId::new(),
            session_id: SessionId::new(),
            intent: IntentKind::ServiceRequest,
            confidence: 0.8,
            slots_filled: true,
            mode: ChatMode::Calculator,
            occurred_at: Timestamp::now(),
        }
    }

    #[test]
    fn chat_turn_processed_implements_domain_event() {
        let event = sample();

        assert_eq!(event.event_type(), "chat.turn_processed.v1");
        assert_eq!(DomainEvent::session_id(&event), event.session_id.to_string());
    }

    #[test]
    fn envelope_carries_payload() {
        let event = sample();
        let envelope = EventEnvelope::from_event(&event).unwrap();

        assert_eq!(envelope.schema_version, 1);
        assert_eq!(envelope.payload["intent"], "service_request");
        assert_eq!(envelope.payload["slots_filled"], true);
        let back: ChatTurnProcessed = envelope.payload_as().unwrap();
        assert_eq!(back, event);
    }
}
