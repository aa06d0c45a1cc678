//! Analytics events.
//!
//! Every event belongs to one chat session. Publishers receive an
//! [`EventEnvelope`] that carries the routing fields next to the JSON
//! payload, so sinks never need to know the concrete event types.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use super::Timestamp;

/// An event raised by a chat session.
pub trait DomainEvent: Send + Sync {
    /// Dotted type with a trailing schema version, e.g. `chat.turn_processed.v1`.
    fn event_type(&self) -> &'static str;

    fn session_id(&self) -> String;

    fn occurred_at(&self) -> Timestamp;

    fn event_id(&self) -> EventId;
}

/// Implements [`DomainEvent`] by naming the fields that hold the routing data.
///
/// ```ignore
/// domain_event!(
///     ChatTurnProcessed,
///     event_type = "chat.turn_processed.v1",
///     session = session_id,
///     occurred_at = occurred_at,
///     event_id = event_id
/// );
/// ```
#[macro_export]
macro_rules! domain_event {
    (
        $event_name:ident,
        event_type = $event_type:expr,
        session = $session_field:ident,
        occurred_at = $occurred_field:ident,
        event_id = $event_id_field:ident
    ) => {
        impl $crate::domain::foundation::DomainEvent for $event_name {
            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn session_id(&self) -> String {
                self.$session_field.to_string()
            }

            fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
                self.$occurred_field
            }

            fn event_id(&self) -> $crate::domain::foundation::EventId {
                self.$event_id_field.clone()
            }
        }
    };
}

/// Event instance id; sinks deduplicate on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What publishers receive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope {
    pub event_id: EventId,
    pub event_type: String,
    /// Parsed from the `.vN` suffix of `event_type`; 1 when absent.
    pub schema_version: u32,
    pub session_id: String,
    pub occurred_at: Timestamp,
    /// Id of the user message that triggered the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    pub payload: JsonValue,
}

impl EventEnvelope {
    pub fn from_event<T>(event: &T) -> Result<Self, serde_json::Error>
    where
        T: DomainEvent + Serialize,
    {
        let event_type = event.event_type();

        Ok(Self {
            event_id: event.event_id(),
            event_type: event_type.to_string(),
            schema_version: schema_version(event_type),
            session_id: event.session_id(),
            occurred_at: event.occurred_at(),
            correlation_id: None,
            payload: serde_json::to_value(event)?,
        })
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Decodes the payload back into a concrete event.
    pub fn payload_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.payload)
    }
}

fn schema_version(event_type: &str) -> u32 {
    event_type
        .rsplit_once(".v")
        .and_then(|(_, version)| version.parse().ok())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct CallbackRequested {
        event_id: EventId,
        session: String,
        phone: String,
        occurred_at: Timestamp,
    }

    domain_event!(
        CallbackRequested,
        event_type = "lead.callback_requested.v2",
        session = session,
        occurred_at = occurred_at,
        event_id = event_id
    );

    fn sample() -> CallbackRequested {
        CallbackRequested {
            event_id: EventId::from_string("evt-1"),
            session: "s-42".to_string(),
            phone: "0701234567".to_string(),
            occurred_at: Timestamp::now(),
        }
    }

    #[test]
    fn envelope_carries_routing_fields() {
        let envelope = EventEnvelope::from_event(&sample()).unwrap();

        assert_eq!(envelope.event_id.as_str(), "evt-1");
        assert_eq!(envelope.event_type, "lead.callback_requested.v2");
        assert_eq!(envelope.schema_version, 2);
        assert_eq!(envelope.session_id, "s-42");
        assert!(envelope.correlation_id.is_none());
    }

    #[test]
    fn payload_decodes_to_the_event() {
        let event = sample();
        let envelope = EventEnvelope::from_event(&event).unwrap();

        assert_eq!(envelope.payload_as::<CallbackRequested>().unwrap(), event);
    }

    #[test]
    fn unversioned_types_are_version_one() {
        assert_eq!(schema_version("legacy.event"), 1);
        assert_eq!(schema_version("chat.turn.v10"), 10);
        assert_eq!(schema_version("chat.turn.vX"), 1);
    }

    #[test]
    fn correlation_id_is_serialized_in_camel_case() {
        let envelope = EventEnvelope::from_event(&sample())
            .unwrap()
            .with_correlation_id("msg-7");

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["correlationId"], "msg-7");
        assert_eq!(json["sessionId"], "s-42");
    }
}
