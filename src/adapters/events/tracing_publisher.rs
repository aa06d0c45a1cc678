//! Analytics sink that writes events to the tracing stream.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// Logs every envelope at `info` under the `analytics` target, so a log
/// shipper can route analytics separately from application logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventPublisher;

impl TracingEventPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        tracing::info!(
            target: "analytics",
            event_id = %event.event_id,
            event_type = %event.event_type,
            session_id = %event.session_id,
            correlation_id = event.correlation_id.as_deref().unwrap_or("-"),
            payload = %event.payload,
            "Analytics event"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EventId, Timestamp};

    #[tokio::test]
    async fn publish_never_fails() {
        let envelope = EventEnvelope {
            event_id: EventId::new(),
            event_type: "chat.turn_processed.v1".to_string(),
            schema_version: 1,
            session_id: "s-1".to_string(),
            occurred_at: Timestamp::now(),
            correlation_id: None,
            payload: serde_json::json!({"intent": "handoff"}),
        };

        assert!(TracingEventPublisher::new().publish(envelope).await.is_ok());
    }
}
