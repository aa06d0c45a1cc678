//! Analytics port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Sink for analytics events.
///
/// The conversation manager logs and drops publish errors, so an
/// implementation may fail freely without affecting the chat.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publishes in order and stops at the first failure.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
