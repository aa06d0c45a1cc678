//! Capturing event bus for tests and local tooling.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// Keeps every published envelope in memory.
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// let assistant = assistant.with_publisher(bus.clone());
/// // ...run some turns...
/// assert!(bus.has_event("chat.turn_processed.v1"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEventBus {
    captured: Mutex<Vec<EventEnvelope>>,
    reject: AtomicBool,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bus that rejects every publish, for exercising callers that must
    /// survive analytics outages.
    pub fn failing() -> Self {
        Self {
            captured: Mutex::default(),
            reject: AtomicBool::new(true),
        }
    }

    fn captured(&self) -> MutexGuard<'_, Vec<EventEnvelope>> {
        self.captured.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn matching(&self, predicate: impl Fn(&EventEnvelope) -> bool) -> Vec<EventEnvelope> {
        self.captured().iter().filter(|e| predicate(e)).cloned().collect()
    }

    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.captured().clone()
    }

    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.matching(|e| e.event_type == event_type)
    }

    /// Events raised by one chat session, in publish order.
    pub fn events_for_session(&self, session_id: &str) -> Vec<EventEnvelope> {
        self.matching(|e| e.session_id == session_id)
    }

    pub fn event_count(&self) -> usize {
        self.captured().len()
    }

    pub fn has_event(&self, event_type: &str) -> bool {
        self.captured().iter().any(|e| e.event_type == event_type)
    }

    pub fn clear(&self) {
        self.captured().clear();
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if self.reject.load(Ordering::Relaxed) {
            return Err(DomainError::new(ErrorCode::AnalyticsError, "Event bus unavailable")
                .with_detail("event_type", event.event_type));
        }

        self.captured().push(event);
        Ok(())
    }
}
