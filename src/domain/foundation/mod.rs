//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, events and error types
//! that form the vocabulary of the assistant domain.

mod errors;
mod events;
mod ids;
mod percentage;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{DomainEvent, EventEnvelope, EventId};
pub use ids::{MessageId, SessionId};
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
