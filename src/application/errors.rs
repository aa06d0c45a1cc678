//! Application-layer errors.

use thiserror::Error;

use crate::config::ValidationError as ConfigValidationError;
use crate::domain::catalog::CatalogError;
use crate::domain::conversation::ChatMode;
use crate::domain::foundation::ErrorCode;

/// Input the conversation manager rejects.
///
/// The caller shows [`ChatReply::apology`](crate::domain::conversation::ChatReply::apology)
/// for any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversationError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("Message is {length} characters, the limit is {max}")]
    MessageTooLong { length: usize, max: usize },

    #[error("Unknown booking slot: {0}")]
    UnknownBookingSlot(String),

    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Cannot move from {from} to {to}")]
    InvalidModeTransition { from: ChatMode, to: ChatMode },
}

impl ConversationError {
    /// Stable code for hosts that report errors to the presentation layer.
    pub fn code(&self) -> ErrorCode {
        match self {
            ConversationError::EmptyMessage | ConversationError::MessageTooLong { .. } => {
                ErrorCode::ValidationFailed
            }
            ConversationError::UnknownBookingSlot(_) => ErrorCode::BookingSlotNotFound,
            ConversationError::UnknownService(_) => ErrorCode::ServiceNotFound,
            ConversationError::InvalidModeTransition { .. } => ErrorCode::InvalidStateTransition,
        }
    }
}

/// Errors wiring the assistant from configuration.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigValidationError),

    #[error("Service catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_details() {
        let err = ConversationError::MessageTooLong {
            length: 2500,
            max: 2000,
        };
        assert_eq!(err.to_string(), "Message is 2500 characters, the limit is 2000");

        let err = ConversationError::InvalidModeTransition {
            from: ChatMode::Booking,
            to: ChatMode::Form,
        };
        assert_eq!(err.to_string(), "Cannot move from booking to form");
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn rejected_input_maps_to_validation_code() {
        assert_eq!(ConversationError::EmptyMessage.code(), ErrorCode::ValidationFailed);
        assert_eq!(
            ConversationError::UnknownBookingSlot("x".to_string()).code(),
            ErrorCode::BookingSlotNotFound
        );
    }
}
