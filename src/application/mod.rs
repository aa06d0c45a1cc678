//! Application layer - session bootstrap and per-turn orchestration.
//!
//! [`Assistant`] holds the shared read-only services; each chat session
//! gets its own [`ConversationManager`].

mod assistant;
mod errors;
mod handlers;
mod manager;

pub use assistant::Assistant;
pub use errors::{BootstrapError, ConversationError};
pub use manager::ConversationManager;
