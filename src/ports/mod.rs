//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - Session-scoped key-value persistence
//! - `EventPublisher` - Analytics event publishing
//! - `AvailabilitySource` - Free appointment windows
//! - `Clock` - Current time and Stockholm local time

mod availability;
mod clock;
mod event_publisher;
mod session_store;

pub use availability::AvailabilitySource;
pub use clock::{Clock, BUSINESS_TIME_ZONE};
pub use event_publisher::EventPublisher;
pub use session_store::{SessionStore, SessionStoreError};
