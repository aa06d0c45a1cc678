//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Session stores (in-memory, file-backed)
//! - `events` - Analytics publishers (in-memory capture, tracing)
//! - `availability` - Appointment availability (randomized, scripted)
//! - `clock` - System and fixed clocks

pub mod availability;
pub mod clock;
pub mod events;
pub mod storage;

pub use availability::{RandomAvailability, ScriptedAvailability};
pub use clock::{FixedClock, SystemClock};
pub use events::{InMemoryEventBus, TracingEventPublisher};
pub use storage::{FileSessionStore, InMemorySessionStore};
