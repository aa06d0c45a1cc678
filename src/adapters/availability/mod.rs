//! Appointment availability adapters.

mod random;
mod scripted;

pub use random::{RandomAvailability, DEFAULT_AVAILABILITY};
pub use scripted::ScriptedAvailability;
