//! Hemservice Assistant - lead qualification chat for Swedish home services.
//!
//! Classifies customer messages, answers from a knowledge base built over
//! the service catalog, estimates prices with ROT/RUT deductions and walks
//! the customer from chat to a booked appointment.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

pub use application::{Assistant, BootstrapError, ConversationError, ConversationManager};
