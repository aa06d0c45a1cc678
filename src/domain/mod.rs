//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, events, errors)
//! - `catalog` - Service catalog loaded from YAML
//! - `pricing` - Quote estimation, ROT/RUT deductions and the quote calculator
//! - `knowledge` - Searchable knowledge base over services, rules and FAQs
//! - `intent` - Rule-based intent classification and slot extraction
//! - `conversation` - Per-session dialogue state and the reply contract

pub mod catalog;
pub mod conversation;
pub mod foundation;
pub mod intent;
pub mod knowledge;
pub mod pricing;
