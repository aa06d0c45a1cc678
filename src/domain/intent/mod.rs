//! Intent engine: pattern-based classification and slot extraction for
//! Swedish home-service conversations.

mod engine;
mod errors;
mod kind;
mod patterns;
mod slots;
mod tuning;

pub use engine::{
    generate_follow_up_question, is_intent_complete, required_slots, IntentContext, IntentEngine,
    RELATED_ITEMS_LIMIT,
};
pub use errors::IntentError;
pub use kind::{ChatIntent, IntentKind};
pub use patterns::{IntentPatternBank, IntentPatterns, BUILTIN_PATTERNS};
pub use slots::{
    extract_preferred_time, extract_service_type, extract_slots, ExtractedSlots, SlotName,
    SlotValue, KNOWN_LOCATIONS,
};
pub use tuning::IntentTuning;
