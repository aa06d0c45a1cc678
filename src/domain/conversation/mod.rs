//! Conversation domain module.
//!
//! Per-session dialogue state: accumulated slots, the panel mode, lead and
//! calculator data, booking slots, message history and the reply contract.

mod booking;
mod context;
mod events;
mod lead;
mod message;
mod mode;
mod reply;
mod slot;
mod snapshot;
mod state;

pub use booking::{
    candidate_windows, upcoming_weekdays, AppointmentSlot, BookingData, TimeWindow,
    BOOKING_DAYS_AHEAD, MAX_GENERATED_SLOTS, OFFERED_SLOTS,
};
pub use context::ConversationContext;
pub use events::ChatTurnProcessed;
pub use lead::{LeadData, LeadUpdate};
pub use message::{Attachment, Message, MessageRole};
pub use mode::ChatMode;
pub use reply::{ChatAction, ChatReply, ReplyData};
pub use slot::ConversationSlot;
pub use snapshot::{SessionSnapshot, SnapshotError};
pub use state::{CalculatorData, ConversationState};
