//! Reply handlers, one per intent.
//!
//! Each handler reads the turn, updates the conversation state and returns
//! a Swedish reply. A requested mode change is applied by the manager and
//! dropped when it would move backwards.

mod booking;
mod emergency;
mod faq;
mod handoff;
mod menu;
mod pricing;
mod rot_rut;
mod service_request;

pub(crate) use booking::{confirmation, missing_contact_reply, offer_appointments};
pub(crate) use service_request::{calculator_reply, price_lines};

use super::assistant::Assistant;
use crate::domain::conversation::{ChatReply, ConversationState};
use crate::domain::intent::{ChatIntent, IntentKind};

/// Everything a handler may read or update during one turn.
pub(crate) struct Turn<'a> {
    pub assistant: &'a Assistant,
    pub state: &'a mut ConversationState,
    pub message: &'a str,
    pub intent: &'a ChatIntent,
}

/// Routes the turn to the handler for its intent.
pub(crate) async fn dispatch(turn: Turn<'_>) -> ChatReply {
    if turn.intent.is_unclassified() {
        return menu::respond(turn.assistant);
    }

    match turn.intent.kind {
        IntentKind::Emergency => emergency::respond(turn),
        IntentKind::ServiceRequest => service_request::respond(turn),
        IntentKind::PricingInquiry => pricing::respond(turn),
        IntentKind::RotRutQuestion => rot_rut::respond(turn),
        IntentKind::BookingRequest => booking::respond(turn).await,
        IntentKind::GeneralFaq => faq::respond(turn),
        IntentKind::Handoff => handoff::respond(turn.assistant),
    }
}
