//! Booking request handler and the appointment replies shared with the manager.

use super::super::assistant::Assistant;
use super::Turn;
use crate::domain::conversation::{
    candidate_windows, upcoming_weekdays, AppointmentSlot, BookingData, ChatAction, ChatMode,
    ChatReply, ConversationState, ReplyData, BOOKING_DAYS_AHEAD, MAX_GENERATED_SLOTS,
};
use crate::domain::intent::SlotName;

pub(super) async fn respond(turn: Turn<'_>) -> ChatReply {
    if turn.state.has_booking_contact() {
        offer_appointments(turn.assistant, turn.state).await
    } else {
        missing_contact_reply(turn.state)
    }
}

/// Asks for the contact fields a booking still needs.
pub(crate) fn missing_contact_reply(state: &ConversationState) -> ChatReply {
    let fields = state.missing_contact_fields();
    let labels: Vec<&str> = fields
        .iter()
        .map(|field| match field {
            SlotName::Phone => "telefonnummer",
            SlotName::Location => "ort",
            _ => "kontaktuppgifter",
        })
        .collect();

    ChatReply::text(format!(
        "Vad roligt att du vill boka! För att hitta en tid behöver vi ditt {}. Fyll i \
         formuläret så tar vi fram lediga tider.",
        labels.join(" och ")
    ))
    .with_mode(ChatMode::Form)
    .with_data(ReplyData::MissingFields { fields })
    .with_action(ChatAction::ShowForm)
}

/// Generates appointment slots over the coming weekdays and offers the
/// first few.
pub(crate) async fn offer_appointments(
    assistant: &Assistant,
    state: &mut ConversationState,
) -> ChatReply {
    let days = upcoming_weekdays(assistant.clock.local_date(), BOOKING_DAYS_AHEAD);

    let mut slots = Vec::with_capacity(MAX_GENERATED_SLOTS);
    for (date, window) in candidate_windows(&days) {
        if slots.len() == MAX_GENERATED_SLOTS {
            break;
        }
        if assistant.availability.is_available(date, window).await {
            slots.push(AppointmentSlot::new(date, window, true));
        }
    }
    state.booking_data = BookingData {
        available_slots: slots,
        confirmed_slot: None,
    };

    let offered = state.booking_data.offered().to_vec();
    tracing::debug!(
        generated = state.booking_data.available_slots.len(),
        offered = offered.len(),
        "Generated appointment slots"
    );

    if offered.is_empty() {
        let phone = &assistant.settings.main_phone;
        return ChatReply::text(format!(
            "Tyvärr har vi inga lediga tider den närmaste veckan. Ring oss på {} så hittar vi \
             en lösning.",
            phone
        ))
        .with_action(ChatAction::HighlightPhone {
            phone: phone.clone(),
        });
    }

    let list: Vec<String> = offered
        .iter()
        .enumerate()
        .map(|(i, slot)| format!("{}. {}", i + 1, slot.label()))
        .collect();

    ChatReply::text(format!(
        "Här är våra första lediga tider:\n{}\n\nVälj den tid som passar dig bäst.",
        list.join("\n")
    ))
    .with_mode(ChatMode::Booking)
    .with_data(ReplyData::BookingSlots { slots: offered })
    .with_action(ChatAction::ShowBooking)
}

/// Confirms `slot` for the lead in `state`.
pub(crate) fn confirmation(state: &ConversationState, slot: AppointmentSlot) -> ChatReply {
    let greeting = match &state.lead_data.name {
        Some(name) => format!("Tack {}!", name),
        None => "Tack!".to_string(),
    };
    let callback = match &state.lead_data.phone {
        Some(phone) => format!(" Vi ringer dig på {} dagen innan för att bekräfta.", phone),
        None => String::new(),
    };

    ChatReply::text(format!(
        "{} Ditt besök är bokat {}.{}",
        greeting,
        slot.label(),
        callback
    ))
    .with_data(ReplyData::BookingConfirmed { slot })
}
