//! Emergency handler.

use super::Turn;
use crate::domain::conversation::{ChatAction, ChatReply, ReplyData};
use crate::domain::intent::SlotName;

pub(super) fn respond(turn: Turn<'_>) -> ChatReply {
    let emergency_phone = &turn.assistant.settings.emergency_phone;
    let highlight = ChatAction::HighlightPhone {
        phone: emergency_phone.clone(),
    };

    match turn.state.known_phone() {
        None => ChatReply::text(format!(
            "Jag förstår att det är akut! Ring vår jour direkt på {} så hjälper vi dig \
             omedelbart. Du kan också skriva ditt telefonnummer här så ringer vi upp dig.",
            emergency_phone
        ))
        .with_data(ReplyData::MissingFields {
            fields: vec![SlotName::Phone],
        })
        .with_action(highlight)
        .with_action(ChatAction::CallPhone {
            phone: emergency_phone.clone(),
        }),
        Some(phone) => ChatReply::text(format!(
            "Tack! Vi har tagit emot ditt akuta ärende och ringer upp dig på {} inom \
             15 minuter. Kan du inte vänta, ring jouren direkt på {}.",
            phone, emergency_phone
        ))
        .with_action(highlight),
    }
}
