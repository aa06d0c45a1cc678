//! Handoff handler listing every way to reach a person.

use super::super::assistant::Assistant;
use crate::domain::conversation::{ChatAction, ChatReply, ReplyData};

pub(super) fn respond(assistant: &Assistant) -> ChatReply {
    let settings = &assistant.settings;

    ChatReply::text(format!(
        "Du är varmt välkommen att prata med oss direkt:\n\
         • Telefon: {}\n\
         • WhatsApp: {}\n\
         • E-post: {}\n\
         Vi svarar {}.",
        settings.main_phone, settings.whatsapp_url, settings.email, settings.response_time
    ))
    .with_data(ReplyData::Contact {
        phone: settings.main_phone.clone(),
        email: settings.email.clone(),
        whatsapp_url: settings.whatsapp_url.clone(),
        response_time: settings.response_time.clone(),
    })
    .with_action(ChatAction::CallPhone {
        phone: settings.main_phone.clone(),
    })
    .with_action(ChatAction::OpenWhatsapp {
        url: settings.whatsapp_url.clone(),
    })
    .with_action(ChatAction::SendEmail {
        email: settings.email.clone(),
    })
}
