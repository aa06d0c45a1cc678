//! Menu reply for messages no intent claims.

use super::super::assistant::Assistant;
use crate::domain::conversation::ChatReply;

/// Reply for messages the classifier found no signal in.
pub(super) fn respond(assistant: &Assistant) -> ChatReply {
    ChatReply::text(format!(
        "Hej och välkommen till {}! Jag kan hjälpa dig med:\n\
         • Prisuppskattning för el, VVS, snickeri, målning, städning med mera\n\
         • Frågor om ROT- och RUT-avdrag\n\
         • Bokning av hembesök\n\
         • Akuta ärenden, dygnet runt\n\
         Vad kan jag hjälpa dig med?",
        assistant.settings.company_name
    ))
}
