//! General question handler: FAQ lookup with a company summary as fallback.

use super::Turn;
use crate::domain::conversation::{ChatReply, ReplyData};
use crate::domain::knowledge::{KnowledgeKind, COVERAGE_REGIONS};

pub(super) fn respond(turn: Turn<'_>) -> ChatReply {
    let hit = turn
        .assistant
        .knowledge
        .search_kind(turn.message, KnowledgeKind::Faq, 1)
        .into_iter()
        .next();

    if let Some((question, answer)) = hit.as_ref().and_then(|hit| hit.item.faq()) {
        return ChatReply::text(answer).with_data(ReplyData::Faq {
            question: question.to_string(),
            answer: answer.to_string(),
        });
    }

    ChatReply::text(format!(
        "Lite om oss:\n\
         • Alla hantverkare är behöriga och vi har ansvarsförsäkring\n\
         • ROT- och RUT-avdraget drar vi direkt på fakturan\n\
         • Vi arbetar i {}\n\
         • Offert och prisuppskattning är alltid kostnadsfria\n\
         Fråga gärna om något mer specifikt!",
        COVERAGE_REGIONS.join(", ")
    ))
}
