//! ROT and RUT question handler.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Turn;
use crate::domain::conversation::ChatReply;
use crate::domain::pricing::{format_amount, DeductionKind};

static ROT_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\brot(?:avdrag\w*)?\b").expect("rot pattern compiles"));

static RUT_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\brut(?:avdrag\w*)?\b").expect("rut pattern compiles"));

pub(super) fn respond(turn: Turn<'_>) -> ChatReply {
    let assistant = turn.assistant;
    let rule_text = |kind: DeductionKind| {
        assistant
            .knowledge
            .get_rot_rut_info(kind)
            .map(|item| item.content.clone())
    };

    let mentions_rot = ROT_WORD.is_match(turn.message);
    let mentions_rut = RUT_WORD.is_match(turn.message);

    let specific = match (mentions_rot, mentions_rut) {
        (true, false) => rule_text(DeductionKind::Rot),
        (false, true) => rule_text(DeductionKind::Rut),
        _ => None,
    };
    if let Some(text) = specific {
        return ChatReply::text(format!(
            "{}\n\nVi sköter ansökan åt dig och drar av beloppet direkt på fakturan.",
            text
        ));
    }

    let policy = &assistant.policy;
    ChatReply::text(format!(
        "Det finns två skatteavdrag för tjänster i hemmet:\n\
         • ROT: {} av arbetskostnaden för reparation, underhåll, om- och tillbyggnad, \
         högst {} kr per person och år\n\
         • RUT: {} av arbetskostnaden för hushållsnära tjänster som städning, fönsterputs och \
         trädgårdsskötsel\n\
         ROT och RUT får tillsammans vara högst {} kr per person och år. Vi drar av beloppet \
         direkt på fakturan.",
        policy.rot_rate,
        format_amount(i64::from(policy.rot_annual_cap)),
        policy.rut_rate,
        format_amount(i64::from(policy.combined_annual_cap))
    ))
}
