//! Service request handler and the price summary shared with other replies.

use super::Turn;
use crate::domain::conversation::{ChatAction, ChatMode, ChatReply, ReplyData};
use crate::domain::intent::{
    generate_follow_up_question, IntentKind, SlotName, SlotValue, RELATED_ITEMS_LIMIT,
};
use crate::domain::knowledge::KnowledgeKind;
use crate::domain::pricing::{format_kronor, PriceBreakdown};

pub(super) fn respond(turn: Turn<'_>) -> ChatReply {
    let Turn {
        assistant,
        state,
        message,
        intent,
    } = turn;

    let candidates =
        assistant
            .knowledge
            .search_kind(message, KnowledgeKind::Service, RELATED_ITEMS_LIMIT);
    let service_type = state
        .slot_value(SlotName::ServiceType)
        .and_then(SlotValue::as_text)
        .map(str::to_string);

    let item = candidates.first().map(|hit| &hit.item).or_else(|| {
        service_type
            .as_deref()
            .and_then(|slug| assistant.knowledge.get_service(slug))
    });
    let Some((item, service)) = item.and_then(|item| Some((item, item.priced_service()?))) else {
        return ChatReply::text(
            "Det hjälper vi gärna till med! Vilken typ av tjänst gäller det? Vi erbjuder bland \
             annat el, VVS, snickeri, målning, städning, fönsterputs, trädgård och flytthjälp.",
        );
    };

    if service_type.is_none() {
        state.fill_slot(
            SlotName::ServiceType,
            SlotValue::text(item.category.clone()),
            intent.confidence,
            true,
        );
    }
    // A remembered quantity only carries over to the same service.
    let quantity = intent
        .slots
        .get(&SlotName::Quantity)
        .and_then(SlotValue::as_number)
        .or_else(|| {
            state
                .calculator_data
                .service
                .as_ref()
                .filter(|selected| selected.id == service.id)
                .map(|_| state.calculator_data.quantity)
        })
        .unwrap_or(1);

    tracing::debug!(service = %service.id, quantity, "Selected service from message");
    let breakdown = state
        .select_service(service, quantity, &assistant.policy)
        .clone();

    let mut response = format!(
        "Absolut, det hjälper vi gärna till med!\n\n{}",
        price_lines(&breakdown)
    );
    match generate_follow_up_question(IntentKind::BookingRequest, &state.slots) {
        Some(question) => {
            response.push_str("\n\nVill du boka ett hembesök? ");
            response.push_str(question);
        }
        None => response.push_str("\n\nVill du att vi bokar ett hembesök?"),
    }

    calculator_reply(response, breakdown)
}

/// Calculator reply carrying `breakdown`.
pub(crate) fn calculator_reply(response: String, breakdown: PriceBreakdown) -> ChatReply {
    ChatReply::text(response)
        .with_mode(ChatMode::Calculator)
        .with_data(ReplyData::PriceBreakdown(breakdown))
        .with_action(ChatAction::ShowCalculator)
}

/// Price summary with the primary deduction and a time estimate.
pub(crate) fn price_lines(breakdown: &PriceBreakdown) -> String {
    let service = &breakdown.service;
    let mut lines = vec![
        format!(
            "{}, {} à {} {}",
            service.title,
            service.unit.quantity_label(breakdown.quantity),
            service.base_price,
            service.unit.label()
        ),
        format!(
            "• Ordinarie pris: {} inkl. moms",
            format_kronor(breakdown.ordinary_price)
        ),
    ];
    if let Some(deduction) = breakdown.primary_deduction() {
        lines.push(format!(
            "• Med {}-avdrag: {} (du sparar {} %)",
            deduction.kind,
            format_kronor(deduction.price_after),
            deduction.savings_percent
        ));
    }
    lines.push(format!(
        "• Beräknad tid: cirka {} timmar",
        format_hours(breakdown.estimated_hours)
    ));
    lines.join("\n")
}

/// "3" for whole hours, "1,5" otherwise.
fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{}", hours as i64)
    } else {
        format!("{:.1}", hours).replace('.', ",")
    }
}
