//! Price question handler.

use super::service_request::calculator_reply;
use super::Turn;
use crate::domain::conversation::ChatReply;
use crate::domain::intent::{SlotName, SlotValue};
use crate::domain::pricing::{format_amount, format_kronor};

pub(super) fn respond(turn: Turn<'_>) -> ChatReply {
    let Turn {
        assistant,
        state,
        intent,
        ..
    } = turn;

    // A quantity in this message re-prices the current selection.
    let new_quantity = intent
        .slots
        .get(&SlotName::Quantity)
        .and_then(SlotValue::as_number);
    if let (Some(service), Some(quantity)) = (state.calculator_data.service.clone(), new_quantity)
    {
        state.select_service(service, quantity, &assistant.policy);
    }

    let Some(breakdown) = state.calculator_data.breakdown.clone() else {
        let category = state
            .slot_value(SlotName::ServiceType)
            .and_then(SlotValue::as_text)
            .and_then(|slug| assistant.catalog.category(slug));
        let opening = match category {
            Some(category) => format!(
                "{} kostar från {} kr/tim exklusive moms.",
                category.title,
                format_amount(i64::from(category.base_price))
            ),
            None => {
                let prices = assistant.catalog.categories.iter().map(|c| c.base_price);
                let min = prices.clone().min().unwrap_or(0);
                let max = prices.max().unwrap_or(0);
                format!(
                    "Våra timpriser ligger mellan {} och {} kr exklusive moms.",
                    format_amount(i64::from(min)),
                    format_amount(i64::from(max))
                )
            }
        };
        return ChatReply::text(format!(
            "{} Med ROT-avdrag får du {} avdrag på arbetskostnaden. Berätta vilken tjänst det \
             gäller så räknar jag fram ett pris.",
            opening, assistant.policy.rot_rate
        ));
    };

    let service = &breakdown.service;
    let mut lines = vec![
        format!(
            "Prisuppgift för {} ({}):",
            service.title,
            service.unit.quantity_label(breakdown.quantity)
        ),
        format!(
            "• Ordinarie pris: {} inkl. moms",
            format_kronor(breakdown.ordinary_price)
        ),
    ];
    for deduction in [breakdown.rot, breakdown.rut].into_iter().flatten() {
        lines.push(format!(
            "• Med {}-avdrag: {} (du sparar {} %)",
            deduction.kind,
            format_kronor(deduction.price_after),
            deduction.savings_percent
        ));
    }
    lines.push(
        "Priset är en uppskattning. Exakt pris får du i offerten efter ett kostnadsfritt \
         hembesök."
            .to_string(),
    );

    calculator_reply(lines.join("\n"), breakdown)
}
