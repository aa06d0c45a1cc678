//! Per-session dialogue state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::booking::BookingData;
use super::context::ConversationContext;
use super::lead::{LeadData, LeadUpdate};
use super::message::Message;
use super::mode::ChatMode;
use super::slot::ConversationSlot;
use crate::domain::foundation::StateMachine;
use crate::domain::intent::{required_slots, ChatIntent, SlotName, SlotValue};
use crate::domain::pricing::{PriceBreakdown, PricedService, TaxPolicy};

/// Calculator panel state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<PricedService>,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<PriceBreakdown>,
}

impl Default for CalculatorData {
    fn default() -> Self {
        Self {
            service: None,
            quantity: 1,
            breakdown: None,
        }
    }
}

/// Everything one chat session remembers between turns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationState {
    /// The most confident intent seen so far.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_intent: Option<ChatIntent>,
    #[serde(default)]
    pub slots: BTreeMap<SlotName, ConversationSlot>,
    #[serde(default)]
    pub mode: ChatMode,
    #[serde(default)]
    pub context: ConversationContext,
    #[serde(default)]
    pub lead_data: LeadData,
    #[serde(default)]
    pub calculator_data: CalculatorData,
    #[serde(default)]
    pub booking_data: BookingData,
}

impl ConversationState {
    /// Recomputes the context for the turn carrying `current`.
    pub fn refresh_context(&mut self, history: &[Message], current: &str, window: usize) {
        self.context = ConversationContext {
            selected_service: self.calculator_data.service.as_ref().map(|s| s.id.clone()),
            mode: self.mode,
            filled_slot_count: self.filled_slot_count(),
            ..ConversationContext::from_history(history, current, window)
        };
    }

    /// Folds a classification into the state.
    ///
    /// The retained intent is replaced only by a strictly more confident
    /// one. Slots are overwritten, never removed.
    pub fn merge_intent(&mut self, intent: &ChatIntent) {
        let replace = self
            .last_intent
            .as_ref()
            .map_or(true, |current| intent.confidence > current.confidence);
        if replace {
            self.last_intent = Some(intent.clone());
        }

        let required = required_slots(intent.kind);
        for (name, value) in &intent.slots {
            self.slots.insert(
                *name,
                ConversationSlot::filled(
                    *name,
                    value.clone(),
                    intent.confidence,
                    required.contains(name),
                ),
            );
        }

        self.context.last_intent = Some(intent.kind);
        self.context.filled_slot_count = self.filled_slot_count();
        self.refresh_lead_data();
    }

    /// Re-derives lead fields from slots that hold a value.
    ///
    /// Fields without a slot keep whatever they held.
    pub fn refresh_lead_data(&mut self) {
        let lead = &mut self.lead_data;
        for (slot, field) in [
            (SlotName::Name, &mut lead.name),
            (SlotName::Phone, &mut lead.phone),
            (SlotName::Email, &mut lead.email),
            (SlotName::Location, &mut lead.location),
            (SlotName::Urgency, &mut lead.urgency),
        ] {
            if let Some(value) = self.slots.get(&slot).filter(|s| s.filled) {
                *field = Some(value.value.to_string());
            }
        }
    }

    /// Writes a form submission into slots and lead data.
    pub fn apply_lead_update(&mut self, update: &LeadUpdate) {
        for (slot, value) in [
            (SlotName::Name, &update.name),
            (SlotName::Phone, &update.phone),
            (SlotName::Email, &update.email),
            (SlotName::Location, &update.location),
        ] {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                self.slots.insert(
                    slot,
                    ConversationSlot::filled(slot, SlotValue::text(value), 1.0, false),
                );
            }
        }
        if let Some(consent) = update.privacy_consent {
            self.lead_data.privacy_consent = consent;
        }
        if let Some(consent) = update.marketing_consent {
            self.lead_data.marketing_consent = consent;
        }
        self.context.filled_slot_count = self.filled_slot_count();
        self.refresh_lead_data();
    }

    /// Moves to `requested` when that is a forward transition.
    ///
    /// Returns the new mode, or `None` when the mode stays put.
    pub fn apply_mode(&mut self, requested: ChatMode) -> Option<ChatMode> {
        let next = self.mode.transition_to(requested).ok()?;
        self.mode = next;
        self.context.mode = next;
        Some(next)
    }

    /// Stores `service` as the calculator selection and prices it.
    pub fn select_service(
        &mut self,
        service: PricedService,
        quantity: u32,
        policy: &TaxPolicy,
    ) -> &PriceBreakdown {
        let breakdown = PriceBreakdown::compute(&service, quantity, policy);
        self.context.selected_service = Some(service.id.clone());
        self.calculator_data = CalculatorData {
            service: Some(service),
            quantity: breakdown.quantity,
            breakdown: None,
        };
        self.calculator_data.breakdown.insert(breakdown)
    }

    /// Sets one slot directly, e.g. from a UI selection.
    pub fn fill_slot(&mut self, name: SlotName, value: SlotValue, confidence: f64, required: bool) {
        self.slots
            .insert(name, ConversationSlot::filled(name, value, confidence, required));
        self.context.filled_slot_count = self.filled_slot_count();
        self.refresh_lead_data();
    }

    pub fn slot_value(&self, name: SlotName) -> Option<&SlotValue> {
        self.slots.get(&name).filter(|s| s.filled).map(|s| &s.value)
    }

    pub fn has_slot(&self, name: SlotName) -> bool {
        self.slot_value(name).is_some()
    }

    pub fn filled_slot_count(&self) -> usize {
        self.slots.values().filter(|s| s.filled).count()
    }

    /// Known phone number, from slots or lead data.
    pub fn known_phone(&self) -> Option<&str> {
        self.lead_data.phone.as_deref()
    }

    /// Phone and location are known.
    pub fn has_booking_contact(&self) -> bool {
        self.lead_data.is_bookable()
    }

    /// Required booking fields that are still missing.
    pub fn missing_contact_fields(&self) -> Vec<SlotName> {
        let mut missing = Vec::new();
        if self.lead_data.phone.is_none() {
            missing.push(SlotName::Phone);
        }
        if self.lead_data.location.is_none() {
            missing.push(SlotName::Location);
        }
        missing
    }
}
