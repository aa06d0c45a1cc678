//! Rule-based intent classification with context boosts.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::kind::{ChatIntent, IntentKind};
use super::patterns::IntentPatternBank;
use super::slots::{
    extract_preferred_time, extract_service_type, extract_slots, ExtractedSlots, SlotName,
};
use super::tuning::IntentTuning;
use crate::domain::knowledge::KnowledgeBase;

/// Maximum related knowledge items attached to an intent.
pub const RELATED_ITEMS_LIMIT: usize = 3;

static URGENCY_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(akut\w*|brådskande|omedelbart|genast|nu direkt|snabbt|asap)\b")
        .expect("urgency pattern compiles")
});

static WEEKDAY_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(måndag|tisdag|onsdag|torsdag|fredag|lördag|söndag|imorgon|i morgon|nästa vecka)\b",
    )
    .expect("weekday pattern compiles")
});

static PRICE_MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d|\b(kr|kronor|pris|kostnad)\b").expect("price mention pattern compiles")
});

static PERCENTAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+\s*%|\b(50|femtio|procent)\b").expect("percentage pattern compiles")
});

/// Ambient signals that are not part of the message itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentContext {
    pub has_asked_about_price: bool,
    pub has_selected_service: bool,
    /// Hour of day in the business's local time zone.
    pub local_hour: u32,
}

impl Default for IntentContext {
    fn default() -> Self {
        Self {
            has_asked_about_price: false,
            has_selected_service: false,
            local_hour: 12,
        }
    }
}

/// Classifies utterances and extracts slots.
///
/// Holds no per-session state and is shared across sessions.
#[derive(Debug, Clone)]
pub struct IntentEngine {
    patterns: IntentPatternBank,
    tuning: IntentTuning,
    knowledge: Arc<KnowledgeBase>,
}

impl IntentEngine {
    /// Engine over the built-in pattern bank.
    pub fn new(knowledge: Arc<KnowledgeBase>, tuning: IntentTuning) -> Self {
        Self::with_patterns(knowledge, tuning, IntentPatternBank::builtin().clone())
    }

    pub fn with_patterns(
        knowledge: Arc<KnowledgeBase>,
        tuning: IntentTuning,
        patterns: IntentPatternBank,
    ) -> Self {
        Self {
            patterns,
            tuning,
            knowledge,
        }
    }

    pub fn tuning(&self) -> &IntentTuning {
        &self.tuning
    }

    /// Classifies `message`, extracts its slots and attaches related
    /// knowledge.
    pub fn detect_intent(&self, message: &str, context: &IntentContext) -> ChatIntent {
        let normalized = message.trim().to_lowercase();
        let scores = self.score(&normalized, context);

        let mut best = (IntentKind::GeneralFaq, 0.0_f64);
        for (kind, confidence) in scores {
            if confidence > best.1 {
                best = (kind, confidence);
            }
        }
        let (kind, raw_confidence) = best;
        let confidence = raw_confidence.clamp(0.0, 1.0);

        let slots = self.extract_slots(message, kind);
        let related: Vec<_> = self
            .knowledge
            .search(message, RELATED_ITEMS_LIMIT)
            .into_iter()
            .map(|hit| hit.item)
            .collect();

        tracing::debug!(
            intent = %kind,
            confidence,
            raw_confidence,
            slots = slots.len(),
            related = related.len(),
            "Classified message"
        );

        ChatIntent {
            kind,
            confidence,
            slots,
            related_items: (!related.is_empty()).then_some(related),
        }
    }

    /// Unclamped confidence per intent, in classification order.
    pub fn score(&self, normalized: &str, context: &IntentContext) -> Vec<(IntentKind, f64)> {
        IntentKind::ALL
            .iter()
            .map(|kind| {
                let matches = self.patterns.match_count(*kind, normalized) as f64;
                let confidence = self.tuning.pattern_weight * matches
                    + self.context_boost(*kind, context)
                    + self.message_boost(*kind, normalized);
                (*kind, confidence)
            })
            .collect()
    }

    fn context_boost(&self, kind: IntentKind, context: &IntentContext) -> f64 {
        let t = &self.tuning;
        let mut boost = 0.0;

        match kind {
            IntentKind::BookingRequest => {
                if context.has_asked_about_price {
                    boost += t.price_asked_booking_boost;
                }
                if context.has_selected_service {
                    boost += t.selected_service_booking_boost;
                }
            }
            IntentKind::PricingInquiry if context.has_selected_service => {
                boost += t.selected_service_pricing_boost;
            }
            IntentKind::Emergency if t.is_off_hours(context.local_hour) => {
                boost += t.off_hours_emergency_boost;
            }
            _ => {}
        }

        boost
    }

    fn message_boost(&self, kind: IntentKind, normalized: &str) -> f64 {
        let t = &self.tuning;
        let (pattern, boost): (&Regex, f64) = match kind {
            IntentKind::Emergency => (&*URGENCY_WORDS, t.urgency_boost),
            IntentKind::BookingRequest => (&*WEEKDAY_WORDS, t.weekday_boost),
            IntentKind::PricingInquiry => (&*PRICE_MENTION, t.price_mention_boost),
            IntentKind::RotRutQuestion => (&*PERCENTAGE, t.percentage_boost),
            _ => return 0.0,
        };

        if pattern.is_match(normalized) {
            boost
        } else {
            0.0
        }
    }

    /// General slot table plus intent-specific extraction.
    pub fn extract_slots(&self, message: &str, kind: IntentKind) -> ExtractedSlots {
        let mut slots = extract_slots(message);

        match kind {
            IntentKind::ServiceRequest | IntentKind::PricingInquiry => {
                if let Some(service_type) = extract_service_type(message) {
                    slots.insert(SlotName::ServiceType, service_type);
                }
            }
            IntentKind::BookingRequest => {
                if let Some(time) = extract_preferred_time(message) {
                    slots.insert(SlotName::PreferredTime, time);
                }
            }
            _ => {}
        }

        slots
    }
}

/// Slots an intent needs before it can be acted on.
pub fn required_slots(kind: IntentKind) -> &'static [SlotName] {
    match kind {
        IntentKind::Emergency => &[SlotName::Phone],
        IntentKind::BookingRequest => &[SlotName::Phone, SlotName::Location],
        IntentKind::ServiceRequest | IntentKind::PricingInquiry => &[SlotName::ServiceType],
        IntentKind::RotRutQuestion | IntentKind::GeneralFaq | IntentKind::Handoff => &[],
    }
}

/// True when every required slot of `kind` is present in `slots`.
pub fn is_intent_complete<V>(kind: IntentKind, slots: &BTreeMap<SlotName, V>) -> bool {
    first_missing_slot(kind, slots).is_none()
}

/// The canned question for the first missing required slot.
pub fn generate_follow_up_question<V>(
    kind: IntentKind,
    slots: &BTreeMap<SlotName, V>,
) -> Option<&'static str> {
    first_missing_slot(kind, slots).map(follow_up_question)
}

fn first_missing_slot<V>(kind: IntentKind, slots: &BTreeMap<SlotName, V>) -> Option<SlotName> {
    required_slots(kind)
        .iter()
        .copied()
        .find(|slot| !slots.contains_key(slot))
}

fn follow_up_question(slot: SlotName) -> &'static str {
    match slot {
        SlotName::Phone => "Vilket telefonnummer kan vi nå dig på?",
        SlotName::Location => "Var ska arbetet utföras? Ange gärna ort.",
        SlotName::ServiceType => {
            "Vilken typ av tjänst gäller det, till exempel elektriker, VVS, snickare eller städning?"
        }
        SlotName::Quantity => "Hur många enheter eller hur stor yta gäller det?",
        SlotName::Name => "Vad heter du?",
        SlotName::Email => "Vilken e-postadress vill du att vi använder?",
        _ => "Kan du berätta lite mer?",
    }
}
