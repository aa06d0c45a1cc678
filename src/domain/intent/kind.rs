//! Intent kinds and classification results.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::slots::ExtractedSlots;
use crate::domain::knowledge::KnowledgeItem;

/// The closed set of intents the assistant understands.
///
/// Declaration order is the classification order: on equal confidence the
/// earlier intent wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Emergency,
    ServiceRequest,
    PricingInquiry,
    RotRutQuestion,
    BookingRequest,
    GeneralFaq,
    Handoff,
}

impl IntentKind {
    pub const ALL: [IntentKind; 7] = [
        IntentKind::Emergency,
        IntentKind::ServiceRequest,
        IntentKind::PricingInquiry,
        IntentKind::RotRutQuestion,
        IntentKind::BookingRequest,
        IntentKind::GeneralFaq,
        IntentKind::Handoff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntentKind::Emergency => "emergency",
            IntentKind::ServiceRequest => "service_request",
            IntentKind::PricingInquiry => "pricing_inquiry",
            IntentKind::RotRutQuestion => "rot_rut_question",
            IntentKind::BookingRequest => "booking_request",
            IntentKind::GeneralFaq => "general_faq",
            IntentKind::Handoff => "handoff",
        }
    }

    /// Intents that count as the user having asked about price.
    pub fn is_price_related(&self) -> bool {
        matches!(self, IntentKind::PricingInquiry | IntentKind::RotRutQuestion)
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatIntent {
    pub kind: IntentKind,
    /// Clamped to `[0, 1]`.
    pub confidence: f64,
    #[serde(default)]
    pub slots: ExtractedSlots,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_items: Option<Vec<KnowledgeItem>>,
}

impl ChatIntent {
    /// True when classification found no signal at all.
    pub fn is_unclassified(&self) -> bool {
        self.confidence <= 0.0
    }
}
