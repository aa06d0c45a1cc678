//! Classification weights.

use serde::{Deserialize, Serialize};

/// Weights and boosts used by the classifier.
///
/// The defaults are empirical; hosts tune them through configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentTuning {
    /// Confidence added per matching pattern.
    pub pattern_weight: f64,

    /// `booking_request` boost once the user has asked about price.
    pub price_asked_booking_boost: f64,
    /// `pricing_inquiry` boost when a service is selected.
    pub selected_service_pricing_boost: f64,
    /// `booking_request` boost when a service is selected.
    pub selected_service_booking_boost: f64,
    /// `emergency` boost outside office hours.
    pub off_hours_emergency_boost: f64,

    /// `emergency` boost for urgency words.
    pub urgency_boost: f64,
    /// `booking_request` boost for weekday and relative-date words.
    pub weekday_boost: f64,
    /// `pricing_inquiry` boost for digits and price words.
    pub price_mention_boost: f64,
    /// `rot_rut_question` boost for percentages.
    pub percentage_boost: f64,

    /// Local hours before this count as off hours.
    pub off_hours_before: u32,
    /// Local hours after this count as off hours.
    pub off_hours_after: u32,
}

impl Default for IntentTuning {
    fn default() -> Self {
        Self {
            pattern_weight: 0.8,
            price_asked_booking_boost: 0.2,
            selected_service_pricing_boost: 0.3,
            selected_service_booking_boost: 0.2,
            off_hours_emergency_boost: 0.1,
            urgency_boost: 0.3,
            weekday_boost: 0.2,
            price_mention_boost: 0.2,
            percentage_boost: 0.2,
            off_hours_before: 7,
            off_hours_after: 20,
        }
    }
}

impl IntentTuning {
    pub fn is_off_hours(&self, local_hour: u32) -> bool {
        local_hour < self.off_hours_before || local_hour > self.off_hours_after
    }

    /// All weights, for validation.
    pub fn weights(&self) -> [(&'static str, f64); 9] {
        [
            ("pattern_weight", self.pattern_weight),
            ("price_asked_booking_boost", self.price_asked_booking_boost),
            ("selected_service_pricing_boost", self.selected_service_pricing_boost),
            ("selected_service_booking_boost", self.selected_service_booking_boost),
            ("off_hours_emergency_boost", self.off_hours_emergency_boost),
            ("urgency_boost", self.urgency_boost),
            ("weekday_boost", self.weekday_boost),
            ("price_mention_boost", self.price_mention_boost),
            ("percentage_boost", self.percentage_boost),
        ]
    }
}
