//! Randomized availability, a stand-in until a real calendar is wired in.

use async_trait::async_trait;
use chrono::NaiveDate;
use rand::Rng;

use crate::domain::conversation::TimeWindow;
use crate::ports::AvailabilitySource;

/// Probability that a window is reported free.
pub const DEFAULT_AVAILABILITY: f64 = 0.7;

/// Marks each window free independently with a fixed probability.
#[derive(Debug, Clone, Copy)]
pub struct RandomAvailability {
    probability: f64,
}

impl RandomAvailability {
    pub fn new(probability: f64) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
        }
    }
}

impl Default for RandomAvailability {
    fn default() -> Self {
        Self::new(DEFAULT_AVAILABILITY)
    }
}

#[async_trait]
impl AvailabilitySource for RandomAvailability {
    async fn is_available(&self, _date: NaiveDate, _window: TimeWindow) -> bool {
        rand::thread_rng().gen_bool(self.probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn extreme_probabilities_are_deterministic() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

        assert!(RandomAvailability::new(1.0).is_available(day, TimeWindow::EarlyMorning).await);
        assert!(!RandomAvailability::new(0.0).is_available(day, TimeWindow::EarlyMorning).await);
        assert!(RandomAvailability::new(7.0).is_available(day, TimeWindow::LateAfternoon).await);
    }
}
