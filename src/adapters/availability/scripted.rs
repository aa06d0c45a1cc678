//! Deterministic availability for tests and demos.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashSet;

use crate::domain::conversation::TimeWindow;
use crate::ports::AvailabilitySource;

/// Every window is free except the ones explicitly blocked.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAvailability {
    blocked: HashSet<(NaiveDate, TimeWindow)>,
    all_blocked: bool,
}

impl ScriptedAvailability {
    pub fn always_free() -> Self {
        Self::default()
    }

    pub fn fully_booked() -> Self {
        Self {
            all_blocked: true,
            ..Self::default()
        }
    }

    pub fn block(mut self, date: NaiveDate, window: TimeWindow) -> Self {
        self.blocked.insert((date, window));
        self
    }
}

#[async_trait]
impl AvailabilitySource for ScriptedAvailability {
    async fn is_available(&self, date: NaiveDate, window: TimeWindow) -> bool {
        !self.all_blocked && !self.blocked.contains(&(date, window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blocks_only_listed_windows() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let source = ScriptedAvailability::always_free().block(day, TimeWindow::LateMorning);

        assert!(source.is_available(day, TimeWindow::EarlyMorning).await);
        assert!(!source.is_available(day, TimeWindow::LateMorning).await);
        assert!(!ScriptedAvailability::fully_booked()
            .is_available(day, TimeWindow::EarlyMorning)
            .await);
    }
}
