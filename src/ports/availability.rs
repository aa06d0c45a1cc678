//! AvailabilitySource port - Which appointment windows can be offered.
//!
//! Stands in for a real calendar. Production wiring uses a randomized
//! source; tests script availability deterministically.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::conversation::TimeWindow;

/// Port answering whether a time window on a day is free.
#[async_trait]
pub trait AvailabilitySource: Send + Sync {
    async fn is_available(&self, date: NaiveDate, window: TimeWindow) -> bool;
}
