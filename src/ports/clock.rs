//! Clock port - Current time in UTC and in the business's local zone.

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;

use crate::domain::foundation::Timestamp;

/// The business operates in Swedish local time.
pub const BUSINESS_TIME_ZONE: Tz = chrono_tz::Europe::Stockholm;

/// Port for reading the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn timestamp(&self) -> Timestamp {
        Timestamp::from_datetime(self.now())
    }

    /// Hour of day in Stockholm.
    fn local_hour(&self) -> u32 {
        self.now().with_timezone(&BUSINESS_TIME_ZONE).hour()
    }

    /// Today's date in Stockholm.
    fn local_date(&self) -> NaiveDate {
        self.now().with_timezone(&BUSINESS_TIME_ZONE).date_naive()
    }
}
