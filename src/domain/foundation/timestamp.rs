//! UTC instants as used in messages, snapshots and events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A UTC instant. Serializes as an RFC 3339 string so persisted sessions
/// stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_as_rfc3339() {
        let ts = Timestamp::from(Utc.with_ymd_and_hms(2025, 6, 3, 13, 0, 0).unwrap());

        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2025-06-03T13:00:00Z\"");

        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn orders_by_instant() {
        let morning = Timestamp::from(Utc.with_ymd_and_hms(2025, 6, 3, 8, 0, 0).unwrap());
        let afternoon = Timestamp::from(Utc.with_ymd_and_hms(2025, 6, 3, 15, 0, 0).unwrap());
        assert!(morning < afternoon);
        assert_eq!(afternoon.as_datetime().date_naive(), morning.as_datetime().date_naive());
    }
}
