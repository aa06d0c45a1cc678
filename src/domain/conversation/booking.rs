//! Appointment slots offered in the booking panel.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Calendar days scanned for appointments.
pub const BOOKING_DAYS_AHEAD: usize = 7;

/// Maximum generated appointment slots.
pub const MAX_GENERATED_SLOTS: usize = 10;

/// Slots offered to the user at a time.
pub const OFFERED_SLOTS: usize = 4;

/// The four fixed daily time windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeWindow {
    #[serde(rename = "08:00-10:00")]
    EarlyMorning,
    #[serde(rename = "10:00-12:00")]
    LateMorning,
    #[serde(rename = "13:00-15:00")]
    EarlyAfternoon,
    #[serde(rename = "15:00-17:00")]
    LateAfternoon,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 4] = [
        TimeWindow::EarlyMorning,
        TimeWindow::LateMorning,
        TimeWindow::EarlyAfternoon,
        TimeWindow::LateAfternoon,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::EarlyMorning => "08:00-10:00",
            TimeWindow::LateMorning => "10:00-12:00",
            TimeWindow::EarlyAfternoon => "13:00-15:00",
            TimeWindow::LateAfternoon => "15:00-17:00",
        }
    }

    pub fn start(&self) -> &'static str {
        &self.label()[..5]
    }
}

/// One bookable window on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentSlot {
    pub id: String,
    pub date: NaiveDate,
    pub window: TimeWindow,
    pub available: bool,
}

impl AppointmentSlot {
    pub fn new(date: NaiveDate, window: TimeWindow, available: bool) -> Self {
        Self {
            id: format!("{}T{}", date.format("%Y-%m-%d"), window.start()),
            date,
            window,
            available,
        }
    }

    /// Swedish label such as "tisdag 3 juni, 08:00-10:00".
    pub fn label(&self) -> String {
        format!(
            "{} {} {}, {}",
            weekday_name(self.date.weekday()),
            self.date.day(),
            month_name(self.date.month()),
            self.window.label()
        )
    }
}

/// Booking panel state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingData {
    /// Generated available slots, at most [`MAX_GENERATED_SLOTS`].
    #[serde(default)]
    pub available_slots: Vec<AppointmentSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_slot: Option<AppointmentSlot>,
}

impl BookingData {
    /// The slots shown to the user.
    pub fn offered(&self) -> &[AppointmentSlot] {
        let end = self.available_slots.len().min(OFFERED_SLOTS);
        &self.available_slots[..end]
    }

    pub fn find_offered(&self, slot_id: &str) -> Option<&AppointmentSlot> {
        self.offered().iter().find(|slot| slot.id == slot_id)
    }
}

/// The next `count` weekdays after `today`, skipping Saturday and Sunday.
pub fn upcoming_weekdays(today: NaiveDate, count: usize) -> Vec<NaiveDate> {
    (1..)
        .map(|offset| today + Duration::days(offset))
        .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
        .take(count)
        .collect()
}

/// Every window on every day, in chronological order.
pub fn candidate_windows(days: &[NaiveDate]) -> Vec<(NaiveDate, TimeWindow)> {
    days.iter()
        .flat_map(|day| TimeWindow::ALL.iter().map(move |window| (*day, *window)))
        .collect()
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "måndag",
        Weekday::Tue => "tisdag",
        Weekday::Wed => "onsdag",
        Weekday::Thu => "torsdag",
        Weekday::Fri => "fredag",
        Weekday::Sat => "lördag",
        Weekday::Sun => "söndag",
    }
}

fn month_name(month: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "januari", "februari", "mars", "april", "maj", "juni", "juli", "augusti", "september",
        "oktober", "november", "december",
    ];
    MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn upcoming_weekdays_skip_weekends() {
        // Friday 6 June 2025
        let days = upcoming_weekdays(date(2025, 6, 6), BOOKING_DAYS_AHEAD);

        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2025, 6, 9));
        assert!(days
            .iter()
            .all(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)));
    }

    #[test]
    fn candidate_windows_cover_four_windows_per_day() {
        let days = upcoming_weekdays(date(2025, 6, 2), 2);
        let candidates = candidate_windows(&days);
        assert_eq!(candidates.len(), 8);
        assert_eq!(candidates[0].1, TimeWindow::EarlyMorning);
        assert_eq!(candidates[4].1, TimeWindow::EarlyMorning);
        assert_eq!(candidates[4].0, date(2025, 6, 4));
    }

    #[test]
    fn slot_ids_and_labels() {
        let slot = AppointmentSlot::new(date(2025, 6, 3), TimeWindow::EarlyAfternoon, true);
        assert_eq!(slot.id, "2025-06-03T13:00");
        assert_eq!(slot.label(), "tisdag 3 juni, 13:00-15:00");
    }

    #[test]
    fn window_serializes_as_label() {
        let json = serde_json::to_string(&TimeWindow::LateAfternoon).unwrap();
        assert_eq!(json, "\"15:00-17:00\"");
    }

    #[test]
    fn offered_is_first_four() {
        let days = upcoming_weekdays(date(2025, 6, 2), 2);
        let booking = BookingData {
            available_slots: candidate_windows(&days)
                .into_iter()
                .map(|(d, w)| AppointmentSlot::new(d, w, true))
                .collect(),
            confirmed_slot: None,
        };
        assert_eq!(booking.offered().len(), OFFERED_SLOTS);
        assert!(booking.find_offered("2025-06-03T08:00").is_some());
        assert!(booking.find_offered("2025-06-04T08:00").is_none());
    }
}
