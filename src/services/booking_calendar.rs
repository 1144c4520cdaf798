//! Bookable dates and time slots offered to customers

use chrono::{Duration, NaiveDate, NaiveTime, Timelike};

use crate::defaults::{default_business_end, default_business_start};

/// Business hours during which inspections may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            start: default_business_start(),
            end: default_business_end(),
        }
    }
}

/// Half-hourly start times within business hours.
///
/// Every hour from `start` up to the last hour gets `:00` and `:30`; the last
/// hour before closing only gets `:00`.
pub fn generate_time_slots(hours: BusinessHours) -> Vec<NaiveTime> {
    let start_hour = hours.start.hour();
    let end_hour = hours.end.hour();

    let mut slots = Vec::new();
    for hour in start_hour..end_hour {
        if let Some(slot) = NaiveTime::from_hms_opt(hour, 0, 0) {
            slots.push(slot);
        }
        if hour + 1 < end_hour {
            if let Some(slot) = NaiveTime::from_hms_opt(hour, 30, 0) {
                slots.push(slot);
            }
        }
    }
    slots
}

/// The `days` calendar dates following `today` (today itself excluded).
///
/// Stops early at the last date chrono can represent.
pub fn generate_available_dates(today: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (1..=i64::from(days))
        .map_while(|offset| today.checked_add_signed(Duration::days(offset)))
        .collect()
}
