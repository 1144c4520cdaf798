//! Bookable dates and time slots handler

use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde::Serialize;

use route_engine::services::booking_calendar::{
    generate_available_dates, generate_time_slots, BusinessHours,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingOptions {
    pub dates: Vec<NaiveDate>,
    /// `HH:MM` start times offered on each date
    pub time_slots: Vec<String>,
}

pub fn booking_options(today: NaiveDate, days: u32) -> BookingOptions {
    BookingOptions {
        dates: generate_available_dates(today, days),
        time_slots: generate_time_slots(BusinessHours::default())
            .into_iter()
            .map(|t| t.format("%H:%M").to_string())
            .collect(),
    }
}

/// `slots`: dates a customer may pick and the start times on offer
pub fn handle_slots(today: Option<NaiveDate>, days: u32) -> Result<String> {
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    Ok(serde_json::to_string_pretty(&booking_options(today, days))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_options() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
        let options = booking_options(today, 3);
        assert_eq!(options.dates.len(), 3);
        assert_eq!(options.dates[0], NaiveDate::from_ymd_opt(2025, 3, 12).unwrap());
        assert_eq!(options.time_slots.first().map(String::as_str), Some("07:00"));
        assert_eq!(options.time_slots.last().map(String::as_str), Some("18:00"));
    }

    #[test]
    fn test_handle_slots_json() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
        let out = handle_slots(Some(today), 1).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["dates"][0], "2025-03-12");
        assert_eq!(value["timeSlots"][1], "07:30");
    }
}
