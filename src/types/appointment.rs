//! Appointment types

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::defaults::{default_appointment_duration_minutes, DEFAULT_APPOINTMENT_DURATION_MINUTES};

/// A confirmed, well-formed appointment on a technician's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    /// Suburb / place name the technician has to travel to.
    pub location: String,
    /// Local wall-clock start.
    pub scheduled_start: NaiveDateTime,
    #[serde(default = "default_appointment_duration_minutes")]
    pub duration_minutes: u32,
    pub technician_id: String,
}

impl Appointment {
    pub fn new(
        id: impl Into<String>,
        location: impl Into<String>,
        scheduled_start: NaiveDateTime,
        duration_minutes: u32,
        technician_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            scheduled_start,
            duration_minutes,
            technician_id: technician_id.into(),
        }
    }

    pub fn scheduled_end(&self) -> NaiveDateTime {
        self.scheduled_start + Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Signed minutes between the end of `self` and the start of `next`.
    /// Negative when the two overlap.
    pub fn minutes_until(&self, next: &Appointment) -> i64 {
        (next.scheduled_start - self.scheduled_end()).num_minutes()
    }
}

/// Reasons a raw record is rejected before it reaches the optimizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppointmentError {
    #[error("appointment #{index}: missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("appointment #{index}: cannot parse {field} '{value}'")]
    InvalidTimestamp {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("appointment #{index}: duration must be greater than zero")]
    ZeroDuration { index: usize },
}

/// Appointment as exported by the booking API or a spreadsheet.
///
/// Every field is optional so that a missing value becomes a validation
/// error instead of a deserialization failure for the whole batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    #[serde(default, alias = "booking_id", alias = "bookingId")]
    pub id: Option<String>,
    #[serde(default, alias = "suburb", alias = "melbourneSuburb", alias = "melbourne_suburb")]
    pub location: Option<String>,
    #[serde(default, alias = "scheduled_start")]
    pub scheduled_start: Option<String>,
    #[serde(default, alias = "scheduled_date")]
    pub scheduled_date: Option<String>,
    #[serde(default, alias = "scheduled_time")]
    pub scheduled_time: Option<String>,
    #[serde(default, alias = "duration_minutes", alias = "duration")]
    pub duration_minutes: Option<u32>,
    #[serde(default, alias = "technician_id", alias = "technician")]
    pub technician_id: Option<String>,
}

impl AppointmentRecord {
    /// Turn the raw record into an [`Appointment`]. `index` is only used to
    /// point at the offending row in the error message.
    pub fn validate(&self, index: usize) -> Result<Appointment, AppointmentError> {
        let id = required(&self.id, index, "id")?;
        let location = required(&self.location, index, "location")?;
        let technician_id = required(&self.technician_id, index, "technicianId")?;
        let scheduled_start = self.resolve_start(index)?;

        let duration_minutes = self
            .duration_minutes
            .unwrap_or(DEFAULT_APPOINTMENT_DURATION_MINUTES);
        if duration_minutes == 0 {
            return Err(AppointmentError::ZeroDuration { index });
        }

        Ok(Appointment {
            id,
            location,
            scheduled_start,
            duration_minutes,
            technician_id,
        })
    }

    fn resolve_start(&self, index: usize) -> Result<NaiveDateTime, AppointmentError> {
        if let Some(raw) = non_blank(&self.scheduled_start) {
            return parse_datetime(raw).ok_or_else(|| AppointmentError::InvalidTimestamp {
                index,
                field: "scheduledStart",
                value: raw.to_string(),
            });
        }

        let date_raw = non_blank(&self.scheduled_date).ok_or(AppointmentError::MissingField {
            index,
            field: "scheduledStart",
        })?;
        let time_raw = non_blank(&self.scheduled_time).ok_or(AppointmentError::MissingField {
            index,
            field: "scheduledTime",
        })?;

        let date = parse_date(date_raw).ok_or_else(|| AppointmentError::InvalidTimestamp {
            index,
            field: "scheduledDate",
            value: date_raw.to_string(),
        })?;
        let time = parse_time(time_raw).ok_or_else(|| AppointmentError::InvalidTimestamp {
            index,
            field: "scheduledTime",
            value: time_raw.to_string(),
        })?;

        Ok(date.and_time(time))
    }
}

/// Validate a whole batch, stopping at the first malformed record.
pub fn validate_records(records: &[AppointmentRecord]) -> Result<Vec<Appointment>, AppointmentError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| record.validate(index))
        .collect()
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn required(
    value: &Option<String>,
    index: usize,
    field: &'static str,
) -> Result<String, AppointmentError> {
    non_blank(value)
        .map(str::to_string)
        .ok_or(AppointmentError::MissingField { index, field })
}

/// Parse an ISO-like local timestamp, with or without seconds.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    const FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    // Booking exports carry either ISO dates or full ISO timestamps at midnight.
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(value, "%d/%m/%Y").ok())
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .ok()
        .or_else(|| NaiveTime::parse_from_str(value, "%H:%M:%S").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AppointmentRecord {
        AppointmentRecord {
            id: Some("bk-1".into()),
            location: Some("Carlton".into()),
            scheduled_start: Some("2025-03-11T09:30".into()),
            duration_minutes: Some(60),
            technician_id: Some("tech-7".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_complete_record() {
        let appt = record().validate(0).unwrap();
        assert_eq!(appt.id, "bk-1");
        assert_eq!(appt.location, "Carlton");
        assert_eq!(appt.duration_minutes, 60);
        assert_eq!(appt.scheduled_start.format("%Y-%m-%d %H:%M").to_string(), "2025-03-11 09:30");
    }

    #[test]
    fn test_validate_defaults_duration_to_two_hours() {
        let rec = AppointmentRecord {
            duration_minutes: None,
            ..record()
        };
        assert_eq!(rec.validate(0).unwrap().duration_minutes, 120);
    }

    #[test]
    fn test_validate_separate_date_and_time() {
        let rec = AppointmentRecord {
            scheduled_start: None,
            scheduled_date: Some("2025-03-11T00:00:00.000Z".into()),
            scheduled_time: Some("14:00".into()),
            ..record()
        };
        let appt = rec.validate(3).unwrap();
        assert_eq!(appt.scheduled_start.format("%H:%M").to_string(), "14:00");
    }

    #[test]
    fn test_validate_missing_location() {
        let rec = AppointmentRecord {
            location: Some("   ".into()),
            ..record()
        };
        assert_eq!(
            rec.validate(2),
            Err(AppointmentError::MissingField { index: 2, field: "location" })
        );
    }

    #[test]
    fn test_validate_missing_start() {
        let rec = AppointmentRecord {
            scheduled_start: None,
            ..record()
        };
        assert_eq!(
            rec.validate(0),
            Err(AppointmentError::MissingField { index: 0, field: "scheduledStart" })
        );
    }

    #[test]
    fn test_validate_garbage_start() {
        let rec = AppointmentRecord {
            scheduled_start: Some("tomorrow morning".into()),
            ..record()
        };
        assert!(matches!(
            rec.validate(0),
            Err(AppointmentError::InvalidTimestamp { field: "scheduledStart", .. })
        ));
    }

    #[test]
    fn test_validate_zero_duration() {
        let rec = AppointmentRecord {
            duration_minutes: Some(0),
            ..record()
        };
        assert_eq!(rec.validate(5), Err(AppointmentError::ZeroDuration { index: 5 }));
    }

    #[test]
    fn test_validate_records_stops_at_first_error() {
        let bad = AppointmentRecord {
            id: None,
            ..record()
        };
        let err = validate_records(&[record(), bad, record()]).unwrap_err();
        assert_eq!(err, AppointmentError::MissingField { index: 1, field: "id" });
    }

    #[test]
    fn test_minutes_until_can_be_negative() {
        let a = record().validate(0).unwrap(); // 09:30–10:30
        let mut b = a.clone();
        b.scheduled_start = a.scheduled_start + Duration::minutes(45); // 10:15
        assert_eq!(a.minutes_until(&b), -15);
        assert_eq!(a.scheduled_end().format("%H:%M").to_string(), "10:30");
    }

    #[test]
    fn test_appointment_json_defaults_duration() {
        let json = r#"{
            "id": "bk-9",
            "location": "Kew",
            "scheduledStart": "2025-03-11T09:00:00",
            "technicianId": "tech-1"
        }"#;
        let appt: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appt.duration_minutes, 120);
        assert_eq!(appt.scheduled_end().format("%H:%M").to_string(), "11:00");
    }
}
