//! Appointment import: JSON / CSV exports into validated appointments

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info};

use route_engine::types::{validate_records, Appointment, AppointmentRecord};

/// Input file flavour, picked from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => InputFormat::Csv,
            _ => InputFormat::Json,
        }
    }
}

/// Read, parse and validate an appointment export.
pub fn load_appointments(path: &Path) -> Result<Vec<Appointment>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read appointments from {}", path.display()))?;

    let format = InputFormat::from_path(path);
    let appointments = parse_appointments(&content, format)
        .with_context(|| format!("Invalid appointment file {}", path.display()))?;

    info!("Loaded {} appointments from {}", appointments.len(), path.display());
    Ok(appointments)
}

pub fn parse_appointments(content: &str, format: InputFormat) -> Result<Vec<Appointment>> {
    let records = match format {
        InputFormat::Json => parse_json(content)?,
        InputFormat::Csv => parse_csv(content)?,
    };
    debug!("Parsed {} raw appointment records", records.len());
    Ok(validate_records(&records)?)
}

fn parse_json(content: &str) -> Result<Vec<AppointmentRecord>> {
    let records: Vec<AppointmentRecord> =
        serde_json::from_str(content).context("Expected a JSON array of appointments")?;
    Ok(records)
}

fn parse_csv(content: &str) -> Result<Vec<AppointmentRecord>> {
    let header = content.lines().next().unwrap_or_default();
    let delimiter = if header.contains(';') { b';' } else { b',' };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: AppointmentRecord = result?;
        rows.push(row);
    }
    Ok(rows)
}

/// Narrow an export down to one technician and/or one calendar day.
pub fn filter_schedule(
    appointments: Vec<Appointment>,
    technician: Option<&str>,
    date: Option<NaiveDate>,
) -> Vec<Appointment> {
    appointments
        .into_iter()
        .filter(|a| technician.map_or(true, |t| a.technician_id == t))
        .filter(|a| date.map_or(true, |d| a.scheduled_start.date() == d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"[
        {"id": "b1", "location": "Carlton", "scheduledStart": "2025-03-11T09:00", "durationMinutes": 60, "technicianId": "t1"},
        {"id": "b2", "melbourneSuburb": "Brighton", "scheduledDate": "2025-03-11", "scheduledTime": "13:00", "technicianId": "t1"},
        {"id": "b3", "location": "Kew", "scheduledStart": "2025-03-12 10:00", "technicianId": "t2"}
    ]"#;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("day.csv")), InputFormat::Csv);
        assert_eq!(InputFormat::from_path(Path::new("day.CSV")), InputFormat::Csv);
        assert_eq!(InputFormat::from_path(Path::new("day.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("day")), InputFormat::Json);
    }

    #[test]
    fn test_parse_json_export() {
        let appts = parse_appointments(JSON, InputFormat::Json).unwrap();
        assert_eq!(appts.len(), 3);
        assert_eq!(appts[1].location, "Brighton");
        assert_eq!(appts[1].duration_minutes, 120);
        assert_eq!(appts[2].scheduled_start.format("%H:%M").to_string(), "10:00");
    }

    #[test]
    fn test_parse_csv_comma() {
        let csv = "id,location,scheduled_start,duration_minutes,technician_id\n\
                   b1,Carlton,2025-03-11T09:00,60,t1\n\
                   b2,St Kilda,2025-03-11T11:00,,t1\n";
        let appts = parse_appointments(csv, InputFormat::Csv).unwrap();
        assert_eq!(appts.len(), 2);
        assert_eq!(appts[1].location, "St Kilda");
        assert_eq!(appts[1].duration_minutes, 120);
    }

    #[test]
    fn test_parse_csv_semicolon() {
        let csv = "id;suburb;scheduled_date;scheduled_time;technician\n\
                   b1;Fitzroy;2025-03-11;08:30;t9\n";
        let appts = parse_appointments(csv, InputFormat::Csv).unwrap();
        assert_eq!(appts[0].location, "Fitzroy");
        assert_eq!(appts[0].technician_id, "t9");
        assert_eq!(appts[0].scheduled_start.format("%H:%M").to_string(), "08:30");
    }

    #[test]
    fn test_malformed_record_rejected() {
        let json = r#"[{"id": "b1", "scheduledStart": "2025-03-11T09:00", "technicianId": "t1"}]"#;
        let err = parse_appointments(json, InputFormat::Json).unwrap_err();
        assert!(err.to_string().contains("location"));
    }

    #[test]
    fn test_not_an_array_rejected() {
        assert!(parse_appointments(r#"{"id": "b1"}"#, InputFormat::Json).is_err());
    }

    #[test]
    fn test_filter_schedule() {
        let appts = parse_appointments(JSON, InputFormat::Json).unwrap();
        let day = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();

        let t1 = filter_schedule(appts.clone(), Some("t1"), Some(day));
        assert_eq!(t1.len(), 2);

        let t2_on_day = filter_schedule(appts.clone(), Some("t2"), Some(day));
        assert!(t2_on_day.is_empty());

        assert_eq!(filter_schedule(appts, None, None).len(), 3);
    }
}
