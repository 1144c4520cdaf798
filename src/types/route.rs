//! Route types

use serde::Serialize;

use super::Appointment;

/// Visiting order for one technician's day.
///
/// Holds references into the caller's appointment list; the optimizer only
/// reorders, it never copies or edits appointments.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan<'a> {
    pub ordered_appointments: Vec<&'a Appointment>,
    pub total_travel_minutes: u32,
    pub total_distance_km: u32,
    /// Advisory scheduling-risk messages, in the order they were detected.
    pub warnings: Vec<String>,
}

impl<'a> RoutePlan<'a> {
    /// Plan with no travel, used for empty and single-stop days.
    pub fn trivial(appointments: &'a [Appointment]) -> Self {
        Self {
            ordered_appointments: appointments.iter().collect(),
            total_travel_minutes: 0,
            total_distance_km: 0,
            warnings: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.ordered_appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_appointments.is_empty()
    }
}

/// Technician-facing report for a single day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRouteSummary<'a> {
    pub plan: RoutePlan<'a>,
    /// `"HH:MM - HH:MM"`, from the calendar's first start to its last end.
    pub working_hours: String,
    pub appointment_count: usize,
}
