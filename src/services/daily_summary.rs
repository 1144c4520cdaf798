//! Technician-facing summary of one working day

use chrono::NaiveDateTime;

use super::route_optimizer::optimize_route;
use super::travel_time::TravelTimeEstimator;
use crate::defaults::{default_work_end, default_work_start};
use crate::types::{Appointment, DailyRouteSummary};

/// Build the day report: optimized plan plus the calendar span of the day.
///
/// The working-hours span follows the calendar (earliest start to the end of
/// the chronologically last appointment), not the optimized visiting order.
pub fn summarize_day<'a>(
    estimator: &TravelTimeEstimator<'_>,
    appointments: &'a [Appointment],
    start_location: &str,
) -> DailyRouteSummary<'a> {
    let plan = optimize_route(estimator, appointments, start_location);

    DailyRouteSummary {
        plan,
        working_hours: working_hours(appointments),
        appointment_count: appointments.len(),
    }
}

/// `"HH:MM - HH:MM"` span of the calendar day. Falls back to the default
/// business day when there is nothing booked.
pub fn working_hours(appointments: &[Appointment]) -> String {
    let first = appointments.iter().min_by_key(|a| a.scheduled_start);
    // max_by_key returns the last maximum, matching a stable chronological sort
    let last = appointments.iter().max_by_key(|a| a.scheduled_start);

    match (first, last) {
        (Some(first), Some(last)) => format!(
            "{} - {}",
            first.scheduled_start.format("%H:%M"),
            format_end(first.scheduled_start, last.scheduled_end())
        ),
        _ => format!(
            "{} - {}",
            default_work_start().format("%H:%M"),
            default_work_end().format("%H:%M")
        ),
    }
}

fn format_end(day_start: NaiveDateTime, end: NaiveDateTime) -> String {
    let days = (end.date() - day_start.date()).num_days();
    if days > 0 {
        format!("{} (+{}d)", end.format("%H:%M"), days)
    } else {
        end.format("%H:%M").to_string()
    }
}
