//! Route planning handlers

use anyhow::Result;
use tracing::{info, warn};

use route_engine::services::{optimize_route, summarize_day};

use super::import::{filter_schedule, load_appointments};
use super::Engine;
use crate::cli::RouteArgs;

/// `optimize`: visiting order for the selected appointments
pub fn handle_optimize(engine: &Engine, args: &RouteArgs) -> Result<String> {
    let appointments = load_schedule(args)?;
    let start = engine.start_location(args.start.as_deref());

    let estimator = engine.estimator();
    let plan = optimize_route(&estimator, &appointments, start);
    log_warnings(&plan.warnings);

    info!(
        "Optimized {} appointments from {}: {} min, {} km",
        plan.len(),
        start,
        plan.total_travel_minutes,
        plan.total_distance_km
    );

    Ok(serde_json::to_string_pretty(&plan)?)
}

/// `summary`: daily route summary for a technician
pub fn handle_summary(engine: &Engine, args: &RouteArgs) -> Result<String> {
    let appointments = load_schedule(args)?;
    let start = engine.start_location(args.start.as_deref());

    let estimator = engine.estimator();
    let summary = summarize_day(&estimator, &appointments, start);
    log_warnings(&summary.plan.warnings);

    info!(
        "Summarized {} appointments, working hours {}",
        summary.appointment_count, summary.working_hours
    );

    Ok(serde_json::to_string_pretty(&summary)?)
}

fn load_schedule(args: &RouteArgs) -> Result<Vec<route_engine::types::Appointment>> {
    let appointments = load_appointments(&args.input)?;
    let selected = filter_schedule(appointments, args.technician.as_deref(), args.date);
    if selected.is_empty() {
        warn!("No appointments match the given technician/date filter");
    }
    Ok(selected)
}

fn log_warnings(warnings: &[String]) {
    for w in warnings {
        warn!("{}", w);
    }
}
