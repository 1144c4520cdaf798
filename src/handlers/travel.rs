//! Point-to-point travel estimate handler

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use route_engine::types::parse_datetime;

use super::Engine;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelEstimate {
    pub from: String,
    pub to: String,
    pub from_zone: String,
    pub to_zone: String,
    pub departure: NaiveDateTime,
    pub minutes: u32,
    pub distance_km: u32,
    pub cost: f64,
}

/// Resolve `--at`; without it the current local time is used.
pub fn resolve_departure(at: Option<&str>) -> Result<NaiveDateTime> {
    match at {
        Some(raw) => parse_datetime(raw)
            .with_context(|| format!("Cannot parse departure time '{}'", raw)),
        None => Ok(Local::now().naive_local()),
    }
}

pub fn estimate(engine: &Engine, from: &str, to: &str, at: NaiveDateTime) -> TravelEstimate {
    let estimator = engine.estimator();
    TravelEstimate {
        from: from.to_string(),
        to: to.to_string(),
        from_zone: estimator.zone_of(from).to_string(),
        to_zone: estimator.zone_of(to).to_string(),
        departure: at,
        minutes: estimator.estimate_travel_minutes(from, to, at),
        distance_km: estimator.estimate_distance_km(from, to, at),
        cost: estimator.estimate_cost(from, to, at),
    }
}

/// `travel`: minutes, distance and cost between two locations
pub fn handle_travel(engine: &Engine, from: &str, to: &str, at: Option<&str>) -> Result<String> {
    let departure = resolve_departure(at)?;
    let result = estimate(engine, from, to, departure);
    Ok(serde_json::to_string_pretty(&result)?)
}
