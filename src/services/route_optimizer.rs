//! Daily visiting order for one technician.
//!
//! Appointments already carry fixed start times, so this is a sequencing
//! problem rather than free routing. The heuristic is a nearest-neighbour
//! walk scored by travel time plus time-window penalties; it is **not**
//! guaranteed to find the optimal order.
//!
//! The optimizer never rejects input. Unreachable appointments are still
//! placed and reported through the plan's warnings so the human scheduler
//! can decide what to do.

use std::collections::HashSet;

use tracing::debug;

use super::travel_time::TravelTimeEstimator;
use crate::types::{Appointment, RoutePlan};

/// Minutes needed between two visits: driving plus the buffer.
fn required_minutes(travel: u32, buffer: u32) -> i64 {
    i64::from(travel) + i64::from(buffer)
}

/// Score of visiting `candidate` right after `last`, with `travel` minutes
/// of driving between them. Lower is better.
fn constraint_score(
    estimator: &TravelTimeEstimator<'_>,
    last: &Appointment,
    candidate: &Appointment,
    travel: u32,
) -> f64 {
    let params = estimator.params();
    let gap = last.minutes_until(candidate);
    let required = required_minutes(travel, params.buffer_minutes);

    let mut score = f64::from(travel);
    if gap < required {
        score += params.late_penalty + (required - gap) as f64;
    } else {
        let excess = gap - required;
        if excess > i64::from(params.idle_allowance_minutes) {
            score += params.idle_penalty_factor * excess as f64;
        }
    }
    score
}

fn tight_schedule_warning(last: &Appointment, next: &Appointment, gap: i64, required: i64) -> String {
    format!(
        "Tight schedule: only {} minutes between {} and {} (need {} minutes, {} short)",
        gap,
        last.location,
        next.location,
        required,
        required - gap
    )
}

/// Heuristic visiting order for `appointments`, starting from `start_location`.
///
/// Appointments need not be sorted. The result always contains every input
/// appointment exactly once.
pub fn optimize_route<'a>(
    estimator: &TravelTimeEstimator<'_>,
    appointments: &'a [Appointment],
    start_location: &str,
) -> RoutePlan<'a> {
    if appointments.len() <= 1 {
        return RoutePlan::trivial(appointments);
    }

    let params = estimator.params();

    let mut remaining: Vec<&'a Appointment> = appointments.iter().collect();
    // stable: equal start times keep input order
    remaining.sort_by_key(|a| a.scheduled_start);

    let first = remaining.remove(0);
    let mut total_travel = estimator.estimate_travel_minutes(
        start_location,
        &first.location,
        first.scheduled_start,
    );
    let mut total_distance =
        estimator.estimate_distance_km(start_location, &first.location, first.scheduled_start);

    let mut route: Vec<&'a Appointment> = Vec::with_capacity(appointments.len());
    route.push(first);
    let mut warnings = Vec::new();

    while !remaining.is_empty() {
        let last = route[route.len() - 1];

        let mut best: Option<(usize, f64)> = None;
        for (idx, candidate) in remaining.iter().enumerate() {
            let travel = estimator.estimate_travel_minutes(
                &last.location,
                &candidate.location,
                candidate.scheduled_start,
            );
            let score = constraint_score(estimator, last, candidate, travel);
            if best.map_or(true, |(_, best_score)| score < best_score) {
                best = Some((idx, score));
            }
        }

        // Scores are always finite, so this only guards against NaN tunables.
        let next = match best {
            Some((idx, _)) => remaining.remove(idx),
            None => remaining.remove(0),
        };

        let travel = estimator.estimate_travel_minutes(
            &last.location,
            &next.location,
            next.scheduled_start,
        );
        let gap = last.minutes_until(next);
        let required = required_minutes(travel, params.buffer_minutes);
        if gap < required {
            warnings.push(tight_schedule_warning(last, next, gap, required));
        }

        total_travel = total_travel.saturating_add(travel);
        total_distance = total_distance.saturating_add(estimator.estimate_distance_km(
            &last.location,
            &next.location,
            next.scheduled_start,
        ));
        route.push(next);
    }

    if route.len() > 2 {
        warnings.extend(zone_warnings(estimator, &route));
    }

    debug!(
        stops = route.len(),
        total_travel,
        total_distance,
        warnings = warnings.len(),
        "route optimized"
    );

    RoutePlan {
        ordered_appointments: route,
        total_travel_minutes: total_travel,
        total_distance_km: total_distance,
        warnings,
    }
}

/// Zigzag and zone-spread warnings for a finished route.
///
/// Zigzags are listed in route order, followed by the zone-count warning.
fn zone_warnings(estimator: &TravelTimeEstimator<'_>, route: &[&Appointment]) -> Vec<String> {
    let zones: Vec<&str> = route
        .iter()
        .map(|a| estimator.zone_of(&a.location))
        .collect();

    let mut warnings = Vec::new();

    for (i, window) in zones.windows(3).enumerate() {
        if window[0] == window[2] && window[1] != window[0] {
            warnings.push(format!(
                "Potential zigzag detected: {} → {} → {}",
                route[i].location,
                route[i + 1].location,
                route[i + 2].location
            ));
        }
    }

    let distinct: HashSet<&str> = zones.iter().copied().collect();
    if distinct.len() > 2 {
        warnings.push(format!(
            "Route crosses {} zones: consider grouping appointments by area for efficiency",
            distinct.len()
        ));
    }

    warnings
}
