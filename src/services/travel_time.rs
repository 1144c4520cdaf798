//! Travel time, distance and cost estimation between suburbs
//!
//! Resolution order for the free-flow base time: suburb table (either
//! direction), then the zone matrix, then the configured default. The base is
//! scaled by the traffic multiplier for the departure instant and rounded up
//! to whole minutes.

use chrono::NaiveDateTime;
use tracing::trace;

use super::network::RoutingNetwork;
use super::params::RoutingParams;
use super::traffic::traffic_multiplier;

/// Products this close to an integer are treated as that integer, so that
/// `10 * 1.4` rounds up to 14 and not 15.
const ROUNDING_TOLERANCE: f64 = 1e-6;

/// Where a base travel time came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseSource {
    SameLocation,
    Table,
    Zone,
    Default,
}

/// Stateless estimator over a borrowed network and parameter set.
#[derive(Debug, Clone, Copy)]
pub struct TravelTimeEstimator<'a> {
    network: &'a RoutingNetwork,
    params: &'a RoutingParams,
}

impl<'a> TravelTimeEstimator<'a> {
    pub fn new(network: &'a RoutingNetwork, params: &'a RoutingParams) -> Self {
        Self { network, params }
    }

    pub fn params(&self) -> &'a RoutingParams {
        self.params
    }

    /// Free-flow minutes between two locations and where the figure came from.
    pub fn base_minutes(&self, from: &str, to: &str) -> (u32, BaseSource) {
        if from == to {
            return (0, BaseSource::SameLocation);
        }

        if let Some(minutes) = self.network.direct_minutes(from, to) {
            return (minutes, BaseSource::Table);
        }

        let from_zone = self.network.zone_of(from);
        let to_zone = self.network.zone_of(to);
        match self.network.zone_minutes(from_zone, to_zone) {
            Some(minutes) => (minutes, BaseSource::Zone),
            None => (self.params.default_zone_minutes, BaseSource::Default),
        }
    }

    /// Travel minutes from `from` to `to` when departing at `at`.
    ///
    /// Never fails: unknown locations fall back to the zone matrix and then
    /// to the default.
    pub fn estimate_travel_minutes(&self, from: &str, to: &str, at: NaiveDateTime) -> u32 {
        let (base, source) = self.base_minutes(from, to);
        if source == BaseSource::SameLocation {
            return 0;
        }

        let multiplier = traffic_multiplier(self.params, at);
        let minutes = ceil_minutes(f64::from(base) * multiplier);
        trace!(from, to, base, ?source, multiplier, minutes, "travel estimate");
        minutes
    }

    /// Approximate road distance, assuming a flat average urban speed.
    pub fn estimate_distance_km(&self, from: &str, to: &str, at: NaiveDateTime) -> u32 {
        let minutes = self.estimate_travel_minutes(from, to, at);
        (f64::from(minutes) / 60.0 * self.params.average_speed_kmh).round() as u32
    }

    /// Fuel and vehicle cost of the trip, rounded to cents.
    pub fn estimate_cost(&self, from: &str, to: &str, at: NaiveDateTime) -> f64 {
        let distance = self.estimate_distance_km(from, to, at);
        (f64::from(distance) * self.params.cost_per_km * 100.0).round() / 100.0
    }

    pub fn zone_of(&self, location: &str) -> &'a str {
        self.network.zone_of(location)
    }
}

fn ceil_minutes(value: f64) -> u32 {
    if value <= 0.0 {
        return 0;
    }
    (value - ROUNDING_TOLERANCE).ceil().max(0.0) as u32
}
