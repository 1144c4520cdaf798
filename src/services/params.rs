//! Tunable constants for travel estimation and route sequencing

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::defaults::*;

/// A recurring yearly date band, inclusive on both ends.
///
/// A band whose end month is earlier than its start month wraps over New
/// Year (e.g. 20 Dec – 31 Jan).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayBand {
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

impl HolidayBand {
    pub const fn new(start_month: u32, start_day: u32, end_month: u32, end_day: u32) -> Self {
        Self {
            start_month,
            start_day,
            end_month,
            end_day,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let key = (date.month(), date.day());
        let start = (self.start_month, self.start_day);
        let end = (self.end_month, self.end_day);
        if start <= end {
            key >= start && key <= end
        } else {
            key >= start || key <= end
        }
    }
}

/// Victorian school holidays, simplified to fixed yearly bands.
pub fn default_school_holidays() -> Vec<HolidayBand> {
    vec![
        HolidayBand::new(12, 20, 1, 31), // summer
        HolidayBand::new(4, 1, 4, 15),   // autumn
        HolidayBand::new(7, 1, 7, 15),   // winter
        HolidayBand::new(9, 20, 10, 5),  // spring
    ]
}

/// Configuration for the travel estimator and the route optimizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingParams {
    /// Minimum slack required on top of travel time between two visits
    pub buffer_minutes: u32,
    /// Weekday 07–09 and 16–19
    pub peak_multiplier: f64,
    /// Weekday 06–07, 09–16 and 19–20
    pub semi_peak_multiplier: f64,
    /// Saturday 09–17
    pub saturday_multiplier: f64,
    /// Applied to the weekday multiplier during school holidays, floored at 1.0
    pub holiday_abatement: f64,
    /// June–September, applied last
    pub winter_multiplier: f64,
    /// Base minutes when neither the suburb table nor the zone matrix knows the pair
    pub default_zone_minutes: u32,
    pub average_speed_kmh: f64,
    pub cost_per_km: f64,
    pub late_penalty: f64,
    pub idle_allowance_minutes: u32,
    pub idle_penalty_factor: f64,
    pub school_holidays: Vec<HolidayBand>,
}

impl Default for RoutingParams {
    fn default() -> Self {
        Self {
            buffer_minutes: DEFAULT_BUFFER_MINUTES,
            peak_multiplier: DEFAULT_PEAK_MULTIPLIER,
            semi_peak_multiplier: DEFAULT_SEMI_PEAK_MULTIPLIER,
            saturday_multiplier: DEFAULT_SATURDAY_MULTIPLIER,
            holiday_abatement: DEFAULT_HOLIDAY_ABATEMENT,
            winter_multiplier: DEFAULT_WINTER_MULTIPLIER,
            default_zone_minutes: DEFAULT_ZONE_FALLBACK_MINUTES,
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
            cost_per_km: DEFAULT_COST_PER_KM,
            late_penalty: DEFAULT_LATE_PENALTY,
            idle_allowance_minutes: DEFAULT_IDLE_ALLOWANCE_MINUTES,
            idle_penalty_factor: DEFAULT_IDLE_PENALTY_FACTOR,
            school_holidays: default_school_holidays(),
        }
    }
}

impl RoutingParams {
    /// Params with every traffic adjustment disabled (multiplier always 1.0).
    /// Handy when the raw table values are wanted.
    pub fn free_flow() -> Self {
        Self {
            peak_multiplier: 1.0,
            semi_peak_multiplier: 1.0,
            saturday_multiplier: 1.0,
            winter_multiplier: 1.0,
            school_holidays: vec![],
            ..Self::default()
        }
    }

    pub fn is_school_holiday(&self, date: NaiveDate) -> bool {
        self.school_holidays.iter().any(|band| band.contains(date))
    }
}
