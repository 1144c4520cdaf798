//! Time-dependent traffic adjustment
//!
//! Melbourne traffic patterns reduced to a single multiplier on free-flow
//! travel time: weekday peak / semi-peak, Saturday shopping hours, weekday
//! school holidays and the June–September rain season.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use super::params::RoutingParams;

/// Which part of the week/day an instant falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficPeriod {
    Peak,
    SemiPeak,
    SaturdayShopping,
    OffPeak,
}

pub fn classify(at: NaiveDateTime) -> TrafficPeriod {
    let hour = at.hour();
    match at.weekday() {
        Weekday::Sat => {
            if (9..17).contains(&hour) {
                TrafficPeriod::SaturdayShopping
            } else {
                TrafficPeriod::OffPeak
            }
        }
        Weekday::Sun => TrafficPeriod::OffPeak,
        _ => {
            if (7..9).contains(&hour) || (16..19).contains(&hour) {
                TrafficPeriod::Peak
            } else if hour == 6 || (9..16).contains(&hour) || hour == 19 {
                TrafficPeriod::SemiPeak
            } else {
                TrafficPeriod::OffPeak
            }
        }
    }
}

fn is_weekday(at: NaiveDateTime) -> bool {
    !matches!(at.weekday(), Weekday::Sat | Weekday::Sun)
}

fn is_winter(at: NaiveDateTime) -> bool {
    (6..=9).contains(&at.month())
}

/// Combined multiplier for travel starting at `at`.
///
/// The school-holiday abatement only touches the weekday period multiplier
/// and never takes it below 1.0; the winter factor is applied last.
pub fn traffic_multiplier(params: &RoutingParams, at: NaiveDateTime) -> f64 {
    let mut multiplier = match classify(at) {
        TrafficPeriod::Peak => params.peak_multiplier,
        TrafficPeriod::SemiPeak => params.semi_peak_multiplier,
        TrafficPeriod::SaturdayShopping => params.saturday_multiplier,
        TrafficPeriod::OffPeak => 1.0,
    };

    if is_weekday(at) && params.is_school_holiday(at.date()) {
        multiplier = (multiplier * params.holiday_abatement).max(1.0);
    }

    if is_winter(at) {
        multiplier *= params.winter_multiplier;
    }

    multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // 2025-03-11 is a Tuesday, outside holidays and winter.
    #[test]
    fn test_weekday_periods() {
        assert_eq!(classify(at(2025, 3, 11, 5, 59)), TrafficPeriod::OffPeak);
        assert_eq!(classify(at(2025, 3, 11, 6, 0)), TrafficPeriod::SemiPeak);
        assert_eq!(classify(at(2025, 3, 11, 7, 0)), TrafficPeriod::Peak);
        assert_eq!(classify(at(2025, 3, 11, 8, 59)), TrafficPeriod::Peak);
        assert_eq!(classify(at(2025, 3, 11, 9, 0)), TrafficPeriod::SemiPeak);
        assert_eq!(classify(at(2025, 3, 11, 15, 59)), TrafficPeriod::SemiPeak);
        assert_eq!(classify(at(2025, 3, 11, 16, 0)), TrafficPeriod::Peak);
        assert_eq!(classify(at(2025, 3, 11, 19, 0)), TrafficPeriod::SemiPeak);
        assert_eq!(classify(at(2025, 3, 11, 20, 0)), TrafficPeriod::OffPeak);
    }

    #[test]
    fn test_weekend_periods() {
        // 2025-03-15 Saturday, 2025-03-16 Sunday
        assert_eq!(classify(at(2025, 3, 15, 8, 0)), TrafficPeriod::OffPeak);
        assert_eq!(classify(at(2025, 3, 15, 9, 0)), TrafficPeriod::SaturdayShopping);
        assert_eq!(classify(at(2025, 3, 15, 17, 0)), TrafficPeriod::OffPeak);
        assert_eq!(classify(at(2025, 3, 16, 8, 0)), TrafficPeriod::OffPeak);
    }

    #[test]
    fn test_multiplier_outside_holidays_and_winter() {
        let params = RoutingParams::default();
        assert!(close(traffic_multiplier(&params, at(2025, 3, 11, 8, 0)), 1.4));
        assert!(close(traffic_multiplier(&params, at(2025, 3, 11, 11, 0)), 1.15));
        assert!(close(traffic_multiplier(&params, at(2025, 3, 15, 11, 0)), 1.2));
        assert!(close(traffic_multiplier(&params, at(2025, 3, 16, 11, 0)), 1.0));
    }

    #[test]
    fn test_school_holiday_abates_weekday_peak() {
        // 2025-04-08 is a Tuesday inside the autumn band
        let params = RoutingParams::default();
        assert!(close(traffic_multiplier(&params, at(2025, 4, 8, 8, 0)), 1.12));
        // semi-peak 1.15 * 0.8 = 0.92, floored to 1.0
        assert!(close(traffic_multiplier(&params, at(2025, 4, 8, 11, 0)), 1.0));
    }

    #[test]
    fn test_school_holiday_ignores_saturday() {
        // 2025-04-12 is a Saturday inside the autumn band
        let params = RoutingParams::default();
        assert!(close(traffic_multiplier(&params, at(2025, 4, 12, 11, 0)), 1.2));
    }

    #[test]
    fn test_winter_applied_last() {
        let params = RoutingParams::default();
        // 2025-06-10 Tuesday, winter, no holiday
        assert!(close(traffic_multiplier(&params, at(2025, 6, 10, 8, 0)), 1.4 * 1.1));
        // 2025-07-08 Tuesday, winter and holiday: max(1.0, 1.4*0.8) * 1.1
        assert!(close(traffic_multiplier(&params, at(2025, 7, 8, 8, 0)), 1.12 * 1.1));
        // Sunday in winter still gets the rain factor
        assert!(close(traffic_multiplier(&params, at(2025, 6, 15, 11, 0)), 1.1));
    }
}
