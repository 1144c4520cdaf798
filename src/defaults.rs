use chrono::NaiveTime;

/// Depot / starting point used when the caller does not name one.
pub const DEFAULT_START_LOCATION: &str = "Melbourne";

/// Zone assigned to every location not listed in any declared zone.
pub const OUTER_ZONE: &str = "OUTER";

pub const DEFAULT_APPOINTMENT_DURATION_MINUTES: u32 = 120;

pub const DEFAULT_BUFFER_MINUTES: u32 = 15;
pub const DEFAULT_PEAK_MULTIPLIER: f64 = 1.4;
pub const DEFAULT_SEMI_PEAK_MULTIPLIER: f64 = 1.15;
pub const DEFAULT_SATURDAY_MULTIPLIER: f64 = 1.2;
pub const DEFAULT_HOLIDAY_ABATEMENT: f64 = 0.8;
pub const DEFAULT_WINTER_MULTIPLIER: f64 = 1.1;
pub const DEFAULT_ZONE_FALLBACK_MINUTES: u32 = 30;
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 25.0;
pub const DEFAULT_COST_PER_KM: f64 = 0.15;

/// Score added to a candidate that cannot be reached in time.
pub const DEFAULT_LATE_PENALTY: f64 = 1000.0;
/// Idle time beyond the required gap that is tolerated without penalty.
pub const DEFAULT_IDLE_ALLOWANCE_MINUTES: u32 = 60;
pub const DEFAULT_IDLE_PENALTY_FACTOR: f64 = 0.5;

/// How many days ahead customers may pick from.
pub const DEFAULT_BOOKING_HORIZON_DAYS: u32 = 14;
pub const MAX_BOOKING_HORIZON_DAYS: u32 = 366;

pub fn default_appointment_duration_minutes() -> u32 {
    DEFAULT_APPOINTMENT_DURATION_MINUTES
}

pub fn default_business_start() -> NaiveTime {
    NaiveTime::from_hms_opt(7, 0, 0).expect("valid static business start")
}

pub fn default_business_end() -> NaiveTime {
    NaiveTime::from_hms_opt(19, 0, 0).expect("valid static business end")
}

pub fn default_work_start() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).expect("valid static default work start")
}

pub fn default_work_end() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).expect("valid static default work end")
}
