//! Configuration management

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{self, Context, Result};

use crate::defaults::DEFAULT_START_LOCATION;
use crate::services::params::RoutingParams;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON network file replacing the built-in Melbourne tables
    pub network_file: Option<PathBuf>,

    /// Where technicians start their day when the command line does not say
    pub start_location: String,

    /// Directory for the rolling log file
    pub logs_dir: PathBuf,

    /// Travel and sequencing tunables
    pub routing: RoutingParams,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network_file = lookup("ROUTE_NETWORK_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let start_location = lookup("ROUTE_START_LOCATION")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_START_LOCATION.to_string());

        let logs_dir = PathBuf::from(lookup("LOGS_DIR").unwrap_or_else(|| "./logs".to_string()));

        let defaults = RoutingParams::default();
        let routing = RoutingParams {
            buffer_minutes: parse_or(&lookup, "ROUTING_BUFFER_MINUTES", defaults.buffer_minutes)?,
            peak_multiplier: parse_or(&lookup, "ROUTING_PEAK_MULTIPLIER", defaults.peak_multiplier)?,
            semi_peak_multiplier: parse_or(
                &lookup,
                "ROUTING_SEMI_PEAK_MULTIPLIER",
                defaults.semi_peak_multiplier,
            )?,
            saturday_multiplier: parse_or(
                &lookup,
                "ROUTING_SATURDAY_MULTIPLIER",
                defaults.saturday_multiplier,
            )?,
            holiday_abatement: parse_or(
                &lookup,
                "ROUTING_HOLIDAY_ABATEMENT",
                defaults.holiday_abatement,
            )?,
            winter_multiplier: parse_or(
                &lookup,
                "ROUTING_WINTER_MULTIPLIER",
                defaults.winter_multiplier,
            )?,
            default_zone_minutes: parse_or(
                &lookup,
                "ROUTING_DEFAULT_ZONE_MINUTES",
                defaults.default_zone_minutes,
            )?,
            average_speed_kmh: parse_or(
                &lookup,
                "ROUTING_AVERAGE_SPEED_KMH",
                defaults.average_speed_kmh,
            )?,
            cost_per_km: parse_or(&lookup, "ROUTING_COST_PER_KM", defaults.cost_per_km)?,
            late_penalty: parse_or(&lookup, "ROUTING_LATE_PENALTY", defaults.late_penalty)?,
            idle_allowance_minutes: parse_or(
                &lookup,
                "ROUTING_IDLE_ALLOWANCE_MINUTES",
                defaults.idle_allowance_minutes,
            )?,
            idle_penalty_factor: parse_or(
                &lookup,
                "ROUTING_IDLE_PENALTY_FACTOR",
                defaults.idle_penalty_factor,
            )?,
            school_holidays: defaults.school_holidays,
        };

        if routing.average_speed_kmh <= 0.0 {
            anyhow::bail!(
                "ROUTING_AVERAGE_SPEED_KMH must be positive (current: {})",
                routing.average_speed_kmh
            );
        }

        Ok(Self {
            network_file,
            start_location,
            logs_dir,
            routing,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{} has an invalid value '{}'", key, raw)),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = config_from(&[]).unwrap();
        assert!(config.network_file.is_none());
        assert_eq!(config.start_location, "Melbourne");
        assert_eq!(config.logs_dir, PathBuf::from("./logs"));
        assert_eq!(config.routing, RoutingParams::default());
    }

    #[test]
    fn test_config_network_file_some_when_set() {
        let config = config_from(&[("ROUTE_NETWORK_FILE", "/etc/route/sydney.json")]).unwrap();
        assert_eq!(config.network_file, Some(PathBuf::from("/etc/route/sydney.json")));
    }

    #[test]
    fn test_config_blank_start_location_falls_back() {
        let config = config_from(&[("ROUTE_START_LOCATION", "  ")]).unwrap();
        assert_eq!(config.start_location, "Melbourne");
    }

    #[test]
    fn test_config_routing_overrides() {
        let config = config_from(&[
            ("ROUTING_BUFFER_MINUTES", "20"),
            ("ROUTING_PEAK_MULTIPLIER", "1.5"),
            ("ROUTING_COST_PER_KM", "0.2"),
        ])
        .unwrap();
        assert_eq!(config.routing.buffer_minutes, 20);
        assert!((config.routing.peak_multiplier - 1.5).abs() < f64::EPSILON);
        assert!((config.routing.cost_per_km - 0.2).abs() < f64::EPSILON);
        assert!((config.routing.semi_peak_multiplier - 1.15).abs() < f64::EPSILON);
    }

    #[test]
    fn test_config_rejects_unparseable_value() {
        let err = config_from(&[("ROUTING_BUFFER_MINUTES", "fifteen")]).unwrap_err();
        assert!(err.to_string().contains("ROUTING_BUFFER_MINUTES"));
    }

    #[test]
    fn test_config_rejects_non_positive_speed() {
        assert!(config_from(&[("ROUTING_AVERAGE_SPEED_KMH", "0")]).is_err());
    }
}
