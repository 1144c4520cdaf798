//! Suburb travel network: pairwise travel-time table and zone classifier
//!
//! The network is plain immutable data. The engine ships with the Melbourne
//! tables; tests and deployments for other areas build their own, either in
//! code or from a JSON file.

mod melbourne;

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::defaults::OUTER_ZONE;

/// Errors raised while loading a network definition
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("invalid network file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("location '{location}' is listed in both zone '{first}' and zone '{second}'")]
    DuplicateZoneMember {
        location: String,
        first: String,
        second: String,
    },
}

/// On-disk shape of a network definition.
///
/// ```json
/// {
///   "distances": { "Melbourne": { "Carlton": 8 } },
///   "zones": { "INNER_CITY": ["Melbourne", "Carlton"] },
///   "zoneMinutes": { "INNER_CITY": { "OUTER": 35 } }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkFile {
    #[serde(default)]
    pub distances: BTreeMap<String, BTreeMap<String, u32>>,
    #[serde(default)]
    pub zones: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub zone_minutes: BTreeMap<String, BTreeMap<String, u32>>,
}

/// Sparse travel-time table plus zone membership.
#[derive(Debug, Clone, Default)]
pub struct RoutingNetwork {
    /// origin -> destination -> base minutes
    minutes: HashMap<String, HashMap<String, u32>>,
    /// location -> zone name
    zones: HashMap<String, String>,
    /// origin zone -> destination zone -> base minutes
    zone_minutes: HashMap<String, HashMap<String, u32>>,
}

impl RoutingNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in Melbourne suburb network.
    pub fn melbourne() -> Self {
        let mut network = Self::new();
        for (from, row) in melbourne::SUBURB_MINUTES {
            for (to, minutes) in row.iter() {
                network.insert_minutes(from, to, *minutes);
            }
        }
        for (zone, members) in melbourne::ZONES {
            for member in members.iter() {
                network.zones.insert(member.to_string(), zone.to_string());
            }
        }
        for (from, row) in melbourne::ZONE_MINUTES {
            for (to, minutes) in row.iter() {
                network.insert_zone_minutes(from, to, *minutes);
            }
        }
        network
    }

    /// Parse a network definition from JSON.
    pub fn from_json(content: &str) -> Result<Self, NetworkError> {
        let file: NetworkFile = serde_json::from_str(content)?;
        Self::from_file(file)
    }

    pub fn from_file(file: NetworkFile) -> Result<Self, NetworkError> {
        let mut network = Self::new();

        for (from, row) in &file.distances {
            for (to, minutes) in row {
                network.insert_minutes(from, to, *minutes);
            }
        }

        for (zone, members) in &file.zones {
            for member in members {
                if let Some(first) = network.zones.get(member) {
                    if first != zone {
                        return Err(NetworkError::DuplicateZoneMember {
                            location: member.clone(),
                            first: first.clone(),
                            second: zone.clone(),
                        });
                    }
                }
                network.zones.insert(member.clone(), zone.clone());
            }
        }

        for (from, row) in &file.zone_minutes {
            for (to, minutes) in row {
                network.insert_zone_minutes(from, to, *minutes);
            }
        }

        Ok(network)
    }

    pub fn with_minutes(mut self, from: &str, to: &str, minutes: u32) -> Self {
        self.insert_minutes(from, to, minutes);
        self
    }

    pub fn with_zone(mut self, zone: &str, members: &[&str]) -> Self {
        for member in members {
            self.zones.insert(member.to_string(), zone.to_string());
        }
        self
    }

    pub fn with_zone_minutes(mut self, from_zone: &str, to_zone: &str, minutes: u32) -> Self {
        self.insert_zone_minutes(from_zone, to_zone, minutes);
        self
    }

    fn insert_minutes(&mut self, from: &str, to: &str, minutes: u32) {
        self.minutes
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), minutes);
    }

    fn insert_zone_minutes(&mut self, from: &str, to: &str, minutes: u32) {
        self.zone_minutes
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), minutes);
    }

    /// Table entry for the pair, trying `from -> to` first and `to -> from` second.
    pub fn direct_minutes(&self, from: &str, to: &str) -> Option<u32> {
        self.lookup(&self.minutes, from, to)
            .or_else(|| self.lookup(&self.minutes, to, from))
    }

    /// Zone the location belongs to, or [`OUTER_ZONE`] for anything undeclared.
    pub fn zone_of(&self, location: &str) -> &str {
        self.zones
            .get(location)
            .map(String::as_str)
            .unwrap_or(OUTER_ZONE)
    }

    /// Zone matrix entry, in the given direction only.
    pub fn zone_minutes(&self, from_zone: &str, to_zone: &str) -> Option<u32> {
        self.lookup(&self.zone_minutes, from_zone, to_zone)
    }

    /// Number of table entries (one per direction stored).
    pub fn entry_count(&self) -> usize {
        self.minutes.values().map(HashMap::len).sum()
    }

    fn lookup(
        &self,
        table: &HashMap<String, HashMap<String, u32>>,
        from: &str,
        to: &str,
    ) -> Option<u32> {
        table.get(from).and_then(|row| row.get(to)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_melbourne_direct_entry() {
        let network = RoutingNetwork::melbourne();
        assert_eq!(network.direct_minutes("Melbourne", "Carlton"), Some(8));
        assert_eq!(network.direct_minutes("Melbourne", "Brighton"), Some(25));
    }

    #[test]
    fn test_reverse_lookup() {
        // Only "Carlton -> Parkville" is listed
        let network = RoutingNetwork::melbourne();
        assert_eq!(network.direct_minutes("Parkville", "Carlton"), Some(5));
    }

    #[test]
    fn test_forward_entry_wins_over_reverse() {
        let network = RoutingNetwork::new()
            .with_minutes("A", "B", 10)
            .with_minutes("B", "A", 14);
        assert_eq!(network.direct_minutes("A", "B"), Some(10));
        assert_eq!(network.direct_minutes("B", "A"), Some(14));
    }

    #[test]
    fn test_missing_pair() {
        let network = RoutingNetwork::melbourne();
        assert_eq!(network.direct_minutes("Kew", "Elwood"), None);
    }

    #[test]
    fn test_zone_classifier() {
        let network = RoutingNetwork::melbourne();
        assert_eq!(network.zone_of("Melbourne"), "INNER_CITY");
        assert_eq!(network.zone_of("Brighton"), "BAYSIDE");
        assert_eq!(network.zone_of("Malvern"), "EASTERN");
        assert_eq!(network.zone_of("Geelong"), OUTER_ZONE);
    }

    #[test]
    fn test_zone_matrix_is_directional() {
        let network = RoutingNetwork::new().with_zone_minutes("NORTH", "SOUTH", 40);
        assert_eq!(network.zone_minutes("NORTH", "SOUTH"), Some(40));
        assert_eq!(network.zone_minutes("SOUTH", "NORTH"), None);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "distances": { "Alpha": { "Beta": 7 } },
            "zones": { "EAST": ["Alpha"], "WEST": ["Beta"] },
            "zoneMinutes": { "EAST": { "WEST": 22 } }
        }"#;
        let network = RoutingNetwork::from_json(json).unwrap();
        assert_eq!(network.direct_minutes("Beta", "Alpha"), Some(7));
        assert_eq!(network.zone_of("Beta"), "WEST");
        assert_eq!(network.zone_minutes("EAST", "WEST"), Some(22));
        assert_eq!(network.entry_count(), 1);
    }

    #[test]
    fn test_from_json_rejects_duplicate_zone_member() {
        let json = r#"{ "zones": { "EAST": ["Alpha"], "WEST": ["Alpha"] } }"#;
        let err = RoutingNetwork::from_json(json).unwrap_err();
        assert!(matches!(err, NetworkError::DuplicateZoneMember { ref location, .. } if location == "Alpha"));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            RoutingNetwork::from_json("not json"),
            Err(NetworkError::Parse(_))
        ));
    }
}
