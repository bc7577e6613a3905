use super::nullable::*;

use serde::{Deserialize, Serialize};

//
// Entrance
//

/// Station entrance.
///
/// The station codes are weak references: they may not resolve to a station in the current
/// snapshot.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Entrance {
    /// Description.
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,

    /// Identifier.
    #[serde(rename = "ID", default, deserialize_with = "nullable")]
    pub id: String,

    /// Latitude.
    #[serde(default, deserialize_with = "nullable")]
    pub lat: f64,

    /// Longitude.
    #[serde(default, deserialize_with = "nullable")]
    pub lon: f64,

    /// Name.
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    /// First station code.
    #[serde(default, deserialize_with = "nullable")]
    pub station_code1: String,

    /// Second station code (empty if unused).
    #[serde(default, deserialize_with = "nullable")]
    pub station_code2: String,
}

impl Entrance {
    /// Whether this entrance leads to the station.
    ///
    /// An empty code never matches, as unused code slots are empty.
    pub fn serves(&self, station_code: &str) -> bool {
        !station_code.is_empty()
            && ((self.station_code1 == station_code) || (self.station_code2 == station_code))
    }
}

/// Entrances leading to a station.
pub fn entrances_for(entrances: &[Entrance], station_code: &str) -> Vec<Entrance> {
    entrances
        .iter()
        .filter(|entrance| entrance.serves(station_code))
        .cloned()
        .collect()
}
