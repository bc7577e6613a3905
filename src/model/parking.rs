use super::nullable::*;

use serde::{Deserialize, Serialize};

//
// AllDayParking
//

/// All-day parking.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AllDayParking {
    /// Number of spaces.
    #[serde(default, deserialize_with = "nullable")]
    pub total_count: u32,

    /// Cost for Metro riders.
    #[serde(default)]
    pub rider_cost: Option<f64>,

    /// Cost for non-riders.
    #[serde(default)]
    pub non_rider_cost: Option<f64>,
}

//
// ShortTermParking
//

/// Short-term parking.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShortTermParking {
    /// Saturday cost for Metro riders.
    #[serde(default)]
    pub saturday_rider_cost: Option<f64>,

    /// Saturday cost for non-riders.
    #[serde(default)]
    pub saturday_non_rider_cost: Option<f64>,

    /// Number of spaces.
    #[serde(default, deserialize_with = "nullable")]
    pub total_count: u32,

    /// Notes.
    #[serde(default)]
    pub notes: Option<String>,
}

//
// StationParking
//

/// Parking at a station.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationParking {
    /// Station code.
    #[serde(default, deserialize_with = "nullable")]
    pub code: String,

    /// Notes.
    #[serde(default)]
    pub notes: Option<String>,

    /// All-day parking.
    #[serde(default, deserialize_with = "nullable")]
    pub all_day_parking: AllDayParking,

    /// Short-term parking.
    #[serde(default, deserialize_with = "nullable")]
    pub short_term_parking: ShortTermParking,
}

//
// ParkingSelection
//

/// Result of a parking lookup.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum ParkingSelection {
    /// A single station's parking.
    Station(StationParking),

    /// Parking for all stations.
    All(Vec<StationParking>),
}
