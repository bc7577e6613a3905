use super::nullable::*;

use serde::{Deserialize, Serialize};

//
// Station
//

/// Station directory entry.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Station {
    /// Name.
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    /// Station code.
    #[serde(default, deserialize_with = "nullable")]
    pub code: String,
}

//
// Address
//

/// Street address.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    /// City.
    #[serde(default, deserialize_with = "nullable")]
    pub city: String,

    /// State.
    #[serde(default, deserialize_with = "nullable")]
    pub state: String,

    /// Street.
    #[serde(default, deserialize_with = "nullable")]
    pub street: String,

    /// Zip code.
    #[serde(default, deserialize_with = "nullable")]
    pub zip: String,
}

//
// StationDetail
//

/// Detailed station record.
///
/// The station code is unique within a snapshot. Stations served by more than one platform (e.g.
/// Metro Center) appear once per platform, cross-referenced via
/// [station_together_1](Self::station_together_1) and
/// [station_together_2](Self::station_together_2).
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationDetail {
    /// Address.
    #[serde(default, deserialize_with = "nullable")]
    pub address: Address,

    /// Station code.
    #[serde(default, deserialize_with = "nullable")]
    pub code: String,

    /// Latitude.
    #[serde(default, deserialize_with = "nullable")]
    pub lat: f64,

    /// Longitude.
    #[serde(default, deserialize_with = "nullable")]
    pub lon: f64,

    /// First line code.
    #[serde(default, deserialize_with = "nullable")]
    pub line_code1: String,

    /// Second line code (empty if unused).
    #[serde(default, deserialize_with = "nullable")]
    pub line_code2: String,

    /// Third line code (empty if unused).
    #[serde(default, deserialize_with = "nullable")]
    pub line_code3: String,

    /// Fourth line code (empty if unused).
    #[serde(default, deserialize_with = "nullable")]
    pub line_code4: String,

    /// Name.
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    /// First connected platform's station code (empty if none).
    #[serde(rename = "StationTogether1", default, deserialize_with = "nullable")]
    pub station_together_1: String,

    /// Second connected platform's station code (empty if none).
    #[serde(rename = "StationTogether2", default, deserialize_with = "nullable")]
    pub station_together_2: String,
}

impl StationDetail {
    /// Line codes served by this platform, skipping unused slots.
    pub fn line_codes(&self) -> impl Iterator<Item = &str> {
        [
            &self.line_code1,
            &self.line_code2,
            &self.line_code3,
            &self.line_code4,
        ]
        .into_iter()
        .map(String::as_str)
        .filter(|code| !code.is_empty())
    }

    /// This station's code followed by the codes of its connected platforms.
    ///
    /// Useful for merging multi-platform stations into one logical station.
    pub fn platform_codes(&self) -> impl Iterator<Item = &str> {
        [
            &self.code,
            &self.station_together_1,
            &self.station_together_2,
        ]
        .into_iter()
        .map(String::as_str)
        .filter(|code| !code.is_empty())
    }

    /// Whether this platform is connected to another station code.
    pub fn is_together_with(&self, code: &str) -> bool {
        !code.is_empty() && ((self.station_together_1 == code) || (self.station_together_2 == code))
    }
}
