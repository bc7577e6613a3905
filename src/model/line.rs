use super::nullable::*;

use serde::{Deserialize, Serialize};

//
// LineInfo
//

/// Rail line.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LineInfo {
    /// Display name, e.g. "Red".
    #[serde(default, deserialize_with = "nullable")]
    pub display_name: String,

    /// Terminal station code.
    #[serde(default, deserialize_with = "nullable")]
    pub end_station_code: String,

    /// First intermediate terminal station code (empty if none).
    #[serde(rename = "InternalDestination1", default, deserialize_with = "nullable")]
    pub internal_destination_1: String,

    /// Second intermediate terminal station code (empty if none).
    #[serde(rename = "InternalDestination2", default, deserialize_with = "nullable")]
    pub internal_destination_2: String,

    /// Line code, e.g. "RD".
    #[serde(default, deserialize_with = "nullable")]
    pub line_code: String,

    /// Origin station code.
    #[serde(default, deserialize_with = "nullable")]
    pub start_station_code: String,
}
