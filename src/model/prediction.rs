use super::nullable::*;

use {
    serde::{Deserialize, Serialize},
    std::fmt,
};

//
// TrainPrediction
//

/// Train arrival prediction.
///
/// Not unique: several trains can share a platform and line. Upstream does not order
/// predictions; see [sort_by_arrival].
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainPrediction {
    /// Number of cars, e.g. "8" (may be "-" or empty).
    #[serde(default, deserialize_with = "nullable")]
    pub car: String,

    /// Abbreviated destination.
    #[serde(default, deserialize_with = "nullable")]
    pub destination: String,

    /// Destination station code.
    #[serde(default, deserialize_with = "nullable")]
    pub destination_code: String,

    /// Destination name.
    #[serde(default, deserialize_with = "nullable")]
    pub destination_name: String,

    /// Track group ("1" or "2").
    #[serde(default, deserialize_with = "nullable")]
    pub group: String,

    /// Line code.
    #[serde(default, deserialize_with = "nullable")]
    pub line: String,

    /// Station code of the platform.
    #[serde(default, deserialize_with = "nullable")]
    pub location_code: String,

    /// Station name of the platform.
    #[serde(default, deserialize_with = "nullable")]
    pub location_name: String,

    /// Minutes until arrival, "ARR", "BRD", or placeholder.
    #[serde(default, deserialize_with = "nullable")]
    pub min: String,
}

impl TrainPrediction {
    /// Parsed arrival.
    pub fn arrival(&self) -> Arrival {
        Arrival::parse(&self.min)
    }
}

//
// Arrival
//

/// Parsed arrival time of a [TrainPrediction].
///
/// Ordered soonest first: boarding, arriving, then minutes ascending, then unknown.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Arrival {
    /// "BRD".
    Boarding,

    /// "ARR".
    Arriving,

    /// Minutes until arrival.
    Minutes(u32),

    /// Anything else, e.g. "---" or empty.
    Unknown,
}

impl Arrival {
    /// Parse.
    pub fn parse(min: &str) -> Self {
        match min.trim() {
            "BRD" => Self::Boarding,
            "ARR" => Self::Arriving,
            min => min.parse().map(Self::Minutes).unwrap_or(Self::Unknown),
        }
    }
}

impl fmt::Display for Arrival {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Boarding => fmt::Display::fmt("BRD", formatter),
            Self::Arriving => fmt::Display::fmt("ARR", formatter),
            Self::Minutes(minutes) => fmt::Display::fmt(minutes, formatter),
            Self::Unknown => fmt::Display::fmt("---", formatter),
        }
    }
}

/// Sort predictions soonest first.
///
/// Stable, so predictions with equal arrivals keep their upstream order.
pub fn sort_by_arrival(predictions: &mut [TrainPrediction]) {
    predictions.sort_by_key(TrainPrediction::arrival);
}

/// Predictions for a platform's station code.
pub fn predictions_for(predictions: &[TrainPrediction], location_code: &str) -> Vec<TrainPrediction> {
    predictions
        .iter()
        .filter(|prediction| prediction.location_code == location_code)
        .cloned()
        .collect()
}
