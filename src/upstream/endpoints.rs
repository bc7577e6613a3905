/// Default rail API base URL.
pub const DEFAULT_RAIL_URL: &str = "https://api.wmata.com/Rail.svc/json";

/// Default all-stations prediction URL.
pub const DEFAULT_PREDICTIONS_URL: &str =
    "https://api.wmata.com/StationPrediction.svc/json/GetPrediction/All";

//
// Endpoints
//

/// Upstream endpoint URLs.
#[derive(Clone, Debug)]
pub struct Endpoints {
    /// Rail API base URL (without trailing slash).
    pub rail: String,

    /// All-stations prediction URL.
    pub predictions: String,
}

impl Endpoints {
    /// Constructor.
    pub fn new(rail: impl Into<String>, predictions: impl Into<String>) -> Self {
        let rail = rail.into().trim_end_matches('/').into();
        Self {
            rail,
            predictions: predictions.into(),
        }
    }

    /// Station directory.
    pub fn stations(&self) -> String {
        format!("{}/jStations", self.rail)
    }

    /// Detail for one station.
    pub fn station_info(&self, station_code: &str) -> String {
        format!("{}/jStationInfo?StationCode={}", self.rail, station_code)
    }

    /// All entrances.
    pub fn entrances(&self) -> String {
        format!("{}/jStationEntrances", self.rail)
    }

    /// All lines.
    pub fn lines(&self) -> String {
        format!("{}/jLines", self.rail)
    }

    /// All parking.
    pub fn parking(&self) -> String {
        format!("{}/jStationParking", self.rail)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_RAIL_URL, DEFAULT_PREDICTIONS_URL)
    }
}
