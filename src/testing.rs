use super::upstream::*;

use {
    bytes::Bytes,
    http::StatusCode,
    parking_lot::Mutex,
    std::{result::Result, sync::*, time::*},
};

pub const BASE: &str = "http://upstream";

pub const API_KEY: &str = "test-key";

pub const STATIONS: &str = r#"{"Stations": [
    {"Name": "Metro Center", "Code": "A01"},
    {"Name": "Glenmont", "Code": "B01"}
]}"#;

pub const STATION_A01: &str = r#"{
    "Address": {"City": "Washington", "State": "DC", "Street": "607 13th St. NW", "Zip": "20005"},
    "Code": "A01", "Lat": 38.898303, "Lon": -77.028099, "Name": "Metro Center",
    "LineCode1": "RD", "LineCode2": null, "LineCode3": null, "LineCode4": null,
    "StationTogether1": "C01", "StationTogether2": ""
}"#;

pub const STATION_B01: &str = r#"{
    "Address": {"City": "Wheaton", "State": "MD", "Street": "12501 Georgia Avenue", "Zip": "20906"},
    "Code": "B01", "Lat": 39.061713, "Lon": -77.05341, "Name": "Glenmont",
    "LineCode1": "RD", "LineCode2": null, "LineCode3": null, "LineCode4": null,
    "StationTogether1": "", "StationTogether2": ""
}"#;

pub const ENTRANCES: &str = r#"{"Entrances": [
    {"ID": "1", "Name": "12th St", "StationCode1": "A01", "StationCode2": "", "Lat": 38.898, "Lon": -77.028, "Description": "Escalator"},
    {"ID": "2", "Name": "11th St", "StationCode1": "C01", "StationCode2": "A01", "Lat": 38.898, "Lon": -77.027, "Description": "Elevator"},
    {"ID": "3", "Name": "Georgia Ave", "StationCode1": "B01", "StationCode2": null, "Lat": 39.061, "Lon": -77.053, "Description": "Escalator"}
]}"#;

pub const LINES: &str = r#"{"Lines": [
    {"DisplayName": "Red", "EndStationCode": "B11", "InternalDestination1": "A11", "InternalDestination2": "B08", "LineCode": "RD", "StartStationCode": "A15"}
]}"#;

pub const PARKING: &str = r#"{"StationsParking": [
    {"Code": "B01", "Notes": null,
     "AllDayParking": {"TotalCount": 1781, "RiderCost": 5.2, "NonRiderCost": null},
     "ShortTermParking": {"TotalCount": 0, "Notes": null}}
]}"#;

pub const PREDICTIONS: &str = r#"{"Trains": [
    {"Car": "8", "Destination": "Glenmont", "DestinationCode": "B11", "DestinationName": "Glenmont", "Group": "1", "Line": "RD", "LocationCode": "A01", "LocationName": "Metro Center", "Min": "3"},
    {"Car": "6", "Destination": "Shady Gr", "DestinationCode": "A15", "DestinationName": "Shady Grove", "Group": "2", "Line": "RD", "LocationCode": "A01", "LocationName": "Metro Center", "Min": "BRD"}
]}"#;

//
// FakeFetch
//

/// In-memory [Fetch] that answers by URL suffix and records calls.
#[derive(Clone, Debug, Default)]
pub struct FakeFetch {
    state: Arc<Mutex<FakeState>>,
    delay: Option<Duration>,
}

#[derive(Debug, Default)]
struct FakeState {
    responses: Vec<(String, Result<String, StatusCode>)>,
    calls: Vec<String>,
}

impl FakeFetch {
    pub fn with_static_data() -> Self {
        let fetch = Self::default();
        fetch.respond("jStations", STATIONS);
        fetch.respond("jStationInfo?StationCode=A01", STATION_A01);
        fetch.respond("jStationInfo?StationCode=B01", STATION_B01);
        fetch.respond("jStationEntrances", ENTRANCES);
        fetch.respond("jLines", LINES);
        fetch.respond("jStationParking", PARKING);
        fetch
    }

    pub fn with_predictions() -> Self {
        let fetch = Self::default();
        fetch.respond("GetPrediction/All", PREDICTIONS);
        fetch
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn upstream(&self) -> Upstream<Self> {
        Upstream::new(
            self.clone(),
            API_KEY,
            Endpoints::new(
                format!("{}/Rail.svc/json", BASE),
                format!("{}/StationPrediction.svc/json/GetPrediction/All", BASE),
            ),
        )
    }

    pub fn respond(&self, suffix: &str, body: &str) {
        self.set(suffix, Ok(body.into()));
    }

    pub fn fail(&self, suffix: &str, status: StatusCode) {
        self.set(suffix, Err(status));
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().calls.len()
    }

    pub fn count(&self, suffix: &str) -> usize {
        self.state.lock().calls.iter().filter(|call| call.ends_with(suffix)).count()
    }

    fn set(&self, suffix: &str, response: Result<String, StatusCode>) {
        let mut state = self.state.lock();
        state.responses.retain(|(existing, _)| existing != suffix);
        state.responses.push((suffix.into(), response));
    }
}

impl Fetch for FakeFetch {
    async fn fetch(&self, url: &str, api_key: &str) -> Result<Bytes, FetchError> {
        assert_eq!(api_key, API_KEY);

        let response = {
            let mut state = self.state.lock();
            state.calls.push(url.strip_prefix(BASE).unwrap_or(url).into());
            state
                .responses
                .iter()
                .find(|(suffix, _)| url.ends_with(suffix.as_str()))
                .map(|(_, response)| response.clone())
        };

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match response {
            Some(Ok(body)) => Ok(Bytes::from(body)),
            Some(Err(status)) => Err(FetchError::Upstream {
                status,
                url: url.into(),
            }),
            None => Err(FetchError::Upstream {
                status: StatusCode::NOT_FOUND,
                url: url.into(),
            }),
        }
    }
}
