#![allow(dead_code)]

use {
    metro_cache::upstream::*,
    wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path, query_param},
    },
};

pub const API_KEY: &str = "integration-key";

pub const RAIL_PATH: &str = "/Rail.svc/json";

pub const PREDICTIONS_PATH: &str = "/StationPrediction.svc/json/GetPrediction/All";

pub const STATIONS: &str = r#"{"Stations": [
    {"Name": "Metro Center", "Code": "A01"},
    {"Name": "Glenmont", "Code": "B01"}
]}"#;

pub const STATION_A01: &str = r#"{
    "Address": {"City": "Washington", "State": "DC", "Street": "607 13th St. NW", "Zip": "20005"},
    "Code": "A01", "Lat": 38.898303, "Lon": -77.028099, "Name": "Metro Center",
    "LineCode1": "RD", "LineCode2": "BL", "LineCode3": "OR", "LineCode4": "SV",
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
    {"Car": "6", "Destination": "Shady Gr", "DestinationCode": "A15", "DestinationName": "Shady Grove", "Group": "2", "Line": "RD", "LocationCode": "A01", "LocationName": "Metro Center", "Min": "BRD"},
    {"Car": "8", "Destination": "Glenmont", "DestinationCode": "B11", "DestinationName": "Glenmont", "Group": "1", "Line": "RD", "LocationCode": "B01", "LocationName": "Glenmont", "Min": "ARR"}
]}"#;

/// Endpoints pointing at the mock server.
pub fn endpoints(server: &MockServer) -> Endpoints {
    Endpoints::new(
        format!("{}{}", server.uri(), RAIL_PATH),
        format!("{}{}", server.uri(), PREDICTIONS_PATH),
    )
}

/// Upstream client pointing at the mock server.
pub fn upstream(server: &MockServer) -> Upstream<HttpFetch> {
    let fetch = HttpFetch::new_with_timeout(DEFAULT_TIMEOUT).expect("client");
    Upstream::new(fetch, API_KEY, endpoints(server))
}

/// JSON response.
pub fn json(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_owned(), "application/json")
}

/// Mount one rail endpoint.
pub async fn mount_rail(server: &MockServer, endpoint: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("{}/{}", RAIL_PATH, endpoint)))
        .and(header(API_KEY_HEADER, API_KEY))
        .respond_with(json(body))
        .mount(server)
        .await;
}

/// Mount one station detail.
pub async fn mount_station_info(server: &MockServer, station_code: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("{}/jStationInfo", RAIL_PATH)))
        .and(query_param("StationCode", station_code))
        .and(header(API_KEY_HEADER, API_KEY))
        .respond_with(json(body))
        .mount(server)
        .await;
}

/// Mount every static endpoint.
pub async fn mount_static_data(server: &MockServer) {
    mount_rail(server, "jStations", STATIONS).await;
    mount_station_info(server, "A01", STATION_A01).await;
    mount_station_info(server, "B01", STATION_B01).await;
    mount_rail(server, "jStationEntrances", ENTRANCES).await;
    mount_rail(server, "jLines", LINES).await;
    mount_rail(server, "jStationParking", PARKING).await;
}

/// Mount the prediction endpoint.
pub async fn mount_predictions(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(PREDICTIONS_PATH))
        .and(header(API_KEY_HEADER, API_KEY))
        .respond_with(json(PREDICTIONS))
        .mount(server)
        .await;
}
