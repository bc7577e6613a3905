use super::{super::model::*, endpoints::*, error::*, fetch::*};

use {
    serde::{Deserialize, de::DeserializeOwned},
    std::{result::Result, sync::*},
};

//
// Upstream
//

/// WMATA API client.
///
/// Decodes JSON and unwraps the per-endpoint envelopes (e.g. `{"Stations": [...]}`).
#[derive(Clone, Debug)]
pub struct Upstream<FetchT> {
    fetch: FetchT,
    api_key: Arc<str>,
    endpoints: Arc<Endpoints>,
}

impl<FetchT> Upstream<FetchT>
where
    FetchT: Fetch,
{
    /// Constructor.
    pub fn new(fetch: FetchT, api_key: impl Into<Arc<str>>, endpoints: Endpoints) -> Self {
        Self {
            fetch,
            api_key: api_key.into(),
            endpoints: endpoints.into(),
        }
    }

    /// Endpoints.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch and decode JSON.
    pub async fn get_json<ValueT>(&self, url: &str) -> Result<ValueT, FetchError>
    where
        ValueT: DeserializeOwned,
    {
        let body = self.fetch.fetch(url, &self.api_key).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Station directory.
    pub async fn stations(&self) -> Result<Vec<Station>, FetchError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "PascalCase")]
        struct Envelope {
            stations: Vec<Station>,
        }

        let envelope: Envelope = self.get_json(&self.endpoints.stations()).await?;
        Ok(envelope.stations)
    }

    /// Detail for one station.
    pub async fn station_info(&self, station_code: &str) -> Result<StationDetail, FetchError> {
        self.get_json(&self.endpoints.station_info(station_code)).await
    }

    /// All entrances.
    pub async fn entrances(&self) -> Result<Vec<Entrance>, FetchError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "PascalCase")]
        struct Envelope {
            entrances: Vec<Entrance>,
        }

        let envelope: Envelope = self.get_json(&self.endpoints.entrances()).await?;
        Ok(envelope.entrances)
    }

    /// All lines.
    pub async fn lines(&self) -> Result<Vec<LineInfo>, FetchError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "PascalCase")]
        struct Envelope {
            lines: Vec<LineInfo>,
        }

        let envelope: Envelope = self.get_json(&self.endpoints.lines()).await?;
        Ok(envelope.lines)
    }

    /// All parking.
    pub async fn parking(&self) -> Result<Vec<StationParking>, FetchError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "PascalCase")]
        struct Envelope {
            stations_parking: Vec<StationParking>,
        }

        let envelope: Envelope = self.get_json(&self.endpoints.parking()).await?;
        Ok(envelope.stations_parking)
    }

    /// Predictions for all stations, in one request.
    pub async fn predictions(&self) -> Result<Vec<TrainPrediction>, FetchError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "PascalCase")]
        struct Envelope {
            trains: Vec<TrainPrediction>,
        }

        let envelope: Envelope = self.get_json(&self.endpoints.predictions).await?;
        Ok(envelope.trains)
    }
}
