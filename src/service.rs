use super::{cache::*, error::*, model::*, scheduler::*, upstream::*};

use std::{result::Result, sync::*};

//
// TransitService
//

/// Read contracts over both cache tiers.
///
/// Constructed once and shared (e.g. as router state). Cloning is cheap and clones share the same
/// tiers.
#[derive(Debug)]
pub struct TransitService<FetchT> {
    static_data: Arc<StaticCache<FetchT>>,
    predictions: Arc<PredictionCache<FetchT>>,
    configuration: CacheConfiguration,
}

impl<FetchT> TransitService<FetchT>
where
    FetchT: Fetch,
{
    /// Constructor.
    pub fn new(upstream: Upstream<FetchT>, configuration: CacheConfiguration) -> Self {
        Self {
            static_data: StaticCache::new(upstream.clone(), configuration.static_data.clone()).into(),
            predictions: PredictionCache::new(upstream, configuration.predictions.clone()).into(),
            configuration,
        }
    }

    /// Static data tier.
    pub fn static_data(&self) -> &Arc<StaticCache<FetchT>> {
        &self.static_data
    }

    /// Prediction tier.
    pub fn predictions(&self) -> &Arc<PredictionCache<FetchT>> {
        &self.predictions
    }

    /// Pre-warm both tiers concurrently and start their background refresh.
    ///
    /// Returns once both initial refreshes have completed (successfully or not).
    pub async fn start_background_refresh(&self) -> (BackgroundRefresh, BackgroundRefresh) {
        tokio::join!(
            BackgroundRefresh::start(self.static_data.clone(), self.configuration.static_data.interval),
            BackgroundRefresh::start(self.predictions.clone(), self.configuration.predictions.interval),
        )
    }

    /// All station details.
    pub async fn get_stations(&self) -> Result<Vec<StationDetail>, Error> {
        Ok(self.static_data.get().await?.stations.clone())
    }

    /// Entrances whose first or second station code matches.
    pub async fn get_entrances(&self, station_code: &str) -> Result<Vec<Entrance>, Error> {
        Ok(entrances_for(&self.static_data.get().await?.entrances, station_code))
    }

    /// All lines.
    pub async fn get_lines(&self) -> Result<Vec<LineInfo>, Error> {
        Ok(self.static_data.get().await?.lines.clone())
    }

    /// Parking for a station, or for all stations if no code is provided.
    pub async fn get_parking(&self, station_code: Option<&str>) -> Result<ParkingSelection, Error> {
        let snapshot = self.static_data.get().await?;
        match station_code {
            Some(station_code) => snapshot
                .parking
                .iter()
                .find(|parking| parking.code == station_code)
                .cloned()
                .map(ParkingSelection::Station)
                .ok_or_else(|| Error::not_found(format!("parking for {}", station_code))),

            None => Ok(ParkingSelection::All(snapshot.parking.clone())),
        }
    }

    /// All train predictions, in upstream order.
    pub async fn get_predictions(&self) -> Result<Vec<TrainPrediction>, Error> {
        Ok(self.predictions.get().await?.data.clone())
    }
}

impl<FetchT> Clone for TransitService<FetchT> {
    fn clone(&self) -> Self {
        Self {
            static_data: self.static_data.clone(),
            predictions: self.predictions.clone(),
            configuration: self.configuration.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{super::testing::*, *};

    use http::StatusCode;

    fn service(fetch: &FakeFetch) -> TransitService<FakeFetch> {
        TransitService::new(fetch.upstream(), CacheConfiguration::default())
    }

    fn full_fetch() -> FakeFetch {
        let fetch = FakeFetch::with_static_data();
        fetch.respond("GetPrediction/All", PREDICTIONS);
        fetch
    }

    #[tokio::test(start_paused = true)]
    async fn entrances_match_either_code() {
        let service = service(&full_fetch());

        let ids: Vec<_> = service
            .get_entrances("A01")
            .await
            .expect("entrances")
            .into_iter()
            .map(|entrance| entrance.id)
            .collect();
        assert_eq!(ids, ["1", "2"]);

        assert!(service.get_entrances("Z99").await.expect("entrances").is_empty());
        assert!(service.get_entrances("").await.expect("entrances").is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn parking_lookup() {
        let service = service(&full_fetch());

        match service.get_parking(Some("B01")).await.expect("parking") {
            ParkingSelection::Station(parking) => assert_eq!(parking.all_day_parking.total_count, 1781),
            ParkingSelection::All(_) => panic!("expected one station"),
        }

        match service.get_parking(None).await.expect("parking") {
            ParkingSelection::All(parking) => assert_eq!(parking.len(), 1),
            ParkingSelection::Station(_) => panic!("expected all stations"),
        }

        assert!(matches!(
            service.get_parking(Some("A01")).await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn reads_share_one_static_refresh() {
        let fetch = full_fetch();
        let service = service(&fetch);

        service.get_stations().await.expect("stations");
        service.get_lines().await.expect("lines");
        service.get_entrances("A01").await.expect("entrances");
        service.get_parking(None).await.expect("parking");

        assert_eq!(fetch.count("/jStations"), 1);
        assert_eq!(fetch.count("GetPrediction/All"), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn predictions_are_independent_of_static_data() {
        let fetch = FakeFetch::with_predictions();
        let service = service(&fetch);

        assert_eq!(service.get_predictions().await.expect("predictions").len(), 2);
        assert!(service.get_stations().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cold_read_with_upstream_down_is_an_error() {
        let fetch = FakeFetch::default();
        fetch.fail("jStations", StatusCode::SERVICE_UNAVAILABLE);
        let service = service(&fetch);

        assert!(matches!(service.get_lines().await, Err(Error::Fetch(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn background_refresh_prewarms_both_tiers() {
        let fetch = full_fetch();
        let service = service(&fetch);

        let (static_data, predictions) = service.start_background_refresh().await;
        let calls = fetch.call_count();
        assert_eq!(fetch.count("/jStations"), 1);
        assert_eq!(fetch.count("GetPrediction/All"), 1);

        service.get_stations().await.expect("stations");
        service.get_predictions().await.expect("predictions");
        assert_eq!(fetch.call_count(), calls);

        static_data.shutdown().await;
        predictions.shutdown().await;
    }
}
