use super::{
    super::{error::*, model::*, upstream::*},
    configuration::*,
    snapshot::*,
    tier::*,
};

use {
    duration_str::*,
    std::{result::Result, sync::*},
    tokio::time::Instant,
};

/// Common reference type for static data snapshots.
pub type StaticSnapshotRef = SnapshotRef<StaticData>;

//
// StaticData
//

/// Static data: stations and the collections that rarely change with them.
#[derive(Clone, Debug, Default)]
pub struct StaticData {
    /// Station details, in directory order.
    pub stations: Vec<StationDetail>,

    /// Entrances.
    pub entrances: Vec<Entrance>,

    /// Lines.
    pub lines: Vec<LineInfo>,

    /// Parking.
    pub parking: Vec<StationParking>,
}

impl SnapshotData for StaticData {
    fn is_populated(&self) -> bool {
        !self.stations.is_empty()
    }
}

//
// StaticCache
//

/// Static data cache tier.
///
/// A refresh makes one call for the station directory, then one call *per station* (strictly in
/// sequence, never concurrently), then one call each for entrances, lines, and parking.
///
/// A failed directory fetch fails the refresh. A failed station detail fetch skips that
/// station. A failed entrances, lines, or parking fetch keeps the previous snapshot's value
/// (empty if there is none).
#[derive(Debug)]
pub struct StaticCache<FetchT> {
    upstream: Upstream<FetchT>,
    tier: Tier<StaticData>,
}

impl<FetchT> StaticCache<FetchT>
where
    FetchT: Fetch,
{
    /// Tier name.
    pub const NAME: &'static str = "static";

    /// Constructor.
    pub fn new(upstream: Upstream<FetchT>, configuration: TierConfiguration) -> Self {
        Self {
            upstream,
            tier: Tier::new(Self::NAME, configuration),
        }
    }

    /// Tier.
    pub fn tier(&self) -> &Tier<StaticData> {
        &self.tier
    }

    /// Get the fresh snapshot, refreshing if there is none.
    pub async fn get(&self) -> Result<StaticSnapshotRef, Error> {
        self.tier.get_with(|previous| self.fetch(previous)).await
    }

    /// Refresh.
    ///
    /// Returns the recently published snapshot instead if it is within the collapse window.
    pub async fn refresh(&self) -> Result<StaticSnapshotRef, Error> {
        self.tier.refresh_with(|previous| self.fetch(previous)).await
    }

    async fn fetch(&self, previous: Option<StaticSnapshotRef>) -> Result<StaticData, Error> {
        let start = Instant::now();

        let directory = self.upstream.stations().await?;

        let mut stations = Vec::with_capacity(directory.len());
        for station in &directory {
            match self.upstream.station_info(&station.code).await {
                Ok(detail) => stations.push(detail),
                Err(error) => tracing::error!("could not fetch station {}: {}", station.code, error),
            }
        }

        let previous = previous.as_deref();

        let entrances = keep_previous(
            "entrances",
            self.upstream.entrances().await,
            previous.map(|previous| &previous.entrances),
        );

        let lines = keep_previous(
            "lines",
            self.upstream.lines().await,
            previous.map(|previous| &previous.lines),
        );

        let parking = keep_previous(
            "parking",
            self.upstream.parking().await,
            previous.map(|previous| &previous.parking),
        );

        tracing::info!(
            "{}: fetched in {}: {}/{} stations, {} entrances, {} lines, {} parking",
            Self::NAME,
            start.elapsed().human_format(),
            stations.len(),
            directory.len(),
            entrances.len(),
            lines.len(),
            parking.len()
        );

        Ok(StaticData {
            stations,
            entrances,
            lines,
            parking,
        })
    }
}

// The fetched collection, or else the previous one.
fn keep_previous<ItemT>(
    name: &str,
    fetched: Result<Vec<ItemT>, FetchError>,
    previous: Option<&Vec<ItemT>>,
) -> Vec<ItemT>
where
    ItemT: Clone,
{
    match fetched {
        Ok(fetched) => fetched,
        Err(error) => {
            tracing::error!("could not fetch {}, keeping previous: {}", name, error);
            previous.cloned().unwrap_or_default()
        }
    }
}
