use super::{
    super::{error::*, model::*, upstream::*},
    configuration::*,
    snapshot::*,
    tier::*,
};

use {duration_str::*, std::result::Result, tokio::time::Instant};

/// Common reference type for prediction snapshots.
pub type PredictionSnapshotRef = SnapshotRef<Vec<TrainPrediction>>;

//
// PredictionCache
//

/// Live prediction cache tier.
///
/// A refresh is a single upstream call for all stations. It is all-or-nothing: on failure the
/// previous snapshot is left untouched.
#[derive(Debug)]
pub struct PredictionCache<FetchT> {
    upstream: Upstream<FetchT>,
    tier: Tier<Vec<TrainPrediction>>,
}

impl<FetchT> PredictionCache<FetchT>
where
    FetchT: Fetch,
{
    /// Tier name.
    pub const NAME: &'static str = "predictions";

    /// Constructor.
    pub fn new(upstream: Upstream<FetchT>, configuration: TierConfiguration) -> Self {
        Self {
            upstream,
            tier: Tier::new(Self::NAME, configuration),
        }
    }

    /// Tier.
    pub fn tier(&self) -> &Tier<Vec<TrainPrediction>> {
        &self.tier
    }

    /// Get the fresh snapshot, refreshing if there is none.
    pub async fn get(&self) -> Result<PredictionSnapshotRef, Error> {
        self.tier.get_with(|_| self.fetch()).await
    }

    /// Refresh.
    ///
    /// Returns the recently published snapshot instead if it is within the collapse window.
    pub async fn refresh(&self) -> Result<PredictionSnapshotRef, Error> {
        self.tier.refresh_with(|_| self.fetch()).await
    }

    async fn fetch(&self) -> Result<Vec<TrainPrediction>, Error> {
        let start = Instant::now();
        let predictions = self.upstream.predictions().await?;

        tracing::info!(
            "{}: fetched in {}: {} trains",
            Self::NAME,
            start.elapsed().human_format(),
            predictions.len()
        );

        Ok(predictions)
    }
}
