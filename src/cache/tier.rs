use super::{super::error::*, configuration::*, snapshot::*};

use {
    duration_str::*,
    parking_lot::RwLock,
    std::{result::Result, sync::*},
    tokio::{sync::Mutex, time::Instant},
};

//
// Tier
//

/// Cache tier.
///
/// Owns the current [Snapshot] of one kind of data.
///
/// Reads take a shared lock just long enough to check freshness. Refreshes are single-flight:
/// an async mutex is held for the entire refresh body, including the upstream calls, and once
/// acquired the snapshot is checked again against the collapse window so that callers that
/// queued up behind a refresh get its result instead of fetching again. The snapshot itself is
/// swapped under a brief exclusive lock, thus readers of a fresh snapshot never wait for an
/// in-flight refresh.
#[derive(Debug)]
pub struct Tier<DataT> {
    name: &'static str,
    configuration: TierConfiguration,
    current: RwLock<Option<SnapshotRef<DataT>>>,
    refreshing: Mutex<()>,
}

impl<DataT> Tier<DataT>
where
    DataT: SnapshotData,
{
    /// Constructor.
    pub fn new(name: &'static str, configuration: TierConfiguration) -> Self {
        Self {
            name,
            configuration,
            current: Default::default(),
            refreshing: Default::default(),
        }
    }

    /// Name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Configuration.
    pub fn configuration(&self) -> &TierConfiguration {
        &self.configuration
    }

    /// Current snapshot, regardless of age.
    pub fn current(&self) -> Option<SnapshotRef<DataT>> {
        self.current.read().clone()
    }

    /// Current snapshot if populated and fresh.
    pub fn fresh(&self) -> Option<SnapshotRef<DataT>> {
        self.populated_within(self.configuration.freshness)
    }

    // Publish a new snapshot captured now.
    fn publish(&self, data: DataT) -> SnapshotRef<DataT> {
        let snapshot = Arc::new(Snapshot::new(data));
        *self.current.write() = Some(snapshot.clone());
        snapshot
    }

    /// Get the fresh snapshot, or else refresh using `produce`.
    ///
    /// If the refresh fails but a populated snapshot within the stale limit exists then it is
    /// returned instead of the error.
    pub async fn get_with<ProduceT, FutureT>(&self, produce: ProduceT) -> Result<SnapshotRef<DataT>, Error>
    where
        ProduceT: FnOnce(Option<SnapshotRef<DataT>>) -> FutureT,
        FutureT: Future<Output = Result<DataT, Error>>,
    {
        if let Some(snapshot) = self.fresh() {
            tracing::debug!("{}: hit", self.name);
            return Ok(snapshot);
        }

        tracing::debug!("{}: miss", self.name);

        match self.refresh_with(produce).await {
            Ok(snapshot) => Ok(snapshot),

            Err(error) => match self.stale() {
                Some(snapshot) => {
                    tracing::warn!(
                        "{}: serving stale snapshot ({} old): {}",
                        self.name,
                        snapshot.age_at(Instant::now()).human_format(),
                        error
                    );
                    Ok(snapshot)
                }

                None => Err(error),
            },
        }
    }

    /// Refresh using `produce`, which is given the previous snapshot (if any).
    ///
    /// If another refresh published a snapshot within the collapse window then that snapshot is
    /// returned and `produce` is not called, even if it is unpopulated.
    ///
    /// On error the current snapshot is left untouched.
    pub async fn refresh_with<ProduceT, FutureT>(&self, produce: ProduceT) -> Result<SnapshotRef<DataT>, Error>
    where
        ProduceT: FnOnce(Option<SnapshotRef<DataT>>) -> FutureT,
        FutureT: Future<Output = Result<DataT, Error>>,
    {
        let _refreshing = self.refreshing.lock().await;

        if let Some(snapshot) = self.recent() {
            tracing::debug!("{}: collapsed into recent refresh", self.name);
            return Ok(snapshot);
        }

        let data = produce(self.current()).await?;
        Ok(self.publish(data))
    }

    // Any snapshot within the collapse window.
    fn recent(&self) -> Option<SnapshotRef<DataT>> {
        let now = Instant::now();
        self.current
            .read()
            .as_ref()
            .filter(|snapshot| snapshot.is_fresh_at(now, self.configuration.collapse))
            .cloned()
    }

    // Populated snapshot within the stale limit.
    fn stale(&self) -> Option<SnapshotRef<DataT>> {
        match self.configuration.stale_limit {
            Some(stale_limit) => self.populated_within(stale_limit),
            None => self.current().filter(|snapshot| snapshot.is_populated()),
        }
    }

    // Populated snapshot younger than `age`.
    fn populated_within(&self, age: std::time::Duration) -> Option<SnapshotRef<DataT>> {
        let now = Instant::now();
        self.current
            .read()
            .as_ref()
            .filter(|snapshot| snapshot.is_populated() && snapshot.is_fresh_at(now, age))
            .cloned()
    }
}
