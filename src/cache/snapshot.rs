use {
    std::{ops::*, sync::*, time::*},
    tokio::time::Instant,
};

/// Common reference type for [Snapshot].
pub type SnapshotRef<DataT> = Arc<Snapshot<DataT>>;

//
// Snapshot
//

/// Immutable point-in-time value of cached data.
///
/// Snapshots are never mutated. Publishing a new one replaces the reference; readers holding
/// the old one keep it alive until they drop it.
#[derive(Debug)]
pub struct Snapshot<DataT> {
    /// Data.
    pub data: DataT,

    /// When the data was captured.
    pub captured_at: Instant,
}

impl<DataT> Snapshot<DataT> {
    /// Constructor, captured now.
    pub fn new(data: DataT) -> Self {
        Self::new_at(data, Instant::now())
    }

    /// Constructor.
    pub fn new_at(data: DataT, captured_at: Instant) -> Self {
        Self { data, captured_at }
    }

    /// Age at an instant.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.captured_at)
    }

    /// Whether the snapshot is younger than `freshness` at an instant.
    ///
    /// A snapshot exactly `freshness` old is stale.
    pub fn is_fresh_at(&self, now: Instant, freshness: Duration) -> bool {
        self.age_at(now) < freshness
    }
}

impl<DataT> Deref for Snapshot<DataT> {
    type Target = DataT;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

//
// SnapshotData
//

/// Data that can be held in a [Snapshot].
pub trait SnapshotData
where
    Self: 'static + Send + Sync,
{
    /// Whether the data is worth serving.
    ///
    /// Unpopulated snapshots are never served from the fast path.
    fn is_populated(&self) -> bool;
}

impl<ItemT> SnapshotData for Vec<ItemT>
where
    ItemT: 'static + Send + Sync,
{
    fn is_populated(&self) -> bool {
        !self.is_empty()
    }
}
