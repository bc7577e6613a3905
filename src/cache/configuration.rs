use std::time::*;

/// Static data freshness.
pub const STATIC_FRESHNESS: Duration = Duration::from_secs(24 * 60 * 60);

/// Static data refresh collapse window.
pub const STATIC_COLLAPSE: Duration = Duration::from_secs(60);

/// Static data background refresh interval.
pub const STATIC_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Prediction freshness.
///
/// Slightly longer than [PREDICTION_INTERVAL] so that reads never have to refresh under normal
/// operation.
pub const PREDICTION_FRESHNESS: Duration = Duration::from_secs(25);

/// Prediction refresh collapse window.
pub const PREDICTION_COLLAPSE: Duration = Duration::from_secs(1);

/// Prediction background refresh interval.
pub const PREDICTION_INTERVAL: Duration = Duration::from_secs(20);

/// Prediction stale limit.
pub const PREDICTION_STALE_LIMIT: Duration = Duration::from_secs(2 * 60);

//
// TierConfiguration
//

/// Cache tier configuration.
#[derive(Clone, Debug)]
pub struct TierConfiguration {
    /// Snapshots younger than this are served without refreshing.
    pub freshness: Duration,

    /// A refresh that finds a snapshot younger than this returns it instead of fetching.
    pub collapse: Duration,

    /// Background refresh interval.
    pub interval: Duration,

    /// Maximum age of a snapshot served after a failed refresh. [None] means no limit.
    pub stale_limit: Option<Duration>,
}

impl TierConfiguration {
    /// Defaults for static data.
    pub fn static_data() -> Self {
        Self {
            freshness: STATIC_FRESHNESS,
            collapse: STATIC_COLLAPSE,
            interval: STATIC_INTERVAL,
            stale_limit: None,
        }
    }

    /// Defaults for predictions.
    pub fn predictions() -> Self {
        Self {
            freshness: PREDICTION_FRESHNESS,
            collapse: PREDICTION_COLLAPSE,
            interval: PREDICTION_INTERVAL,
            stale_limit: Some(PREDICTION_STALE_LIMIT),
        }
    }

    /// Set freshness.
    pub fn freshness(mut self, freshness: Duration) -> Self {
        self.freshness = freshness;
        self
    }

    /// Set collapse window.
    pub fn collapse(mut self, collapse: Duration) -> Self {
        self.collapse = collapse;
        self
    }

    /// Set background refresh interval.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set stale limit.
    pub fn stale_limit(mut self, stale_limit: Option<Duration>) -> Self {
        self.stale_limit = stale_limit;
        self
    }
}

//
// CacheConfiguration
//

/// Configuration for both cache tiers.
#[derive(Clone, Debug)]
pub struct CacheConfiguration {
    /// Static data tier.
    pub static_data: TierConfiguration,

    /// Prediction tier.
    pub predictions: TierConfiguration,
}

impl CacheConfiguration {
    /// Set the static data refresh interval.
    ///
    /// Freshness follows the interval.
    ///
    /// The default is [STATIC_INTERVAL].
    pub fn static_interval(mut self, interval: Duration) -> Self {
        self.static_data = self.static_data.interval(interval).freshness(interval);
        self
    }

    /// Set the prediction refresh interval.
    ///
    /// Freshness follows the interval, keeping the default 5 second buffer.
    ///
    /// The default is [PREDICTION_INTERVAL].
    pub fn prediction_interval(mut self, interval: Duration) -> Self {
        let buffer = PREDICTION_FRESHNESS - PREDICTION_INTERVAL;
        self.predictions = self.predictions.interval(interval).freshness(interval + buffer);
        self
    }
}

impl Default for CacheConfiguration {
    fn default() -> Self {
        Self {
            static_data: TierConfiguration::static_data(),
            predictions: TierConfiguration::predictions(),
        }
    }
}
