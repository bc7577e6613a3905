use super::{cache::*, error::*, upstream::*};

use {
    duration_str::*,
    std::{future, result::Result, sync::*, time::*},
    tokio::{
        sync::watch,
        task::JoinHandle,
        time::{Instant, MissedTickBehavior, interval_at},
    },
};

//
// Refresh
//

/// Refreshable cache tier.
#[allow(async_fn_in_trait)]
pub trait Refresh
where
    Self: 'static + Send + Sync,
{
    /// Name for logging.
    fn name(&self) -> &str;

    /// Refresh.
    ///
    /// Note that this is an `async` function written in longer form in order to include the `Send`
    /// constraint. Implementations can simply use `async fn refresh`.
    fn refresh(&self) -> impl Future<Output = Result<(), Error>> + Send;
}

impl<FetchT> Refresh for StaticCache<FetchT>
where
    FetchT: Fetch,
{
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn refresh(&self) -> Result<(), Error> {
        StaticCache::refresh(self).await.map(|_| ())
    }
}

impl<FetchT> Refresh for PredictionCache<FetchT>
where
    FetchT: Fetch,
{
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn refresh(&self) -> Result<(), Error> {
        PredictionCache::refresh(self).await.map(|_| ())
    }
}

//
// BackgroundRefresh
//

/// Background refresh of a cache tier.
///
/// Refreshes once immediately (pre-warm), then on every interval until shut down. Failures are
/// logged and do not stop the ticker. Ticks missed because a refresh overran the interval are
/// skipped, not bursted.
///
/// Only [BackgroundRefresh::shutdown] stops the ticker. Dropping the handle detaches it, and it
/// keeps running for the life of the runtime.
#[derive(Debug)]
pub struct BackgroundRefresh {
    name: String,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl BackgroundRefresh {
    /// Refresh once, then spawn the ticker.
    ///
    /// Returns after the first refresh completes, successfully or not.
    pub async fn start<RefreshT>(refresh: Arc<RefreshT>, interval: Duration) -> Self
    where
        RefreshT: Refresh,
    {
        let name = refresh.name().to_string();

        tracing::info!("{}: pre-warming", name);
        match refresh.refresh().await {
            Ok(()) => tracing::info!("{}: pre-warmed", name),
            Err(error) => tracing::error!("{}: initial refresh failed: {}", name, error),
        }

        Self::spawn(refresh, interval)
    }

    /// Spawn the ticker without refreshing first.
    ///
    /// The first tick is one interval from now.
    pub fn spawn<RefreshT>(refresh: Arc<RefreshT>, interval: Duration) -> Self
    where
        RefreshT: Refresh,
    {
        let name = refresh.name().to_string();
        let (shutdown, mut shutdown_receiver) = watch::channel(false);

        tracing::info!("{}: refreshing every {}", name, interval.human_format());

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if let Err(error) = refresh.refresh().await {
                            tracing::error!("{}: refresh failed: {}", refresh.name(), error);
                        }
                    }

                    _ = shutdown_requested(&mut shutdown_receiver) => break,
                }
            }

            tracing::info!("{}: stopped", refresh.name());
        });

        Self {
            name,
            shutdown,
            task,
        }
    }

    /// Name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the ticker is still running.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stop the ticker and wait for it.
    ///
    /// A refresh in progress is allowed to complete.
    pub async fn shutdown(self) {
        _ = self.shutdown.send(true);
        if let Err(error) = self.task.await {
            tracing::error!("{}: ticker panicked: {}", self.name, error);
        }
    }
}

// Completes when shutdown is requested. Never completes if the sender was dropped without
// requesting it.
async fn shutdown_requested(receiver: &mut watch::Receiver<bool>) {
    let closed = receiver.wait_for(|shutdown| *shutdown).await.is_err();
    if closed {
        future::pending::<()>().await
    }
}
