use ferrous_lan_application::use_cases::{RefreshOutcome, RefreshSnapshotUseCase};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;

/// Periodically rebuilds and publishes the host snapshot.
/// The first cycle runs as soon as the job starts.
pub struct SnapshotRefreshJob {
    refresh: Arc<RefreshSnapshotUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl SnapshotRefreshJob {
    pub fn new(refresh: Arc<RefreshSnapshotUseCase>) -> Self {
        Self {
            refresh,
            interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, secs: u64) -> Self {
        self.interval_secs = secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            interval_secs = self.interval_secs,
            "Starting snapshot refresh job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            // A slow cycle pushes the next one back instead of bunching ticks.
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = self.shutdown.cancelled() => {
                        info!("SnapshotRefreshJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        self.run_cycle().await;
                    }
                }
            }
        })
    }

    async fn run_cycle(&self) {
        match self.refresh.execute().await {
            Ok(RefreshOutcome::Published {
                generation, hosts, ..
            }) => {
                debug!(generation, hosts, "Snapshot refresh cycle completed");
            }
            Ok(RefreshOutcome::Skipped) => {
                warn!("Snapshot refresh cycle skipped, both sources unavailable");
            }
            Err(e) => {
                error!(error = %e, "Snapshot refresh cycle failed");
            }
        }
    }
}
