use crate::ports::{LeaseSource, NeighborDiagnostic};
use crate::services::{merge, LeaseRecordParser, NeighborRecordParser, ParseReport, SnapshotStore};
use chrono::Utc;
use ferrous_lan_domain::{DomainError, LeaseTable, NeighborFormat, NeighborTable, SourceFreshness};
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

const DEFAULT_LEASE_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_NEIGHBOR_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the refresh cycle currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPhase {
    Idle,
    Acquiring,
    Aggregating,
    Published,
}

impl RefreshPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefreshPhase::Idle => "idle",
            RefreshPhase::Acquiring => "acquiring",
            RefreshPhase::Aggregating => "aggregating",
            RefreshPhase::Published => "published",
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => RefreshPhase::Acquiring,
            2 => RefreshPhase::Aggregating,
            3 => RefreshPhase::Published,
            _ => RefreshPhase::Idle,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            RefreshPhase::Idle => 0,
            RefreshPhase::Acquiring => 1,
            RefreshPhase::Aggregating => 2,
            RefreshPhase::Published => 3,
        }
    }
}

/// Counters accumulated over the lifetime of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshStats {
    pub cycles: u64,
    pub published: u64,
    pub skipped: u64,
    pub lease_failures: u64,
    pub neighbor_failures: u64,
    pub parse_errors: u64,
}

#[derive(Debug, Default)]
struct RefreshCounters {
    cycles: AtomicU64,
    published: AtomicU64,
    skipped: AtomicU64,
    lease_failures: AtomicU64,
    neighbor_failures: AtomicU64,
    parse_errors: AtomicU64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Published {
        generation: u64,
        hosts: usize,
        freshness: SourceFreshness,
    },
    /// Both sources failed; the previous snapshot stays current
    Skipped,
}

/// Last successfully parsed result of each source.
#[derive(Default)]
struct LastGood {
    leases: Option<LeaseTable>,
    neighbors: Option<NeighborTable>,
}

/// Use case: acquire both sources, aggregate and publish one snapshot.
/// Driven periodically by the snapshot refresh job.
pub struct RefreshSnapshotUseCase {
    lease_source: Arc<dyn LeaseSource>,
    neighbor_diagnostic: Arc<dyn NeighborDiagnostic>,
    neighbor_parser: NeighborRecordParser,
    lease_timeout: Duration,
    neighbor_timeout: Duration,
    store: Arc<SnapshotStore>,
    last_good: Mutex<LastGood>,
    phase: AtomicU8,
    generation: AtomicU64,
    counters: RefreshCounters,
}

impl RefreshSnapshotUseCase {
    pub fn new(
        lease_source: Arc<dyn LeaseSource>,
        neighbor_diagnostic: Arc<dyn NeighborDiagnostic>,
        neighbor_format: NeighborFormat,
        store: Arc<SnapshotStore>,
    ) -> Self {
        Self {
            lease_source,
            neighbor_diagnostic,
            neighbor_parser: NeighborRecordParser::new(neighbor_format),
            lease_timeout: DEFAULT_LEASE_TIMEOUT,
            neighbor_timeout: DEFAULT_NEIGHBOR_TIMEOUT,
            store,
            last_good: Mutex::new(LastGood::default()),
            phase: AtomicU8::new(RefreshPhase::Idle.as_u8()),
            generation: AtomicU64::new(0),
            counters: RefreshCounters::default(),
        }
    }

    pub fn with_lease_timeout(mut self, timeout: Duration) -> Self {
        self.lease_timeout = timeout;
        self
    }

    pub fn with_neighbor_timeout(mut self, timeout: Duration) -> Self {
        self.neighbor_timeout = timeout;
        self
    }

    pub async fn execute(&self) -> Result<RefreshOutcome, DomainError> {
        // Held for the whole cycle so overlapping calls run one after another.
        let mut last_good = self.last_good.lock().await;

        self.counters.cycles.fetch_add(1, Ordering::Relaxed);
        self.set_phase(RefreshPhase::Acquiring);
        debug!("Acquiring lease and neighbor sources");

        let (lease_text, neighbor_text) = tokio::join!(
            self.read_leases(),
            self.neighbor_diagnostic
                .run_neighbor_diagnostic(self.neighbor_timeout),
        );

        let now = Utc::now();

        let leases_fresh = match lease_text {
            Ok(text) => {
                let parsed = LeaseRecordParser::parse(&text, now);
                self.note_parse(&parsed.report, "leases");
                last_good.leases = Some(parsed.table);
                true
            }
            Err(e) => {
                self.counters.lease_failures.fetch_add(1, Ordering::Relaxed);
                warn!(
                    error = %e,
                    fallback = last_good.leases.is_some(),
                    "Lease source unavailable, reusing last good result"
                );
                false
            }
        };

        let neighbors_fresh = match neighbor_text {
            Ok(text) => {
                let parsed = self.neighbor_parser.parse(&text);
                self.note_parse(&parsed.report, "neighbors");
                last_good.neighbors = Some(parsed.table);
                true
            }
            Err(e) => {
                self.counters.neighbor_failures.fetch_add(1, Ordering::Relaxed);
                warn!(
                    error = %e,
                    fallback = last_good.neighbors.is_some(),
                    "Neighbor source unavailable, reusing last good result"
                );
                false
            }
        };

        if !leases_fresh && !neighbors_fresh {
            self.counters.skipped.fetch_add(1, Ordering::Relaxed);
            self.set_phase(RefreshPhase::Idle);
            warn!("Both sources unavailable, keeping current snapshot");
            return Ok(RefreshOutcome::Skipped);
        }

        self.set_phase(RefreshPhase::Aggregating);

        // Reused leases may have run out since they were parsed.
        let leases: LeaseTable = last_good
            .leases
            .iter()
            .flatten()
            .filter(|(_, lease)| !lease.is_expired_at(now))
            .map(|(address, lease)| (*address, lease.clone()))
            .collect();
        let no_neighbors = NeighborTable::new();
        let neighbors = last_good.neighbors.as_ref().unwrap_or(&no_neighbors);

        let freshness = SourceFreshness {
            leases_fresh,
            neighbors_fresh,
        };
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let snapshot = merge(&leases, neighbors)
            .with_generation(generation)
            .with_freshness(freshness);
        let hosts = snapshot.len();
        let lease_count = snapshot.lease_count();
        let neighbor_count = snapshot.neighbor_count();

        if !self.store.publish(snapshot) {
            self.set_phase(RefreshPhase::Idle);
            let e = DomainError::AggregationInconsistency(format!(
                "generation {} is not newer than the published snapshot",
                generation
            ));
            error!(error = %e, "Snapshot publish rejected");
            return Err(e);
        }

        self.counters.published.fetch_add(1, Ordering::Relaxed);
        self.set_phase(RefreshPhase::Published);

        info!(
            generation,
            hosts,
            leases = lease_count,
            neighbors = neighbor_count,
            leases_fresh,
            neighbors_fresh,
            "Snapshot published"
        );

        Ok(RefreshOutcome::Published {
            generation,
            hosts,
            freshness,
        })
    }

    pub fn phase(&self) -> RefreshPhase {
        RefreshPhase::from_u8(self.phase.load(Ordering::Acquire))
    }

    pub fn stats(&self) -> RefreshStats {
        RefreshStats {
            cycles: self.counters.cycles.load(Ordering::Relaxed),
            published: self.counters.published.load(Ordering::Relaxed),
            skipped: self.counters.skipped.load(Ordering::Relaxed),
            lease_failures: self.counters.lease_failures.load(Ordering::Relaxed),
            neighbor_failures: self.counters.neighbor_failures.load(Ordering::Relaxed),
            parse_errors: self.counters.parse_errors.load(Ordering::Relaxed),
        }
    }

    /// A lease path on a stalled mount or a FIFO can block forever.
    async fn read_leases(&self) -> Result<String, DomainError> {
        let read = self.lease_source.read_lease_source();
        tokio::time::timeout(self.lease_timeout, read)
            .await
            .unwrap_or_else(|_| {
                Err(DomainError::LeaseSourceUnavailable(format!(
                    "lease read timed out after {}ms",
                    self.lease_timeout.as_millis()
                )))
            })
    }

    fn set_phase(&self, phase: RefreshPhase) {
        self.phase.store(phase.as_u8(), Ordering::Release);
    }

    fn note_parse(&self, report: &ParseReport, source: &'static str) {
        report.log_summary(source);
        self.counters
            .parse_errors
            .fetch_add(report.error_count() as u64, Ordering::Relaxed);
    }
}
