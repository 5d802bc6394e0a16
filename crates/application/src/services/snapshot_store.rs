use arc_swap::ArcSwapOption;
use ferrous_lan_domain::Snapshot;
use std::sync::Arc;

/// What a reader sees when asking for the current snapshot.
#[derive(Debug, Clone)]
pub enum SnapshotState {
    Ready(Arc<Snapshot>),
    /// No refresh cycle has published anything yet
    NotYetAvailable,
}

impl SnapshotState {
    pub fn ready(self) -> Option<Arc<Snapshot>> {
        match self {
            SnapshotState::Ready(snapshot) => Some(snapshot),
            SnapshotState::NotYetAvailable => None,
        }
    }
}

/// Holder of the one published snapshot.
///
/// Readers load the pointer without locking; a publish swaps the whole
/// snapshot, so a reader holds either the old generation or the new one.
pub struct SnapshotStore {
    current: ArcSwapOption<Snapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::empty(),
        }
    }

    /// Makes `snapshot` visible to all subsequent reads.
    ///
    /// Returns `false` and leaves the store untouched when `snapshot` is not
    /// newer than the visible generation.
    pub fn publish(&self, snapshot: Snapshot) -> bool {
        let incoming = Arc::new(snapshot);
        let generation = incoming.generation();

        let previous = self.current.rcu(|current| match current {
            Some(existing) if existing.generation() >= generation => Some(Arc::clone(existing)),
            _ => Some(Arc::clone(&incoming)),
        });

        previous
            .as_ref()
            .map_or(true, |existing| existing.generation() < generation)
    }

    pub fn current(&self) -> SnapshotState {
        match self.current.load_full() {
            Some(snapshot) => SnapshotState::Ready(snapshot),
            None => SnapshotState::NotYetAvailable,
        }
    }

    pub fn generation(&self) -> Option<u64> {
        self.current.load_full().map(|s| s.generation())
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}
