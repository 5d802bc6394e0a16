pub mod get_snapshot;
pub mod refresh_snapshot;

pub use get_snapshot::GetSnapshotUseCase;
pub use refresh_snapshot::{RefreshOutcome, RefreshPhase, RefreshSnapshotUseCase, RefreshStats};
