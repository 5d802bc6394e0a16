pub mod snapshots;

pub use snapshots::{
    GetSnapshotUseCase, RefreshOutcome, RefreshPhase, RefreshSnapshotUseCase, RefreshStats,
};
