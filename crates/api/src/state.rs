use ferrous_lan_application::use_cases::{GetSnapshotUseCase, RefreshSnapshotUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_snapshot: Arc<GetSnapshotUseCase>,
    pub refresh: Arc<RefreshSnapshotUseCase>,
}
