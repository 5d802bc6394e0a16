use ferrous_lan_application::services::SnapshotStore;
use ferrous_lan_application::use_cases::{GetSnapshotUseCase, RefreshSnapshotUseCase};
use ferrous_lan_domain::Config;
use ferrous_lan_infrastructure::system::{LeaseFileReader, NeighborCommandRunner};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct UseCases {
    pub get_snapshot: Arc<GetSnapshotUseCase>,
    pub refresh: Arc<RefreshSnapshotUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        let lease_source = Arc::new(LeaseFileReader::new(config.leases.path.clone()));
        let neighbor_diagnostic = Arc::new(NeighborCommandRunner::new(
            config.neighbors.program(),
            config.neighbors.arguments(),
        ));

        info!(
            lease_file = %lease_source.path().display(),
            neighbor_command = %neighbor_diagnostic.command_line(),
            neighbor_format = %config.neighbors.format,
            "Configured host data sources"
        );

        let store = Arc::new(SnapshotStore::new());

        Self {
            get_snapshot: Arc::new(GetSnapshotUseCase::new(store.clone())),
            refresh: Arc::new(
                RefreshSnapshotUseCase::new(
                    lease_source,
                    neighbor_diagnostic,
                    config.neighbors.format,
                    store,
                )
                .with_lease_timeout(Duration::from_millis(config.leases.read_timeout_ms))
                .with_neighbor_timeout(Duration::from_millis(config.neighbors.timeout_ms)),
            ),
        }
    }
}
