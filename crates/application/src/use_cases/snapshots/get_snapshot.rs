use crate::services::{SnapshotState, SnapshotStore};
use ferrous_lan_domain::{AggregatedRecord, DomainError, HardwareAddress, Snapshot};
use std::sync::Arc;

/// Use case: read access to the published snapshot for the serving layer.
pub struct GetSnapshotUseCase {
    store: Arc<SnapshotStore>,
}

impl GetSnapshotUseCase {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }

    pub fn current(&self) -> SnapshotState {
        self.store.current()
    }

    pub fn execute(&self) -> Result<Arc<Snapshot>, DomainError> {
        self.store.current().ready().ok_or(DomainError::SnapshotNotReady)
    }

    /// Looks up one host by hardware address in any accepted notation.
    pub fn get_host(&self, address: &str) -> Result<AggregatedRecord, DomainError> {
        let address = HardwareAddress::parse(address)?;
        let snapshot = self.execute()?;

        snapshot
            .get(&address)
            .cloned()
            .ok_or_else(|| DomainError::HostNotFound(address.to_string()))
    }
}
