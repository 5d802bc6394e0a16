use async_trait::async_trait;
use ferrous_lan_domain::DomainError;
use std::time::Duration;

/// Runs the neighbor-discovery diagnostic and captures its standard output.
#[async_trait]
pub trait NeighborDiagnostic: Send + Sync {
    /// Must give up (and reap the process) once `timeout` elapses, returning
    /// `DomainError::NeighborSourceTimeout`.
    async fn run_neighbor_diagnostic(&self, timeout: Duration) -> Result<String, DomainError>;
}
