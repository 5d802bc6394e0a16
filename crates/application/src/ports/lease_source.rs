use async_trait::async_trait;
use ferrous_lan_domain::DomainError;

/// Supplies the raw text of the DHCP lease database.
#[async_trait]
pub trait LeaseSource: Send + Sync {
    /// Fails with `DomainError::LeaseSourceUnavailable` when the text cannot be read.
    async fn read_lease_source(&self) -> Result<String, DomainError>;
}
