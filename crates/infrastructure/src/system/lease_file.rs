use async_trait::async_trait;
use ferrous_lan_application::ports::LeaseSource;
use ferrous_lan_domain::DomainError;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Reads the ISC dhcpd lease database from disk.
pub struct LeaseFileReader {
    path: PathBuf,
}

impl LeaseFileReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl LeaseSource for LeaseFileReader {
    async fn read_lease_source(&self) -> Result<String, DomainError> {
        let bytes = fs::read(&self.path).await.map_err(|e| {
            DomainError::LeaseSourceUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        // dhcpd writes client-supplied hostnames verbatim; tolerate stray bytes.
        let content = String::from_utf8_lossy(&bytes).into_owned();

        debug!(
            path = %self.path.display(),
            bytes = bytes.len(),
            "Lease file read"
        );
        Ok(content)
    }
}
