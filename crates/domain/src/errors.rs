use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid hardware address: {0}")]
    InvalidHardwareAddress(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Malformed record at line {line}: {reason}")]
    RecordParse { line: usize, reason: String },

    #[error("Lease source unavailable: {0}")]
    LeaseSourceUnavailable(String),

    #[error("Neighbor source unavailable: {0}")]
    NeighborSourceUnavailable(String),

    #[error("Neighbor diagnostic timed out after {0} ms")]
    NeighborSourceTimeout(u64),

    #[error("Aggregation inconsistency: {0}")]
    AggregationInconsistency(String),

    #[error("Snapshot not yet available")]
    SnapshotNotReady,

    #[error("Host not found: {0}")]
    HostNotFound(String),
}

impl DomainError {
    /// True for failures of an acquisition primitive (file or command).
    pub fn is_source_failure(&self) -> bool {
        matches!(
            self,
            DomainError::LeaseSourceUnavailable(_)
                | DomainError::NeighborSourceUnavailable(_)
                | DomainError::NeighborSourceTimeout(_)
        )
    }
}
