pub mod health;
pub mod status;

pub use health::{HealthResponse, RefreshStatsResponse, SourcesResponse};
pub use status::{
    status_from_snapshot, DhcpLeaseResponse, HostRecordResponse, NdpEntryResponse,
    StatusResponse,
};
