//! Ferrous LAN Domain Layer
pub mod config;
pub mod dhcp_lease;
pub mod errors;
pub mod hardware_address;
pub mod ndp_entry;
pub mod snapshot;

pub use config::{CliOverrides, Config, NeighborFormat};
pub use dhcp_lease::{BindingState, DhcpLease, LeaseTable, LEASE_TIME_FORMAT};
pub use errors::DomainError;
pub use hardware_address::HardwareAddress;
pub use ndp_entry::{is_link_local_ipv6, NdpCacheState, NdpEntry, NeighborTable};
pub use snapshot::{AggregatedRecord, Snapshot, SourceFreshness};
