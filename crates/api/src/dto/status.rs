use ferrous_lan_domain::{AggregatedRecord, DhcpLease, NdpEntry, Snapshot};
use serde::Serialize;
use std::collections::BTreeMap;

/// Full snapshot keyed by canonical hardware address.
pub type StatusResponse = BTreeMap<String, HostRecordResponse>;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NdpEntryResponse {
    pub mac_address: String,
    pub ip_address: String,
    pub cache_state: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DhcpLeaseResponse {
    pub mac_address: String,
    pub ip4_address: String,
    pub expire_at: Option<String>,
    pub hostname: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HostRecordResponse {
    pub ndp_entries: Vec<NdpEntryResponse>,
    pub dhcp_lease: Option<DhcpLeaseResponse>,
}

impl From<&NdpEntry> for NdpEntryResponse {
    fn from(entry: &NdpEntry) -> Self {
        Self {
            mac_address: entry.hardware_address.to_string(),
            ip_address: entry.ip_address.clone(),
            cache_state: entry.cache_state.as_str().to_string(),
        }
    }
}

impl From<&DhcpLease> for DhcpLeaseResponse {
    fn from(lease: &DhcpLease) -> Self {
        Self {
            mac_address: lease.hardware_address.to_string(),
            ip4_address: lease.ipv4_address.to_string(),
            expire_at: lease.expire_at_display(),
            hostname: lease.hostname.as_deref().map(str::to_string),
        }
    }
}

impl From<&AggregatedRecord> for HostRecordResponse {
    fn from(record: &AggregatedRecord) -> Self {
        Self {
            ndp_entries: record.ndp_entries.iter().map(NdpEntryResponse::from).collect(),
            dhcp_lease: record.dhcp_lease.as_ref().map(DhcpLeaseResponse::from),
        }
    }
}

pub fn status_from_snapshot(snapshot: &Snapshot) -> StatusResponse {
    snapshot
        .records()
        .iter()
        .map(|(address, record)| (address.to_string(), HostRecordResponse::from(record)))
        .collect()
}
