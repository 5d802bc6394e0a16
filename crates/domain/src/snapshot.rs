use crate::{DhcpLease, HardwareAddress, NdpEntry};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Everything known about one hardware address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedRecord {
    pub hardware_address: HardwareAddress,
    pub ndp_entries: Vec<NdpEntry>,
    pub dhcp_lease: Option<DhcpLease>,
}

impl AggregatedRecord {
    pub fn new(hardware_address: HardwareAddress) -> Self {
        Self {
            hardware_address,
            ndp_entries: Vec::new(),
            dhcp_lease: None,
        }
    }
}

/// Whether each source contributed data acquired in the cycle that built the
/// snapshot, or data carried over from an earlier cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFreshness {
    pub leases_fresh: bool,
    pub neighbors_fresh: bool,
}

impl Default for SourceFreshness {
    fn default() -> Self {
        Self {
            leases_fresh: true,
            neighbors_fresh: true,
        }
    }
}

/// Immutable, fully aggregated view of all known hosts.
#[derive(Debug, Clone)]
pub struct Snapshot {
    generation: u64,
    created_at: DateTime<Utc>,
    freshness: SourceFreshness,
    records: BTreeMap<HardwareAddress, AggregatedRecord>,
}

impl Snapshot {
    pub fn new(records: BTreeMap<HardwareAddress, AggregatedRecord>) -> Self {
        Self {
            generation: 0,
            created_at: Utc::now(),
            freshness: SourceFreshness::default(),
            records,
        }
    }

    pub fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_freshness(mut self, freshness: SourceFreshness) -> Self {
        self.freshness = freshness;
        self
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn freshness(&self) -> SourceFreshness {
        self.freshness
    }

    pub fn records(&self) -> &BTreeMap<HardwareAddress, AggregatedRecord> {
        &self.records
    }

    pub fn get(&self, address: &HardwareAddress) -> Option<&AggregatedRecord> {
        self.records.get(address)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn lease_count(&self) -> usize {
        self.records
            .values()
            .filter(|r| r.dhcp_lease.is_some())
            .count()
    }

    pub fn neighbor_count(&self) -> usize {
        self.records.values().map(|r| r.ndp_entries.len()).sum()
    }
}
