use ferrous_lan_domain::{
    AggregatedRecord, DomainError, HardwareAddress, LeaseTable, NeighborTable, Snapshot,
};
use std::collections::BTreeMap;
use tracing::error;

/// Joins leases and neighbors on hardware address.
///
/// Every address present in either input gets exactly one record. The output
/// map is ordered, so the result does not depend on the iteration order of the
/// inputs.
pub fn merge(leases: &LeaseTable, neighbors: &NeighborTable) -> Snapshot {
    let mut records: BTreeMap<HardwareAddress, AggregatedRecord> = BTreeMap::new();

    for (address, lease) in leases {
        if lease.hardware_address != *address {
            report_inconsistency(format!(
                "lease for {} filed under {}",
                lease.hardware_address, address
            ));
        }
        records
            .entry(*address)
            .or_insert_with(|| AggregatedRecord::new(*address))
            .dhcp_lease = Some(lease.clone());
    }

    for (address, entries) in neighbors {
        if let Some(stray) = entries.iter().find(|e| e.hardware_address != *address) {
            report_inconsistency(format!(
                "neighbor {} of {} filed under {}",
                stray.ip_address, stray.hardware_address, address
            ));
        }
        records
            .entry(*address)
            .or_insert_with(|| AggregatedRecord::new(*address))
            .ndp_entries = entries.clone();
    }

    Snapshot::new(records)
}

fn report_inconsistency(detail: String) {
    let e = DomainError::AggregationInconsistency(detail);
    error!(error = %e, "Input tables are keyed inconsistently");
}
