use async_trait::async_trait;
use ferrous_lan_application::ports::{LeaseSource, NeighborDiagnostic};
use ferrous_lan_domain::DomainError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const LEASES: &str = r#"
lease 192.168.1.10 {
  ends never;
  binding state active;
  hardware ethernet 00:11:22:33:44:55;
  client-hostname "laptop";
}
"#;

pub const NEIGHBORS: &str = "\
Neighbor                             Linklayer Address  Netif Expire    S Flags
2001:db8::10                         0:11:22:33:44:55     em0 23h59m58s S
";

/// Lease source that answers with fixed text or fails on demand.
pub struct MockLeaseSource {
    call_count: Arc<AtomicU64>,
    should_fail: Arc<AtomicBool>,
}

impl MockLeaseSource {
    pub fn new() -> Self {
        Self {
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl LeaseSource for MockLeaseSource {
    async fn read_lease_source(&self) -> Result<String, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::LeaseSourceUnavailable("mock".to_string()));
        }
        Ok(LEASES.to_string())
    }
}

pub struct MockNeighborDiagnostic {
    call_count: Arc<AtomicU64>,
    should_fail: Arc<AtomicBool>,
}

impl MockNeighborDiagnostic {
    pub fn new() -> Self {
        Self {
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl NeighborDiagnostic for MockNeighborDiagnostic {
    async fn run_neighbor_diagnostic(&self, _timeout: Duration) -> Result<String, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::NeighborSourceUnavailable("mock".to_string()));
        }
        Ok(NEIGHBORS.to_string())
    }
}
