use async_trait::async_trait;
use ferrous_lan_application::ports::{LeaseSource, NeighborDiagnostic};
use ferrous_lan_domain::DomainError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

pub struct MockLeaseSource {
    text: Arc<RwLock<String>>,
    call_count: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockLeaseSource {
    pub fn new() -> Self {
        Self::with_text("")
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            text: Arc::new(RwLock::new(text.to_string())),
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub async fn set_text(&self, text: &str) {
        *self.text.write().await = text.to_string();
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

#[async_trait]
impl LeaseSource for MockLeaseSource {
    async fn read_lease_source(&self) -> Result<String, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().await {
            return Err(DomainError::LeaseSourceUnavailable(
                "lease file missing".to_string(),
            ));
        }
        Ok(self.text.read().await.clone())
    }
}

/// Canned neighbor output. A configured delay longer than the caller's
/// timeout behaves like a hung command.
pub struct MockNeighborDiagnostic {
    text: Arc<RwLock<String>>,
    call_count: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
    delay: Arc<RwLock<Duration>>,
}

impl MockNeighborDiagnostic {
    pub fn new() -> Self {
        Self::with_text("")
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            text: Arc::new(RwLock::new(text.to_string())),
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
            delay: Arc::new(RwLock::new(Duration::ZERO)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub async fn set_text(&self, text: &str) {
        *self.text.write().await = text.to_string();
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = delay;
    }
}

#[async_trait]
impl NeighborDiagnostic for MockNeighborDiagnostic {
    async fn run_neighbor_diagnostic(&self, timeout: Duration) -> Result<String, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().await {
            return Err(DomainError::NeighborSourceUnavailable(
                "ndp exited with status 1".to_string(),
            ));
        }

        let delay = *self.delay.read().await;
        if delay > timeout {
            tokio::time::sleep(timeout).await;
            return Err(DomainError::NeighborSourceTimeout(timeout.as_millis() as u64));
        }
        tokio::time::sleep(delay).await;

        Ok(self.text.read().await.clone())
    }
}
