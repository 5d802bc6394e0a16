use crate::HardwareAddress;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Timestamp layout used by dhcpd (`ends 6 2021/02/06 11:17:27;`), always UTC.
pub const LEASE_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Active leases keyed by the hardware address holding them.
pub type LeaseTable = HashMap<HardwareAddress, DhcpLease>;

/// Binding state of a lease block (`binding state <token>;`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    Active,
    Free,
    Abandoned,
    Declined,
    Backup,
    Expired,
    Released,
    Reset,
    Unknown,
}

impl BindingState {
    pub fn from_token(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "active" => BindingState::Active,
            "free" => BindingState::Free,
            "abandoned" => BindingState::Abandoned,
            "declined" => BindingState::Declined,
            "backup" => BindingState::Backup,
            "expired" => BindingState::Expired,
            "released" => BindingState::Released,
            "reset" => BindingState::Reset,
            _ => BindingState::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BindingState::Active => "active",
            BindingState::Free => "free",
            BindingState::Abandoned => "abandoned",
            BindingState::Declined => "declined",
            BindingState::Backup => "backup",
            BindingState::Expired => "expired",
            BindingState::Released => "released",
            BindingState::Reset => "reset",
            BindingState::Unknown => "unknown",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, BindingState::Active)
    }
}

/// An IPv4 address currently bound to a hardware address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhcpLease {
    pub hardware_address: HardwareAddress,
    pub ipv4_address: Ipv4Addr,
    pub starts_at: Option<DateTime<Utc>>,
    /// `None` for leases written as `ends never;`
    pub expires_at: Option<DateTime<Utc>>,
    pub hostname: Option<Arc<str>>,
}

impl DhcpLease {
    pub fn new(hardware_address: HardwareAddress, ipv4_address: Ipv4Addr) -> Self {
        Self {
            hardware_address,
            ipv4_address,
            starts_at: None,
            expires_at: None,
            hostname: None,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= now,
            None => false,
        }
    }

    /// Expiry rendered the way dhcpd writes it, or `None` for infinite leases.
    pub fn expire_at_display(&self) -> Option<String> {
        self.expires_at
            .map(|ts| ts.format(LEASE_TIME_FORMAT).to_string())
    }
}
