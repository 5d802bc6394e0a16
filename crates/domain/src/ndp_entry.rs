use crate::HardwareAddress;
use std::collections::HashMap;
use std::fmt;
use std::net::Ipv6Addr;

/// True for addresses in fe80::/10.
pub fn is_link_local_ipv6(ip: &Ipv6Addr) -> bool {
    ip.segments()[0] & 0xffc0 == 0xfe80
}

/// Neighbor entries keyed by hardware address, in the order they were listed.
pub type NeighborTable = HashMap<HardwareAddress, Vec<NdpEntry>>;

/// Reachability state of an IPv6 neighbor cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NdpCacheState {
    Reachable,
    Stale,
    Delay,
    Probe,
    Permanent,
    Incomplete,
    Unreachable,
    NoState,
    WaitDelete,
    Unknown,
}

impl NdpCacheState {
    /// State column of BSD `ndp -an`, either the one-letter flag or the long name.
    pub fn from_ndp_token(token: &str) -> Self {
        match token {
            "R" | "Reachable" => NdpCacheState::Reachable,
            "S" | "Stale" => NdpCacheState::Stale,
            "D" | "Delay" => NdpCacheState::Delay,
            "P" | "Probe" => NdpCacheState::Probe,
            "I" | "Incomplete" => NdpCacheState::Incomplete,
            "N" | "No State" => NdpCacheState::NoState,
            "W" | "Wait Delete" => NdpCacheState::WaitDelete,
            "U" | "Unreachable" => NdpCacheState::Unreachable,
            _ => NdpCacheState::Unknown,
        }
    }

    /// NUD state keyword printed by Linux `ip -6 neigh show`.
    pub fn from_ip_neigh_token(token: &str) -> Option<Self> {
        let state = match token {
            "REACHABLE" => NdpCacheState::Reachable,
            "STALE" => NdpCacheState::Stale,
            "DELAY" => NdpCacheState::Delay,
            "PROBE" => NdpCacheState::Probe,
            "PERMANENT" => NdpCacheState::Permanent,
            "INCOMPLETE" => NdpCacheState::Incomplete,
            "FAILED" => NdpCacheState::Unreachable,
            "NOARP" | "NONE" => NdpCacheState::NoState,
            _ => return None,
        };
        Some(state)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NdpCacheState::Reachable => "Reachable",
            NdpCacheState::Stale => "Stale",
            NdpCacheState::Delay => "Delay",
            NdpCacheState::Probe => "Probe",
            NdpCacheState::Permanent => "Permanent",
            NdpCacheState::Incomplete => "Incomplete",
            NdpCacheState::Unreachable => "Unreachable",
            NdpCacheState::NoState => "NoState",
            NdpCacheState::WaitDelete => "WaitDelete",
            NdpCacheState::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for NdpCacheState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resolved IPv6 neighbor. Link-local addresses carry a `%interface` zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdpEntry {
    pub hardware_address: HardwareAddress,
    pub ip_address: String,
    pub interface: String,
    pub cache_state: NdpCacheState,
}

impl NdpEntry {
    pub fn new(
        hardware_address: HardwareAddress,
        ip_address: impl Into<String>,
        interface: impl Into<String>,
        cache_state: NdpCacheState,
    ) -> Self {
        Self {
            hardware_address,
            ip_address: ip_address.into(),
            interface: interface.into(),
            cache_state,
        }
    }

    pub fn is_link_local(&self) -> bool {
        let bare = self.ip_address.split('%').next().unwrap_or_default();
        bare.parse::<Ipv6Addr>()
            .map(|ip| is_link_local_ipv6(&ip))
            .unwrap_or(false)
    }
}
