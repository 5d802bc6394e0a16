use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeasesConfig {
    /// Path of the dhcpd lease database
    #[serde(default = "default_lease_path")]
    pub path: String,

    /// Upper bound on a single read of the lease file
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,
}

impl Default for LeasesConfig {
    fn default() -> Self {
        Self {
            path: default_lease_path(),
            read_timeout_ms: default_read_timeout_ms(),
        }
    }
}

fn default_lease_path() -> String {
    "/var/db/dhcpd/dhcpd.leases".to_string()
}

fn default_read_timeout_ms() -> u64 {
    5000
}
