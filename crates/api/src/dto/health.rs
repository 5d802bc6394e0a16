use ferrous_lan_application::use_cases::RefreshStats;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct HealthResponse {
    /// `ok` once a snapshot is published, `warming_up` before that
    pub status: &'static str,
    pub generation: Option<u64>,
    pub created_at: Option<String>,
    pub hosts: usize,
    pub phase: &'static str,
    pub stats: RefreshStatsResponse,
    pub sources: SourcesResponse,
}

#[derive(Serialize, Debug, Clone)]
pub struct RefreshStatsResponse {
    pub cycles: u64,
    pub published: u64,
    pub skipped: u64,
    pub lease_failures: u64,
    pub neighbor_failures: u64,
    pub parse_errors: u64,
}

#[derive(Serialize, Debug, Clone)]
pub struct SourcesResponse {
    pub leases_fresh: bool,
    pub neighbors_fresh: bool,
}

impl From<RefreshStats> for RefreshStatsResponse {
    fn from(stats: RefreshStats) -> Self {
        Self {
            cycles: stats.cycles,
            published: stats.published,
            skipped: stats.skipped,
            lease_failures: stats.lease_failures,
            neighbor_failures: stats.neighbor_failures,
            parse_errors: stats.parse_errors,
        }
    }
}
