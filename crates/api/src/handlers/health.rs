use crate::{
    dto::{HealthResponse, SourcesResponse},
    state::AppState,
};
use axum::{extract::State, Json};
use chrono::SecondsFormat;
use ferrous_lan_application::services::SnapshotState;
use ferrous_lan_domain::SourceFreshness;
use tracing::instrument;

#[instrument(skip(state), name = "api_health_check")]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (status, generation, created_at, hosts, freshness) = match state.get_snapshot.current() {
        SnapshotState::Ready(snapshot) => (
            "ok",
            Some(snapshot.generation()),
            Some(snapshot.created_at().to_rfc3339_opts(SecondsFormat::Secs, true)),
            snapshot.len(),
            snapshot.freshness(),
        ),
        SnapshotState::NotYetAvailable => (
            "warming_up",
            None,
            None,
            0,
            SourceFreshness {
                leases_fresh: false,
                neighbors_fresh: false,
            },
        ),
    };

    Json(HealthResponse {
        status,
        generation,
        created_at,
        hosts,
        phase: state.refresh.phase().as_str(),
        stats: state.refresh.stats().into(),
        sources: SourcesResponse {
            leases_fresh: freshness.leases_fresh,
            neighbors_fresh: freshness.neighbors_fresh,
        },
    })
}
