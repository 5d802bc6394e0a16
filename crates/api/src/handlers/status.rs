use crate::{
    dto::{status_from_snapshot, HostRecordResponse, StatusResponse},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_status")]
pub async fn get_status(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    let snapshot = state.get_snapshot.execute()?;

    debug!(
        generation = snapshot.generation(),
        hosts = snapshot.len(),
        "Serving snapshot"
    );

    Ok(Json(status_from_snapshot(&snapshot)))
}

#[instrument(skip(state), name = "api_get_host")]
pub async fn get_host(
    State(state): State<AppState>,
    Path(mac): Path<String>,
) -> Result<Json<HostRecordResponse>, ApiError> {
    let record = state.get_snapshot.get_host(&mac)?;
    Ok(Json(HostRecordResponse::from(&record)))
}
