use axum::Json;
use axum::extract::{Path, State};

use crate::domain::{Worker, WorkerId};
use crate::presentation::state::AppState;

use super::error::ApiError;

pub async fn list_workers_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Worker>>, ApiError> {
    let workers = state.search_service.matcher().all().await?;
    Ok(Json(workers))
}

pub async fn get_worker_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Worker>, ApiError> {
    let worker = state
        .search_service
        .matcher()
        .by_id(&WorkerId::new(id.as_str()))
        .await?
        .ok_or_else(|| ApiError::not_found(format!("worker {} not found", id)))?;

    Ok(Json(worker))
}
