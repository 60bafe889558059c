use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::entry::Entry;

use crate::errors::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// GET /keyvalue/:name, answering with the bare JSON string value.
pub async fn get_entry(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<String>, ApiError> {
    let value = state.keyvalue.get(&name).await?;
    Ok(Json(value))
}

/// POST /keyvalue
pub async fn set_entry(
    State(state): State<AppState>,
    JsonBody(entry): JsonBody<Entry>,
) -> Result<(StatusCode, Json<Entry>), ApiError> {
    let saved = state.keyvalue.set(entry).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// DELETE /keyvalue/:name
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.keyvalue.delete(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}
