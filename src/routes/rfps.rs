use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bytes::Bytes;

use crate::error::AppError;
use crate::models::Rfp;
use crate::state::SharedState;

// Bodies are taken as raw bytes so every malformed payload maps to a 400,
// whatever its content type.

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Rfp>>, AppError> {
    let rfps = state.handler.list().await?;
    Ok(Json(rfps))
}

pub async fn create(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Rfp>), AppError> {
    let rfp = state.handler.create(&body).await?;
    Ok((StatusCode::CREATED, Json(rfp)))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Rfp>, AppError> {
    let rfp = state.handler.get(&id).await?;
    Ok(Json(rfp))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Rfp>, AppError> {
    let rfp = state.handler.update(&id, &body).await?;
    Ok(Json(rfp))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.handler.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
