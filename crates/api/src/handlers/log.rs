//! Handlers for the `/logs` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use recipe_lab_core::error::CoreError;
use recipe_lab_core::log::validate_rating;
use recipe_lab_core::types::DbId;
use recipe_lab_db::models::log::{CreateLog, Log, UpdateLog};
use recipe_lab_db::repositories::LogRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Log", id })
}

/// POST /api/v1/logs
///
/// Responds `200` with the stored log.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateLog>, JsonRejection>,
) -> AppResult<Json<Log>> {
    let Json(input) = payload?;
    validate_rating(input.rating)?;

    let log = LogRepo::create(&state.pool, &input).await?;
    tracing::info!(id = log.id, recipe_id = log.recipe_id, "Log created");
    Ok(Json(log))
}

/// GET /api/v1/logs
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Log>>> {
    let logs = LogRepo::list(&state.pool).await?;
    Ok(Json(logs))
}

/// GET /api/v1/logs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Log>> {
    let Path(id) = path?;
    let log = LogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(log))
}

/// PUT /api/v1/logs/{id}
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateLog>, JsonRejection>,
) -> AppResult<Json<Log>> {
    let Path(id) = path?;
    let Json(input) = payload?;
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }

    let log = LogRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(log))
}

/// DELETE /api/v1/logs/{id}
///
/// Responds with the deleted log.
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Log>> {
    let Path(id) = path?;
    let log = LogRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Log deleted");
    Ok(Json(log))
}
