//! Handlers for the `/recipes` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use recipe_lab_core::error::CoreError;
use recipe_lab_core::recipe::validate_recipe_name;
use recipe_lab_core::types::DbId;
use recipe_lab_db::models::log::Log;
use recipe_lab_db::models::recipe::{CreateRecipe, Recipe, UpdateRecipe};
use recipe_lab_db::repositories::{LogRepo, RecipeRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Recipe",
        id,
    })
}

/// POST /api/v1/recipes
///
/// Responds `200` with the stored recipe.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateRecipe>, JsonRejection>,
) -> AppResult<Json<Recipe>> {
    let Json(input) = payload?;
    validate_recipe_name(&input.name)?;

    let recipe = RecipeRepo::create(&state.pool, &input).await?;
    tracing::info!(id = recipe.id, name = %recipe.name, "Recipe created");
    Ok(Json(recipe))
}

/// GET /api/v1/recipes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Recipe>>> {
    let recipes = RecipeRepo::list(&state.pool).await?;
    Ok(Json(recipes))
}

/// GET /api/v1/recipes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Recipe>> {
    let Path(id) = path?;
    let recipe = RecipeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(recipe))
}

/// PUT /api/v1/recipes/{id}
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateRecipe>, JsonRejection>,
) -> AppResult<Json<Recipe>> {
    let Path(id) = path?;
    let Json(input) = payload?;
    if let Some(name) = &input.name {
        validate_recipe_name(name)?;
    }

    let recipe = RecipeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(recipe))
}

/// DELETE /api/v1/recipes/{id}
///
/// Responds with the deleted recipe.
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Recipe>> {
    let Path(id) = path?;
    let recipe = RecipeRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Recipe deleted");
    Ok(Json(recipe))
}

/// GET /api/v1/recipes/{id}/logs
pub async fn list_logs(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Vec<Log>>> {
    let Path(id) = path?;
    RecipeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let logs = LogRepo::list_by_recipe(&state.pool, id).await?;
    Ok(Json(logs))
}
