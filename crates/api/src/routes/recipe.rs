//! Route definitions for the `/recipes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::recipe;
use crate::state::AppState;

/// Routes mounted at `/recipes`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /{id}/logs     -> list_logs
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recipe::list).post(recipe::create))
        .route(
            "/{id}",
            get(recipe::get_by_id)
                .put(recipe::update)
                .delete(recipe::delete),
        )
        .route("/{id}/logs", get(recipe::list_logs))
}
