//! Route definitions for the `/logs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::log;
use crate::state::AppState;

/// Routes mounted at `/logs`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(log::list).post(log::create))
        .route(
            "/{id}",
            get(log::get_by_id).put(log::update).delete(log::delete),
        )
}
