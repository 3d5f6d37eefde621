pub mod health;
pub mod log;
pub mod recipe;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /recipes                      list, create
/// /recipes/{id}                 get, update, delete
/// /recipes/{id}/logs            logs for one recipe
///
/// /logs                         list, create
/// /logs/{id}                    get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/recipes", recipe::router())
        .nest("/logs", log::router())
}
