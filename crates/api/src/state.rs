/// Shared state handed to every handler via `State<AppState>`.
///
/// Cloning is cheap: the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: recipe_lab_db::DbPool,
}
