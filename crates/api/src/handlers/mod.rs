//! Request handlers for the recipe and log resources.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete) for a single entity type. Handlers delegate to the
//! corresponding repository in `recipe_lab_db` and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod log;
pub mod recipe;
