//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod log_repo;
pub mod recipe_repo;

pub use log_repo::LogRepo;
pub use recipe_repo::RecipeRepo;
