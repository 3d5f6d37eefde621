//! Shared domain types, validation helpers and wire-format conventions for
//! the recipe-lab backend. Contains no I/O.

pub mod error;
pub mod log;
pub mod recipe;
pub mod types;
pub mod wire;
