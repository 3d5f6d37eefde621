//! Cooking log entity model and DTOs.

use recipe_lab_core::types::{Date, DbId};
use recipe_lab_core::wire;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A log row from the `logs` table.
///
/// `rating` is stored as a number but always rendered as a string.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    #[serde(serialize_with = "wire::as_string")]
    pub id: DbId,
    #[serde(serialize_with = "wire::as_string")]
    pub recipe_id: DbId,
    pub date_of_event: Date,
    pub notes: String,
    #[serde(serialize_with = "wire::as_string")]
    pub rating: f64,
}

/// DTO for creating a new log.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLog {
    #[serde(deserialize_with = "wire::number_or_string")]
    pub recipe_id: DbId,
    pub date_of_event: Date,
    #[serde(default)]
    pub notes: String,
    #[serde(deserialize_with = "wire::number_or_string")]
    pub rating: f64,
}

/// DTO for updating an existing log. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLog {
    #[serde(default, deserialize_with = "wire::option_number_or_string")]
    pub recipe_id: Option<DbId>,
    pub date_of_event: Option<Date>,
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "wire::option_number_or_string")]
    pub rating: Option<f64>,
}
