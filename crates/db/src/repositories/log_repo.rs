//! Repository for the `logs` table.

use recipe_lab_core::types::DbId;
use sqlx::PgPool;

use crate::models::log::{CreateLog, Log, UpdateLog};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, recipe_id, date_of_event, notes, rating";

/// Provides CRUD operations for cooking logs.
pub struct LogRepo;

impl LogRepo {
    /// Insert a new log, returning the created row.
    ///
    /// A `recipe_id` with no matching recipe fails with a foreign key
    /// violation from the database.
    pub async fn create(pool: &PgPool, input: &CreateLog) -> Result<Log, sqlx::Error> {
        let query = format!(
            "INSERT INTO logs (recipe_id, date_of_event, notes, rating)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Log>(&query)
            .bind(input.recipe_id)
            .bind(input.date_of_event)
            .bind(&input.notes)
            .bind(input.rating)
            .fetch_one(pool)
            .await
    }

    /// Find a log by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Log>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM logs WHERE id = $1");
        sqlx::query_as::<_, Log>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all logs in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Log>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM logs ORDER BY id");
        sqlx::query_as::<_, Log>(&query).fetch_all(pool).await
    }

    /// List the logs for one recipe, oldest cooking date first.
    pub async fn list_by_recipe(pool: &PgPool, recipe_id: DbId) -> Result<Vec<Log>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM logs
             WHERE recipe_id = $1
             ORDER BY date_of_event, id"
        );
        sqlx::query_as::<_, Log>(&query)
            .bind(recipe_id)
            .fetch_all(pool)
            .await
    }

    /// Update a log. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLog,
    ) -> Result<Option<Log>, sqlx::Error> {
        let query = format!(
            "UPDATE logs SET
                recipe_id = COALESCE($2, recipe_id),
                date_of_event = COALESCE($3, date_of_event),
                notes = COALESCE($4, notes),
                rating = COALESCE($5, rating)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Log>(&query)
            .bind(id)
            .bind(input.recipe_id)
            .bind(input.date_of_event)
            .bind(&input.notes)
            .bind(input.rating)
            .fetch_optional(pool)
            .await
    }

    /// Delete a log by ID, returning the removed row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Log>, sqlx::Error> {
        let query = format!("DELETE FROM logs WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Log>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
