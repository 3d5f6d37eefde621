//! Repository for the `recipes` table.

use recipe_lab_core::recipe::{encode_ingredients, Ingredient};
use recipe_lab_core::types::DbId;
use sqlx::PgPool;

use crate::models::recipe::{CreateRecipe, Recipe, UpdateRecipe};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, directions, ingredients";

/// Provides CRUD operations for recipes.
pub struct RecipeRepo;

impl RecipeRepo {
    /// Insert a new recipe, returning the created row.
    ///
    /// Omitted ingredients are stored as NULL and read back as an empty list.
    pub async fn create(pool: &PgPool, input: &CreateRecipe) -> Result<Recipe, sqlx::Error> {
        let ingredients = encode_column(input.ingredients.as_deref())?;
        let query = format!(
            "INSERT INTO recipes (name, directions, ingredients)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Recipe>(&query)
            .bind(&input.name)
            .bind(&input.directions)
            .bind(ingredients)
            .fetch_one(pool)
            .await
    }

    /// Find a recipe by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes WHERE id = $1");
        sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all recipes in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes ORDER BY id");
        sqlx::query_as::<_, Recipe>(&query).fetch_all(pool).await
    }

    /// Update a recipe. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRecipe,
    ) -> Result<Option<Recipe>, sqlx::Error> {
        let ingredients = encode_column(input.ingredients.as_deref())?;
        let query = format!(
            "UPDATE recipes SET
                name = COALESCE($2, name),
                directions = COALESCE($3, directions),
                ingredients = COALESCE($4, ingredients)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.directions)
            .bind(ingredients)
            .fetch_optional(pool)
            .await
    }

    /// Delete a recipe by ID, returning the removed row.
    ///
    /// Logs that reference the recipe are removed by `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Recipe>, sqlx::Error> {
        let query = format!("DELETE FROM recipes WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

/// Serialize an ingredient list into its `TEXT` column form.
fn encode_column(ingredients: Option<&[Ingredient]>) -> Result<Option<String>, sqlx::Error> {
    ingredients
        .map(encode_ingredients)
        .transpose()
        .map_err(|e| sqlx::Error::Encode(Box::new(e)))
}
