//! Recipe entity model and DTOs.

use recipe_lab_core::recipe::{decode_ingredients, deserialize_ingredients, Ingredient};
use recipe_lab_core::types::DbId;
use recipe_lab_core::wire;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// A recipe row from the `recipes` table, with `ingredients` decoded from
/// its stored JSON text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    #[serde(serialize_with = "wire::as_string")]
    pub id: DbId,
    pub name: String,
    pub directions: Vec<String>,
    pub ingredients: Vec<Ingredient>,
}

impl<'r> FromRow<'r, PgRow> for Recipe {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let stored: Option<String> = row.try_get("ingredients")?;
        let ingredients =
            decode_ingredients(stored.as_deref()).map_err(|e| sqlx::Error::ColumnDecode {
                index: "ingredients".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            directions: row.try_get("directions")?,
            ingredients,
        })
    }
}

/// DTO for creating a new recipe.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecipe {
    pub name: String,
    pub directions: Vec<String>,
    /// Array or JSON-encoded string. Stored as NULL if omitted.
    #[serde(default, deserialize_with = "deserialize_ingredients")]
    pub ingredients: Option<Vec<Ingredient>>,
}

/// DTO for updating an existing recipe. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRecipe {
    pub name: Option<String>,
    pub directions: Option<Vec<String>>,
    #[serde(default, deserialize_with = "deserialize_ingredients")]
    pub ingredients: Option<Vec<Ingredient>>,
}
