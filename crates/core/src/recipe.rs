//! Recipe validation and ingredient list encoding.
//!
//! Ingredients are persisted as JSON text in a nullable `TEXT` column. On
//! the way in, clients may send the list either as a JSON array or as a
//! string that already holds the serialized array; both decode to the same
//! `Vec<Ingredient>`. On the way out the list is always a JSON array.

use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

use crate::error::CoreError;

/// One entry of a recipe's ingredient list, usually
/// `{name, amount, measurement}`.
///
/// Entries are stored and returned exactly as the client sent them: an
/// `amount` of `"1/2"` or a missing `measurement` survives the round trip.
pub type Ingredient = Value;

/// Validate a recipe name: present and not blank.
pub fn validate_recipe_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Recipe name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Decode the stored ingredients column.
///
/// A NULL or blank column decodes to an empty list.
pub fn decode_ingredients(text: Option<&str>) -> Result<Vec<Ingredient>, serde_json::Error> {
    match text.map(str::trim) {
        None | Some("") => Ok(Vec::new()),
        Some(text) => serde_json::from_str(text),
    }
}

/// Encode an ingredient list for storage.
pub fn encode_ingredients(ingredients: &[Ingredient]) -> Result<String, serde_json::Error> {
    serde_json::to_string(ingredients)
}

/// Deserialize an optional ingredient list from request JSON.
///
/// Accepts an array, a string holding that array as JSON, or `null`. Pair
/// with `#[serde(default)]` so an absent field is `None`.
pub fn deserialize_ingredients<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<Ingredient>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(Value::String(text)) => decode_ingredients(Some(&text))
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid ingredients JSON: {e}"))),
        Some(other) => Err(de::Error::custom(format!(
            "ingredients must be an array or a JSON-encoded array, got {other}"
        ))),
    }
}
