//! Integration tests for recipe repository operations against a real
//! database.

use recipe_lab_core::recipe::Ingredient;
use recipe_lab_db::models::recipe::{CreateRecipe, UpdateRecipe};
use recipe_lab_db::repositories::RecipeRepo;
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ingredient(name: &str, amount: u64) -> Ingredient {
    json!({"name": name, "amount": amount, "measurement": "cup"})
}

fn cookie_directions() -> Vec<String> {
    [
        "preheat oven to 375",
        "mix ingredients",
        "put dough on cookie sheet",
        "bake for 10 minutes",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn new_recipe(name: &str, ingredients: Option<Vec<Ingredient>>) -> CreateRecipe {
    CreateRecipe {
        name: name.to_string(),
        directions: cookie_directions(),
        ingredients,
    }
}

fn cookie_ingredients() -> Vec<Ingredient> {
    vec![
        ingredient("butter", 1),
        ingredient("sugar", 2),
        ingredient("flour", 4),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_round_trip(pool: PgPool) {
    let created = RecipeRepo::create(&pool, &new_recipe("cookies", Some(cookie_ingredients())))
        .await
        .unwrap();
    assert_eq!(created.name, "cookies");
    assert_eq!(created.directions, cookie_directions());
    assert_eq!(created.ingredients, cookie_ingredients());

    let found = RecipeRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("recipe should exist");
    assert_eq!(found, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_ingredients_read_as_empty(pool: PgPool) {
    let created = RecipeRepo::create(&pool, &new_recipe("toast", None))
        .await
        .unwrap();
    assert!(created.ingredients.is_empty());

    let stored: (Option<String>,) = sqlx::query_as("SELECT ingredients FROM recipes WHERE id = $1")
        .bind(created.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(stored.0.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_contains_every_recipe(pool: PgPool) {
    let mut ids = Vec::new();
    for name in ["cookies", "cake", "pie"] {
        let input = CreateRecipe {
            name: name.to_string(),
            directions: Vec::new(),
            ingredients: None,
        };
        ids.push(RecipeRepo::create(&pool, &input).await.unwrap().id);
    }

    let listed = RecipeRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 3);
    for id in ids {
        assert!(listed.iter().any(|r| r.id == id));
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_name_keeps_ingredients(pool: PgPool) {
    let created = RecipeRepo::create(&pool, &new_recipe("cookies", Some(cookie_ingredients())))
        .await
        .unwrap();

    let update = UpdateRecipe {
        name: Some("good cookies".to_string()),
        ..Default::default()
    };
    let updated = RecipeRepo::update(&pool, created.id, &update)
        .await
        .unwrap()
        .expect("recipe should exist");

    assert_eq!(updated.name, "good cookies");
    assert_eq!(updated.directions, cookie_directions());
    assert_eq!(updated.ingredients, cookie_ingredients());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_supplied_ingredients(pool: PgPool) {
    let created = RecipeRepo::create(&pool, &new_recipe("cookies", Some(cookie_ingredients())))
        .await
        .unwrap();

    let update = UpdateRecipe {
        ingredients: Some(vec![ingredient("oats", 3)]),
        ..Default::default()
    };
    let updated = RecipeRepo::update(&pool, created.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "cookies");
    assert_eq!(updated.ingredients, vec![ingredient("oats", 3)]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_returns_none(pool: PgPool) {
    let result = RecipeRepo::update(&pool, 999_999, &UpdateRecipe::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_returns_row_once(pool: PgPool) {
    let created = RecipeRepo::create(&pool, &new_recipe("cookies", Some(cookie_ingredients())))
        .await
        .unwrap();

    let deleted = RecipeRepo::delete(&pool, created.id).await.unwrap();
    assert_eq!(deleted, Some(created.clone()));

    assert!(RecipeRepo::delete(&pool, created.id).await.unwrap().is_none());
    assert!(RecipeRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_corrupt_ingredients_column_is_decode_error(pool: PgPool) {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO recipes (name, directions, ingredients) VALUES ('bad', '{}', 'not json') RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    let err = RecipeRepo::find_by_id(&pool, id).await.unwrap_err();
    assert!(matches!(err, sqlx::Error::ColumnDecode { .. }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_free_form_ingredients_are_stored_as_sent(pool: PgPool) {
    let entries = vec![
        json!({"name": "salt", "amount": "1/2", "measurement": "tsp"}),
        json!({"name": "egg", "amount": 2}),
    ];
    let created = RecipeRepo::create(&pool, &new_recipe("bread", Some(entries.clone())))
        .await
        .unwrap();
    assert_eq!(created.ingredients, entries);

    let fetched = RecipeRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.ingredients, entries);
}
