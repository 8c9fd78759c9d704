//! Test utilities and module declarations for storage tests.

use crate::Storage;
use recipebox_core::{IngredientInput, Quantity, RecipeInput};
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

pub fn ingredient(name: &str, quantity: impl Into<Quantity>, measure: Option<&str>) -> IngredientInput {
    IngredientInput {
        ingredient: name.to_owned(),
        quantity: quantity.into(),
        measure: measure.map(ToOwned::to_owned),
    }
}

pub fn create_test_recipe(title: &str) -> RecipeInput {
    RecipeInput {
        title: title.to_owned(),
        image: Some(format!("{}.jpg", title.to_lowercase().replace(' ', "-"))),
        steps: [(1, "Preheat the oven.".to_owned()), (2, "Mix everything.".to_owned())]
            .into_iter()
            .collect(),
        ingredients: vec![
            ingredient("Flour", 2.0, Some("cup")),
            ingredient("Eggs", 3.0, None),
            ingredient("Salt", "a pinch", Some("none")),
        ],
    }
}

mod read_only_tests;
mod store_trait_tests;
