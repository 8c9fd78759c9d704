use super::{create_test_recipe, create_test_storage};
use crate::{SCHEMA_VERSION, Storage, StorageError};
use recipebox_core::{IngredientInput, Quantity, RecipeInput};
use tempfile::TempDir;

#[test]
fn test_read_only_sees_imported_recipes() {
    let (storage, temp_dir) = create_test_storage();
    storage.insert_recipe(&create_test_recipe("Chili")).unwrap();
    drop(storage);

    let reader = Storage::open_read_only(&temp_dir.path().join("test.db")).unwrap();
    assert_eq!(reader.recipe_count().unwrap(), 1);
}

#[test]
fn test_read_only_rejects_writes() {
    let (storage, temp_dir) = create_test_storage();
    drop(storage);

    let reader = Storage::open_read_only(&temp_dir.path().join("test.db")).unwrap();
    let err = reader.insert_recipe(&create_test_recipe("Chili")).unwrap_err();
    assert!(matches!(err, StorageError::Database(_)), "unexpected error: {err}");
}

#[test]
fn test_read_only_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = Storage::open_read_only(&temp_dir.path().join("absent.db")).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_read_only_requires_current_schema() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.db");
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute_batch("CREATE TABLE unrelated (x INTEGER);").unwrap();
    drop(conn);

    let err = Storage::open_read_only(&path).unwrap_err();
    assert!(matches!(err, StorageError::Migration(_)), "unexpected error: {err}");
}

#[test]
fn test_reopening_keeps_schema_version() {
    let (storage, temp_dir) = create_test_storage();
    drop(storage);
    let reopened = Storage::new(&temp_dir.path().join("test.db")).unwrap();
    let conn = reopened.pool.get().unwrap();
    let version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0)).unwrap();
    assert_eq!(version, SCHEMA_VERSION);
}

#[test]
fn test_failed_insert_leaves_no_rows() {
    let (storage, _temp_dir) = create_test_storage();
    storage.add_measurement("teaspoon", Some("tsp")).unwrap();
    {
        let conn = storage.pool.get().unwrap();
        conn.execute_batch(
            "CREATE TRIGGER reject_nutmeg BEFORE INSERT ON tblIngredients
             WHEN NEW.IngredientName = 'nutmeg'
             BEGIN SELECT RAISE(ABORT, 'nutmeg rejected'); END;",
        )
        .unwrap();
    }

    let input = RecipeInput {
        title: "Eggnog".to_owned(),
        image: None,
        steps: [(1, "Whisk.".to_owned())].into_iter().collect(),
        ingredients: vec![
            IngredientInput {
                ingredient: "milk".to_owned(),
                quantity: Quantity::Number(2.0),
                measure: Some("cup".to_owned()),
            },
            IngredientInput {
                ingredient: "nutmeg".to_owned(),
                quantity: Quantity::Number(1.0),
                measure: Some("tsp".to_owned()),
            },
        ],
    };

    assert!(storage.insert_recipe(&input).is_err());

    let stats = storage.get_stats().unwrap();
    assert_eq!(stats.recipe_count, 0);
    assert_eq!(stats.step_count, 0);
    assert_eq!(stats.ingredient_count, 0);
    assert_eq!(stats.recipe_ingredient_count, 0);
    assert_eq!(stats.measurement_count, 1);
}
