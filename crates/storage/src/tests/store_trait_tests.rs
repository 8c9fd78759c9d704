use std::sync::Arc;

use super::{create_test_recipe, create_test_storage};
use crate::RecipeStore;
use recipebox_core::InsertOutcome;

#[tokio::test]
async fn test_store_trait_delegates_to_sqlite() {
    let (storage, _temp_dir) = create_test_storage();
    let store: Arc<dyn RecipeStore> = Arc::new(storage);

    let outcome = store.insert_recipe(&create_test_recipe("Curry")).await.unwrap();
    let InsertOutcome::Inserted(id) = outcome else {
        panic!("expected insert, got {outcome:?}");
    };

    assert_eq!(store.find_recipe_id_by_title("CURRY").await.unwrap(), Some(id));
    assert_eq!(store.recipe_ids().await.unwrap(), vec![id]);
    assert_eq!(store.recipe_count().await.unwrap(), 1);
    assert_eq!(store.get_recipe(id).await.unwrap().unwrap().title, "Curry");
    assert_eq!(store.get_stats().await.unwrap().recipe_count, 1);
}
