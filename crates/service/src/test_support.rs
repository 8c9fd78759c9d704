//! Shared fixtures for service tests.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use recipebox_core::{InsertOutcome, Recipe, RecipeInput, RecipeStep};
use recipebox_storage::{RecipeStats, RecipeStore, Storage, StorageError};
use tempfile::TempDir;

pub fn create_test_store() -> (Arc<dyn RecipeStore>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let storage = Storage::new(&temp_dir.path().join("test.db")).unwrap();
    (Arc::new(storage), temp_dir)
}

/// In-memory store with caller-chosen ids, for selection tests with gaps.
#[derive(Default)]
pub struct MemoryStore {
    recipes: Mutex<BTreeMap<i64, Recipe>>,
}

impl MemoryStore {
    pub fn with_ids(ids: &[i64]) -> Self {
        let recipes = ids
            .iter()
            .map(|&id| {
                let recipe = Recipe {
                    id,
                    title: format!("Recipe {id}"),
                    image: None,
                    steps: vec![RecipeStep { number: 1, text: "Cook.".to_owned() }],
                    ingredients: Vec::new(),
                };
                (id, recipe)
            })
            .collect();
        Self { recipes: Mutex::new(recipes) }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<i64, Recipe>> {
        self.recipes.lock().unwrap()
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn insert_recipe(&self, input: &RecipeInput) -> Result<InsertOutcome, StorageError> {
        let mut recipes = self.lock();
        if let Some(existing) =
            recipes.values().find(|r| r.title.eq_ignore_ascii_case(&input.title))
        {
            return Ok(InsertOutcome::AlreadyExists(existing.id));
        }
        let id = recipes.keys().next_back().copied().unwrap_or(0) + 1;
        let recipe = Recipe {
            id,
            title: input.title.clone(),
            image: input.image.clone(),
            steps: input
                .steps
                .iter()
                .map(|(&number, text)| RecipeStep { number, text: text.clone() })
                .collect(),
            ingredients: Vec::new(),
        };
        recipes.insert(id, recipe);
        Ok(InsertOutcome::Inserted(id))
    }

    async fn find_recipe_id_by_title(&self, title: &str) -> Result<Option<i64>, StorageError> {
        Ok(self.lock().values().find(|r| r.title.eq_ignore_ascii_case(title)).map(|r| r.id))
    }

    async fn recipe_ids(&self) -> Result<Vec<i64>, StorageError> {
        Ok(self.lock().keys().copied().collect())
    }

    async fn get_recipe(&self, id: i64) -> Result<Option<Recipe>, StorageError> {
        Ok(self.lock().get(&id).cloned())
    }

    async fn recipe_count(&self) -> Result<u64, StorageError> {
        Ok(self.lock().len() as u64)
    }

    async fn get_stats(&self) -> Result<RecipeStats, StorageError> {
        Ok(RecipeStats { recipe_count: self.lock().len() as u64, ..RecipeStats::default() })
    }
}
