//! Storage backend trait abstraction
//!
//! Async view of the recipe tables, so services and handlers can hold an
//! `Arc<dyn RecipeStore>` and tests can substitute an in-memory store.

use async_trait::async_trait;
use recipebox_core::{InsertOutcome, Recipe, RecipeInput};

use crate::{RecipeStats, StorageError};

#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Store a recipe unless its title already exists (ignoring case).
    async fn insert_recipe(&self, input: &RecipeInput) -> Result<InsertOutcome, StorageError>;

    /// Case-insensitive title lookup.
    async fn find_recipe_id_by_title(&self, title: &str) -> Result<Option<i64>, StorageError>;

    /// Ids of all stored recipes.
    async fn recipe_ids(&self) -> Result<Vec<i64>, StorageError>;

    /// Full recipe by id.
    async fn get_recipe(&self, id: i64) -> Result<Option<Recipe>, StorageError>;

    async fn recipe_count(&self) -> Result<u64, StorageError>;

    async fn get_stats(&self) -> Result<RecipeStats, StorageError>;
}
