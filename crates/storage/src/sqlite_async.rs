//! Async trait implementation for SQLite `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use recipebox_core::{InsertOutcome, Recipe, RecipeInput};

use crate::traits::RecipeStore;
use crate::{RecipeStats, Storage, StorageError};

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Task(format!("spawn_blocking join error: {e}")))?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is annotated with a capture kind:
/// - `@ref arg`: `.clone()` a `&T`, pass as `&arg`
/// - `@str arg`: `.to_owned()` a `&str`, pass as `&arg`
/// - `@val arg`: move directly (Copy/owned types)
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture ref $arg:ident) => { let $arg = $arg.clone(); };
    (@capture str $arg:ident) => { let $arg = $arg.to_owned(); };
    (@capture val $arg:ident) => { };
    (@pass ref $arg:ident) => { &$arg };
    (@pass str $arg:ident) => { &$arg };
    (@pass val $arg:ident) => { $arg };
}

#[async_trait]
impl RecipeStore for Storage {
    async fn insert_recipe(&self, input: &RecipeInput) -> Result<InsertOutcome, StorageError> {
        delegate!(self, insert_recipe, @ref input)
    }
    async fn find_recipe_id_by_title(&self, title: &str) -> Result<Option<i64>, StorageError> {
        delegate!(self, find_recipe_id_by_title, @str title)
    }
    async fn recipe_ids(&self) -> Result<Vec<i64>, StorageError> {
        delegate!(self, recipe_ids)
    }
    async fn get_recipe(&self, id: i64) -> Result<Option<Recipe>, StorageError> {
        delegate!(self, get_recipe, @val id)
    }
    async fn recipe_count(&self) -> Result<u64, StorageError> {
        delegate!(self, recipe_count)
    }
    async fn get_stats(&self) -> Result<RecipeStats, StorageError> {
        delegate!(self, get_stats)
    }
}
