use std::sync::Arc;

use rand::SeedableRng as _;
use rand::rngs::StdRng;
use rand::seq::SliceRandom as _;
use rand::Rng;
use recipebox_core::RecipeCard;
use recipebox_storage::{RecipeStats, RecipeStore, StorageError};

use crate::ServiceError;

/// Pick one id uniformly from the ids that actually exist.
pub fn pick_random_id<R: Rng + ?Sized>(ids: &[i64], rng: &mut R) -> Option<i64> {
    ids.choose(rng).copied()
}

/// Read-only recipe queries for the website.
pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
}

impl RecipeService {
    #[must_use]
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    /// A uniformly chosen stored recipe, ready for the template.
    pub async fn random_recipe(&self) -> Result<RecipeCard, ServiceError> {
        let mut rng = StdRng::from_entropy();
        self.random_recipe_with(&mut rng).await
    }

    /// Same as [`Self::random_recipe`] with a caller-supplied random source.
    pub async fn random_recipe_with<R>(&self, rng: &mut R) -> Result<RecipeCard, ServiceError>
    where
        R: Rng + Send,
    {
        let ids = self.store.recipe_ids().await?;
        let id = pick_random_id(&ids, rng).ok_or(ServiceError::NoRecipes)?;
        let recipe = self.store.get_recipe(id).await?.ok_or_else(|| {
            StorageError::NotFound { entity: "recipe", id: id.to_string() }
        })?;
        tracing::debug!(id, title = %recipe.title, "Serving random recipe");
        Ok(RecipeCard::from(recipe))
    }

    pub async fn recipe_card(&self, id: i64) -> Result<Option<RecipeCard>, ServiceError> {
        Ok(self.store.get_recipe(id).await?.map(RecipeCard::from))
    }

    pub async fn stats(&self) -> Result<RecipeStats, ServiceError> {
        Ok(self.store.get_stats().await?)
    }
}
