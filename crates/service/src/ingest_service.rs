use std::path::Path;
use std::sync::Arc;

use recipebox_core::{IngestReport, InsertOutcome, RecipeInput};
use recipebox_storage::RecipeStore;
use serde_json::Value;

use crate::ServiceError;

/// Loads recipe files into storage, one transaction per recipe.
pub struct IngestService {
    store: Arc<dyn RecipeStore>,
}

impl IngestService {
    #[must_use]
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    /// Import every recipe in a JSON file.
    ///
    /// An unreadable file or malformed JSON aborts before anything is
    /// written. Individual bad records are counted as failed and skipped.
    pub async fn ingest_file(&self, path: &Path) -> Result<IngestReport, ServiceError> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ServiceError::Io { path: path.to_path_buf(), source })?;
        tracing::info!(path = %path.display(), "Reading recipes");
        self.ingest_json(&json).await
    }

    /// Import a JSON array of recipe objects.
    pub async fn ingest_json(&self, json: &str) -> Result<IngestReport, ServiceError> {
        let Value::Array(items) = serde_json::from_str::<Value>(json)? else {
            return Err(ServiceError::InvalidInput(
                "expected a JSON array of recipes".to_owned(),
            ));
        };

        let mut report = IngestReport { processed: items.len(), ..IngestReport::default() };
        for (index, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<RecipeInput>(item) {
                Ok(recipe) => self.ingest_one(&recipe, &mut report).await,
                Err(e) => {
                    tracing::warn!(index, "Skipping malformed recipe: {e}");
                    report.failed += 1;
                },
            }
        }

        tracing::info!(
            processed = report.processed,
            inserted = report.inserted,
            skipped = report.skipped,
            failed = report.failed,
            "Import finished"
        );
        Ok(report)
    }

    /// Import already-decoded recipes.
    pub async fn ingest_records(&self, recipes: &[RecipeInput]) -> IngestReport {
        let mut report = IngestReport { processed: recipes.len(), ..IngestReport::default() };
        for recipe in recipes {
            self.ingest_one(recipe, &mut report).await;
        }
        report
    }

    async fn ingest_one(&self, recipe: &RecipeInput, report: &mut IngestReport) {
        tracing::info!("Processing: {}", recipe.title);
        match self.store.insert_recipe(recipe).await {
            Ok(outcome) => {
                if let InsertOutcome::AlreadyExists(id) = outcome {
                    tracing::debug!(id, title = %recipe.title, "Recipe already stored");
                }
                report.record(outcome);
            },
            Err(e) => {
                tracing::warn!(title = %recipe.title, "Failed to add recipe: {e}");
                report.failed += 1;
            },
        }
    }
}
