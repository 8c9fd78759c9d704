use anyhow::Result;
use recipebox_service::{RecipeService, ServiceError};
use recipebox_storage::Storage;
use std::sync::Arc;

use crate::get_db_path;

fn open_service() -> Result<RecipeService> {
    let storage = Storage::open_read_only(&get_db_path())?;
    Ok(RecipeService::new(Arc::new(storage)))
}

pub(crate) async fn run_random() -> Result<()> {
    match open_service()?.random_recipe().await {
        Ok(card) => println!("{}", serde_json::to_string_pretty(&card)?),
        Err(ServiceError::NoRecipes) => println!("No recipes available"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

pub(crate) async fn run_stats() -> Result<()> {
    let stats = open_service()?.stats().await?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
