//! Load a JSON recipe file into the database.

use anyhow::{Context, Result};
use recipebox_service::IngestService;
use recipebox_storage::Storage;
use std::path::Path;
use std::sync::Arc;

use crate::{ensure_db_dir, get_db_path};

pub(crate) async fn run(file: &Path) -> Result<()> {
    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    let storage = Storage::new(&db_path)?;

    let service = IngestService::new(Arc::new(storage));
    let report = service
        .ingest_file(file)
        .await
        .with_context(|| format!("import of {} aborted, no recipes added", file.display()))?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
