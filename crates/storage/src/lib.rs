//! Storage layer for recipebox
//!
//! SQLite storage behind an r2d2 connection pool. Sync methods live on
//! [`Storage`]; [`RecipeStore`] exposes them to async callers.

mod error;
mod migrations;
mod sqlite_async;
mod storage;
#[cfg(test)]
mod tests;
pub mod traits;
mod types;

pub use error::StorageError;
pub use migrations::SCHEMA_VERSION;
pub use storage::Storage;
pub use traits::RecipeStore;
pub use types::RecipeStats;
