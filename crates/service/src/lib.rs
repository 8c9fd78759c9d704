//! Service layer for recipebox
//!
//! Business logic between the HTTP/CLI front ends and storage.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod ingest_service;
mod recipe_service;
#[cfg(test)]
mod test_support;

pub use error::ServiceError;
pub use ingest_service::IngestService;
pub use recipe_service::{RecipeService, pick_random_id};
