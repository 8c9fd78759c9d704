//! Core types and helpers for recipebox
//!
//! Domain types shared by the storage, service, HTTP and CLI crates.

mod catalog;
mod env_config;
mod error;
mod ingest;
mod quantity;
mod recipe;

pub use catalog::*;
pub use env_config::*;
pub use error::*;
pub use ingest::*;
pub use quantity::*;
pub use recipe::*;
