use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised while validating recipe data.
#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, RecipeError>;
