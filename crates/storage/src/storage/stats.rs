use super::{Storage, get_conn};
use crate::{RecipeStats, StorageError};

impl Storage {
    /// Number of stored recipes.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn recipe_count(&self) -> Result<u64, StorageError> {
        let conn = get_conn(&self.pool)?;
        let count: i64 = conn.query_row("SELECT COUNT(RecipeID) FROM tblRecipes", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Get storage statistics.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_stats(&self) -> Result<RecipeStats, StorageError> {
        let conn = get_conn(&self.pool)?;
        let count = |table: &str| -> Result<u64, StorageError> {
            let n: i64 =
                conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
            Ok(n as u64)
        };
        Ok(RecipeStats {
            recipe_count: count("tblRecipes")?,
            ingredient_count: count("tblIngredients")?,
            measurement_count: count("tblMeasurements")?,
            step_count: count("tblRecipeSteps")?,
            recipe_ingredient_count: count("tblRecipeIngredients")?,
        })
    }
}
