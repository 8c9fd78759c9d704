use serde::{Deserialize, Serialize};

/// Row counts per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeStats {
    pub recipe_count: u64,
    pub ingredient_count: u64,
    pub measurement_count: u64,
    pub step_count: u64,
    pub recipe_ingredient_count: u64,
}
