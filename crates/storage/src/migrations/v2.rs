//! Migration v2: indexes backing `lower(...) = lower(?)` lookups and per-recipe reads

pub(super) const SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_recipes_title_lower ON tblRecipes(lower(Title));
CREATE INDEX IF NOT EXISTS idx_ingredients_name_lower ON tblIngredients(lower(IngredientName));
CREATE INDEX IF NOT EXISTS idx_measurements_name_lower ON tblMeasurements(lower(Measurement));
CREATE INDEX IF NOT EXISTS idx_recipe_steps_recipe ON tblRecipeSteps(RecipeID, StepNumber);
CREATE INDEX IF NOT EXISTS idx_recipe_ingredients_recipe ON tblRecipeIngredients(RecipeID);
";
