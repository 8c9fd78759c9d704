use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Quantity, RecipeError};

/// Recipe record as it appears in an import file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeInput {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Step number to instruction text. JSON object keys are the step numbers.
    #[serde(default)]
    pub steps: BTreeMap<u32, String>,
    #[serde(default)]
    pub ingredients: Vec<IngredientInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientInput {
    pub ingredient: String,
    pub quantity: Quantity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measure: Option<String>,
}

impl RecipeInput {
    /// Reject records that cannot be stored.
    ///
    /// # Errors
    /// Returns `RecipeError::InvalidInput` when the title is blank or an
    /// amount is out of range for the database.
    pub fn validate(&self) -> crate::Result<()> {
        if self.title.trim().is_empty() {
            return Err(RecipeError::InvalidInput("recipe title is empty".to_owned()));
        }
        if let Some(item) = self.ingredients.iter().find(|i| !i.quantity.fits_numeric_column()) {
            return Err(RecipeError::InvalidInput(format!(
                "quantity '{}' of {} is out of range",
                item.quantity, item.ingredient
            )));
        }
        Ok(())
    }

    /// Image reference, treating an empty string as absent.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|s| !s.is_empty())
    }
}

impl IngredientInput {
    /// Unit name, treating an empty string as absent.
    pub fn measure(&self) -> Option<&str> {
        self.measure.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Unit of quantity, e.g. "cup" abbreviated "c".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    pub name: String,
    pub abbreviation: Option<String>,
}

impl Measurement {
    /// Whether the unit should be printed. Imports use a literal "none"
    /// unit for countable ingredients ("2 eggs").
    pub fn is_meaningful(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.name.eq_ignore_ascii_case("none")
            && self.abbreviation.as_deref() != Some("None")
    }
}

/// One ingredient of a stored recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub quantity: Quantity,
    pub measurement: Option<Measurement>,
    pub ingredient: String,
}

/// Renders `"quantity unit name"`; empty parts (a blank quantity, a hidden
/// unit) are left out along with their separator.
impl fmt::Display for IngredientLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quantity = self.quantity.to_string();
        let unit = self
            .measurement
            .as_ref()
            .filter(|m| m.is_meaningful())
            .map_or("", |m| m.name.as_str());
        let parts = [quantity.trim(), unit, self.ingredient.as_str()];
        f.write_str(&parts.iter().filter(|p| !p.is_empty()).copied().collect::<Vec<_>>().join(" "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeStep {
    pub number: u32,
    pub text: String,
}

impl fmt::Display for RecipeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2}. {}", self.number, self.text)
    }
}

/// A stored recipe with its steps (ascending by number) and ingredients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    pub steps: Vec<RecipeStep>,
    pub ingredients: Vec<IngredientLine>,
}

/// Flat view of a recipe handed to the page template and the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCard {
    pub title: String,
    pub image: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl From<&Recipe> for RecipeCard {
    fn from(recipe: &Recipe) -> Self {
        let mut steps: Vec<&RecipeStep> = recipe.steps.iter().collect();
        steps.sort_by_key(|s| s.number);
        Self {
            title: recipe.title.clone(),
            image: recipe.image.clone().unwrap_or_default(),
            ingredients: recipe.ingredients.iter().map(ToString::to_string).collect(),
            steps: steps.into_iter().map(ToString::to_string).collect(),
        }
    }
}

impl From<Recipe> for RecipeCard {
    fn from(recipe: Recipe) -> Self {
        Self::from(&recipe)
    }
}
