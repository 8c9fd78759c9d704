//! Migration v1: recipe tables

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS tblRecipes (
    RecipeID INTEGER PRIMARY KEY,
    Title TEXT NOT NULL,
    Image TEXT
);

CREATE TABLE IF NOT EXISTS tblIngredients (
    IngredientID INTEGER PRIMARY KEY,
    IngredientName TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS tblMeasurements (
    MeasurementID INTEGER PRIMARY KEY,
    Measurement TEXT NOT NULL UNIQUE,
    Abbreviation TEXT UNIQUE
);

CREATE TABLE IF NOT EXISTS tblRecipeIngredients (
    id INTEGER PRIMARY KEY,
    RecipeID INTEGER NOT NULL REFERENCES tblRecipes(RecipeID),
    Amount NUMERIC NOT NULL,
    MeasurementID INTEGER REFERENCES tblMeasurements(MeasurementID),
    IngredientID INTEGER NOT NULL REFERENCES tblIngredients(IngredientID)
);

CREATE TABLE IF NOT EXISTS tblRecipeSteps (
    id INTEGER PRIMARY KEY,
    RecipeID INTEGER NOT NULL REFERENCES tblRecipes(RecipeID),
    StepNumber INTEGER NOT NULL,
    StepText TEXT NOT NULL
);
";
