use recipebox_core::{
    IngredientLine, InsertOutcome, Measurement, NameCatalog as _, Quantity, Recipe, RecipeInput,
    RecipeStep, lookup_or_create,
};
use rusqlite::types::{Type, Value};
use rusqlite::{Connection, OptionalExtension, params};

use super::{IngredientTable, MeasurementTable, Storage, get_conn};
use crate::StorageError;

fn quantity_to_sql(quantity: &Quantity) -> Value {
    match quantity.clone().normalized() {
        Quantity::Number(n) => Value::Real(n),
        Quantity::Text(text) => Value::Text(text),
    }
}

fn quantity_from_row(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<Quantity> {
    match row.get::<_, Value>(idx)? {
        Value::Integer(n) => Ok(Quantity::Number(n as f64)),
        Value::Real(n) => Ok(Quantity::Number(n)),
        Value::Text(text) => Ok(Quantity::Text(text)),
        Value::Null => Ok(Quantity::default()),
        Value::Blob(_) => Err(rusqlite::Error::InvalidColumnType(idx, "Amount".to_owned(), Type::Blob)),
    }
}

fn find_recipe_id(conn: &Connection, title: &str) -> rusqlite::Result<Option<i64>> {
    conn.query_row(
        "SELECT RecipeID FROM tblRecipes WHERE lower(Title) = lower(?1)",
        params![title],
        |row| row.get(0),
    )
    .optional()
}

impl Storage {
    /// Store one recipe with its steps and ingredients in a single
    /// transaction. A title already present (ignoring case) is left alone.
    ///
    /// # Errors
    /// Returns `InvalidInput` for a blank title or an out-of-range amount.
    /// Returns error if any statement fails; nothing from this recipe is
    /// kept in that case.
    pub fn insert_recipe(&self, input: &RecipeInput) -> Result<InsertOutcome, StorageError> {
        input.validate()?;
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;

        if let Some(existing) = find_recipe_id(&tx, &input.title)? {
            return Ok(InsertOutcome::AlreadyExists(existing));
        }

        tx.execute(
            "INSERT INTO tblRecipes (Title, Image) VALUES (?1, ?2)",
            params![input.title, input.image()],
        )?;
        let recipe_id = tx.last_insert_rowid();

        {
            let mut stmt = tx.prepare(
                "INSERT INTO tblRecipeSteps (RecipeID, StepNumber, StepText) VALUES (?1, ?2, ?3)",
            )?;
            for (number, text) in &input.steps {
                stmt.execute(params![recipe_id, number, text])?;
            }
        }

        for item in &input.ingredients {
            let name = item.ingredient.trim();
            if name.is_empty() {
                tracing::warn!(recipe = %input.title, "Skipping ingredient with empty name");
                continue;
            }
            let ingredient_id = lookup_or_create(&mut IngredientTable::new(&tx), name)?;
            let measurement_id = match item.measure() {
                Some(unit) => Some(lookup_or_create(&mut MeasurementTable::new(&tx), unit)?),
                None => None,
            };
            tx.execute(
                "INSERT INTO tblRecipeIngredients (RecipeID, Amount, MeasurementID, IngredientID)
                 VALUES (?1, ?2, ?3, ?4)",
                params![recipe_id, quantity_to_sql(&item.quantity), measurement_id, ingredient_id],
            )?;
        }

        tx.commit()?;
        Ok(InsertOutcome::Inserted(recipe_id))
    }

    /// Id of the recipe whose title matches ignoring case.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn find_recipe_id_by_title(&self, title: &str) -> Result<Option<i64>, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(find_recipe_id(&conn, title)?)
    }

    /// # Errors
    /// Returns error if database query fails.
    pub fn find_ingredient_id(&self, name: &str) -> Result<Option<i64>, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(IngredientTable::new(&conn).find_id(name)?)
    }

    /// # Errors
    /// Returns error if database query fails.
    pub fn find_measurement_id(&self, name: &str) -> Result<Option<i64>, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(MeasurementTable::new(&conn).find_id(name)?)
    }

    /// Add a unit with an abbreviation, or return the id of the existing
    /// unit with that name.
    ///
    /// # Errors
    /// Returns error if database insert fails (e.g. abbreviation taken).
    pub fn add_measurement(
        &self,
        name: &str,
        abbreviation: Option<&str>,
    ) -> Result<i64, StorageError> {
        let conn = get_conn(&self.pool)?;
        if let Some(id) = MeasurementTable::new(&conn).find_id(name)? {
            return Ok(id);
        }
        conn.execute(
            "INSERT INTO tblMeasurements (Measurement, Abbreviation) VALUES (?1, ?2)",
            params![name, abbreviation],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Ids of all stored recipes, ascending.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn recipe_ids(&self) -> Result<Vec<i64>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare("SELECT RecipeID FROM tblRecipes ORDER BY RecipeID")?;
        let ids = stmt.query_map([], |row| row.get(0))?.collect::<rusqlite::Result<Vec<i64>>>()?;
        Ok(ids)
    }

    /// Load a recipe with steps ordered by number and ingredients in
    /// insertion order.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_recipe(&self, id: i64) -> Result<Option<Recipe>, StorageError> {
        let conn = get_conn(&self.pool)?;

        let header: Option<(String, Option<String>)> = conn
            .query_row(
                "SELECT Title, Image FROM tblRecipes WHERE RecipeID = ?1",
                params![id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        let Some((title, image)) = header else {
            return Ok(None);
        };

        let mut stmt = conn.prepare(
            "SELECT StepNumber, StepText FROM tblRecipeSteps
             WHERE RecipeID = ?1 ORDER BY StepNumber, id",
        )?;
        let steps = stmt
            .query_map(params![id], |row| Ok(RecipeStep { number: row.get(0)?, text: row.get(1)? }))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt = conn.prepare(
            "SELECT ri.Amount, m.Measurement, m.Abbreviation, i.IngredientName
             FROM tblRecipeIngredients ri
             JOIN tblIngredients i ON i.IngredientID = ri.IngredientID
             LEFT JOIN tblMeasurements m ON m.MeasurementID = ri.MeasurementID
             WHERE ri.RecipeID = ?1
             ORDER BY ri.id",
        )?;
        let ingredients = stmt
            .query_map(params![id], |row| {
                let measurement = row
                    .get::<_, Option<String>>(1)?
                    .map(|name| Ok::<_, rusqlite::Error>(Measurement { name, abbreviation: row.get(2)? }))
                    .transpose()?;
                Ok(IngredientLine {
                    quantity: quantity_from_row(row, 0)?,
                    measurement,
                    ingredient: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(Some(Recipe { id, title, image: image.filter(|s| !s.is_empty()), steps, ingredients }))
    }
}
