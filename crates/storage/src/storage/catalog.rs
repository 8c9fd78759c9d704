use recipebox_core::NameCatalog;
use rusqlite::{Connection, OptionalExtension, params};

/// `tblIngredients` seen through the lookup-or-create interface.
pub(crate) struct IngredientTable<'c> {
    conn: &'c Connection,
}

impl<'c> IngredientTable<'c> {
    pub(crate) const fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl NameCatalog for IngredientTable<'_> {
    type Error = rusqlite::Error;

    fn find_id(&mut self, name: &str) -> Result<Option<i64>, Self::Error> {
        self.conn
            .query_row(
                "SELECT IngredientID FROM tblIngredients WHERE lower(IngredientName) = lower(?1)",
                params![name],
                |row| row.get(0),
            )
            .optional()
    }

    fn insert(&mut self, name: &str) -> Result<i64, Self::Error> {
        self.conn.execute("INSERT INTO tblIngredients (IngredientName) VALUES (?1)", params![name])?;
        Ok(self.conn.last_insert_rowid())
    }
}

/// `tblMeasurements` seen through the lookup-or-create interface.
///
/// Units created during import carry no abbreviation.
pub(crate) struct MeasurementTable<'c> {
    conn: &'c Connection,
}

impl<'c> MeasurementTable<'c> {
    pub(crate) const fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl NameCatalog for MeasurementTable<'_> {
    type Error = rusqlite::Error;

    fn find_id(&mut self, name: &str) -> Result<Option<i64>, Self::Error> {
        self.conn
            .query_row(
                "SELECT MeasurementID FROM tblMeasurements WHERE lower(Measurement) = lower(?1)",
                params![name],
                |row| row.get(0),
            )
            .optional()
    }

    fn insert(&mut self, name: &str) -> Result<i64, Self::Error> {
        self.conn.execute(
            "INSERT INTO tblMeasurements (Measurement, Abbreviation) VALUES (?1, NULL)",
            params![name],
        )?;
        Ok(self.conn.last_insert_rowid())
    }
}
