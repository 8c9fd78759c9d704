//! Lookup-or-create over a table of unique names.
//!
//! Ingredients and measurements are both "a name with a surrogate id".
//! Storage implements [`NameCatalog`] for each table; [`lookup_or_create`]
//! is the single place the check-then-insert rule lives.

/// A table keyed by a unique, case-insensitive name.
pub trait NameCatalog {
    type Error;

    /// Id of the row whose name equals `name` ignoring case.
    fn find_id(&mut self, name: &str) -> Result<Option<i64>, Self::Error>;

    /// Insert a new row and return its generated id.
    fn insert(&mut self, name: &str) -> Result<i64, Self::Error>;
}

/// Resolve `name` to an id, inserting a row only when no case-insensitive
/// match exists.
///
/// # Errors
/// Propagates lookup or insert failures from the catalog.
pub fn lookup_or_create<C>(catalog: &mut C, name: &str) -> Result<i64, C::Error>
where
    C: NameCatalog + ?Sized,
{
    if let Some(id) = catalog.find_id(name)? {
        return Ok(id);
    }
    let id = catalog.insert(name)?;
    tracing::debug!(name, id, "created catalog entry");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryCatalog {
        rows: Vec<String>,
        inserts: usize,
    }

    impl NameCatalog for MemoryCatalog {
        type Error = std::convert::Infallible;

        fn find_id(&mut self, name: &str) -> Result<Option<i64>, Self::Error> {
            Ok(self
                .rows
                .iter()
                .position(|row| row.to_lowercase() == name.to_lowercase())
                .map(|idx| idx as i64 + 1))
        }

        fn insert(&mut self, name: &str) -> Result<i64, Self::Error> {
            self.rows.push(name.to_owned());
            self.inserts += 1;
            Ok(self.rows.len() as i64)
        }
    }

    struct FailingCatalog;

    impl NameCatalog for FailingCatalog {
        type Error = String;

        fn find_id(&mut self, _name: &str) -> Result<Option<i64>, Self::Error> {
            Ok(None)
        }

        fn insert(&mut self, name: &str) -> Result<i64, Self::Error> {
            Err(format!("cannot insert {name}"))
        }
    }

    #[test]
    fn reuses_existing_row_regardless_of_case() {
        let mut catalog = MemoryCatalog::default();
        let first = lookup_or_create(&mut catalog, "Flour").unwrap();
        let second = lookup_or_create(&mut catalog, "FLOUR").unwrap();
        let third = lookup_or_create(&mut catalog, "flour").unwrap();
        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(catalog.inserts, 1);
    }

    #[test]
    fn distinct_names_get_distinct_ids() {
        let mut catalog = MemoryCatalog::default();
        let flour = lookup_or_create(&mut catalog, "flour").unwrap();
        let sugar = lookup_or_create(&mut catalog, "sugar").unwrap();
        assert_ne!(flour, sugar);
        assert_eq!(catalog.inserts, 2);
    }

    #[test]
    fn insert_failure_propagates() {
        let err = lookup_or_create(&mut FailingCatalog, "salt").unwrap_err();
        assert_eq!(err, "cannot insert salt");
    }
}
