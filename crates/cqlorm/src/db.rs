mod builder;
pub use builder::Builder;

use crate::{table, Record, Registry, Result, Session, Table, TableSchema};

use cqlorm_cql::{Serializer, Statement};

use std::sync::Arc;

/// A session together with the record types registered for it.
pub struct Db<'a> {
    session: &'a dyn Session,

    registry: &'a Registry,

    /// Schemas of the registered record types, in registration order
    tables: Vec<Arc<TableSchema>>,

    serializer: Serializer,
}

impl<'a> Db<'a> {
    pub fn builder() -> Builder<'a> {
        Builder::default()
    }

    /// Returns the table of a catalogued record type.
    pub fn table<T: Record>(&self) -> Result<Table<'a, T>> {
        let schema = self.registry.get::<T>()?;
        Ok(Table::from_schema(
            self.session,
            schema,
            self.serializer.clone(),
        ))
    }

    /// Creates every registered table that does not exist yet, in
    /// registration order. Stops at the first failure.
    pub fn create_tables(&self) -> Result<()> {
        for schema in &self.tables {
            let stmt = Statement::create_table(schema);
            table::exec(self.session, &self.serializer, schema, &stmt)?;
        }

        Ok(())
    }

    pub fn schemas(&self) -> impl ExactSizeIterator<Item = &TableSchema> + '_ {
        self.tables.iter().map(|schema| &**schema)
    }

    pub fn registry(&self) -> &Registry {
        self.registry
    }
}

impl std::fmt::Debug for Db<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("tables", &self.tables.iter().map(|t| &t.name).collect::<Vec<_>>())
            .field("serializer", &self.serializer)
            .finish_non_exhaustive()
    }
}
