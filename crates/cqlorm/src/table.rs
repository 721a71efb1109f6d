use crate::{Orm, Record, Registry, Result, Rows, Session, TableSchema, Value};

use cqlorm_core::stmt::destinations;
use cqlorm_cql::{Serializer, Statement};

use std::{fmt, marker::PhantomData, sync::Arc};

/// Maps the record type `T` onto its table through a session.
pub struct Table<'a, T> {
    session: &'a dyn Session,
    schema: Arc<TableSchema>,
    serializer: Serializer,
    _p: PhantomData<fn() -> T>,
}

/// Creates the table for `T` if it does not exist yet, cataloguing `T` in
/// the process-wide registry.
pub fn create_table<T: Record>(session: &dyn Session) -> Result<()> {
    Table::<T>::new(session)?.create()
}

impl<'a, T: Record> Table<'a, T> {
    /// Catalogues `T` in the process-wide registry.
    pub fn new(session: &'a dyn Session) -> Result<Table<'a, T>> {
        Table::with_registry(session, Registry::global())
    }

    pub fn with_registry(session: &'a dyn Session, registry: &Registry) -> Result<Table<'a, T>> {
        let schema = registry.schema_for::<T>()?;
        Ok(Table::from_schema(session, schema, Serializer::new()))
    }

    pub(crate) fn from_schema(
        session: &'a dyn Session,
        schema: Arc<TableSchema>,
        serializer: Serializer,
    ) -> Table<'a, T> {
        Table {
            session,
            schema,
            serializer,
            _p: PhantomData,
        }
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Executes `CREATE TABLE IF NOT EXISTS` for the table.
    pub fn create(&self) -> Result<()> {
        self.exec(Statement::create_table(&self.schema))
    }

    fn serialize(&self, stmt: &Statement) -> (String, Vec<Value>) {
        serialize(&self.serializer, &self.schema, stmt)
    }

    fn exec(&self, stmt: Statement) -> Result<()> {
        exec(self.session, &self.serializer, &self.schema, &stmt)
    }

    fn scan(&self, rows: &mut dyn Rows) -> Vec<T> {
        let columns: Vec<&str> = self
            .schema
            .columns()
            .map(|field| field.column_name.as_str())
            .collect();

        let mut records = vec![];

        loop {
            let mut record = T::default();

            let more = {
                let mut dest = destinations(&self.schema, &columns, &mut record);
                rows.scan(&mut dest)
            };

            if !more {
                break;
            }

            records.push(record);
        }

        records
    }
}

fn serialize(
    serializer: &Serializer,
    schema: &TableSchema,
    stmt: &Statement,
) -> (String, Vec<Value>) {
    let mut params: Vec<Value> = vec![];
    let cql = serializer.serialize(stmt, &mut params);

    tracing::debug!(
        table = %schema.name,
        kind = stmt.kind(),
        params = params.len(),
        cql = %cql,
        "executing statement"
    );

    (cql, params)
}

/// Executes a statement that returns no rows against `schema`'s table.
pub(crate) fn exec(
    session: &dyn Session,
    serializer: &Serializer,
    schema: &TableSchema,
    stmt: &Statement,
) -> Result<()> {
    let (cql, params) = serialize(serializer, schema, stmt);

    session
        .execute(&cql, &params)
        .map_err(|err| err.context(format!("{} on `{}` failed", stmt.kind(), schema.name)))
}

impl<T: Record> Orm<T> for Table<'_, T> {
    fn insert(&self, record: &T) -> Result<()> {
        self.exec(Statement::insert(&self.schema, record.values())?)
    }

    fn select(&self, record: &T) -> Result<Vec<T>> {
        let stmt = Statement::select(&self.schema, record.values())?;
        let (cql, params) = self.serialize(&stmt);

        let mut cursor = Cursor {
            rows: self.session.query(&cql, &params),
            closed: false,
        };

        let records = self.scan(&mut *cursor.rows);

        cursor
            .close()
            .map_err(|err| err.context(format!("select on `{}` failed", self.schema.name)))?;

        tracing::debug!(table = %self.schema.name, rows = records.len(), "select complete");

        Ok(records)
    }

    fn update(&self, record: &T) -> Result<()> {
        self.exec(Statement::update(&self.schema, record.values())?)
    }

    fn delete(&self, record: &T) -> Result<()> {
        self.exec(Statement::delete(&self.schema, record.values())?)
    }
}

impl<T> fmt::Debug for Table<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("schema", &self.schema.name)
            .field("serializer", &self.serializer)
            .finish_non_exhaustive()
    }
}

/// Closes the row iterator on every exit path.
struct Cursor<'a> {
    rows: Box<dyn Rows + 'a>,
    closed: bool,
}

impl Cursor<'_> {
    fn close(&mut self) -> Result<()> {
        self.closed = true;
        self.rows.close()
    }
}

impl Drop for Cursor<'_> {
    fn drop(&mut self) {
        if !self.closed {
            let _ = self.rows.close();
        }
    }
}
