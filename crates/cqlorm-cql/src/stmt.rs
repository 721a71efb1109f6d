mod binding;
pub use binding::Binding;

mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

pub use cqlorm_core::stmt::{Type, Value};

use cqlorm_core::{err, schema::FieldDescriptor, Result, TableSchema};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateTable(CreateTable),
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// Name of the table the statement targets.
    pub fn table(&self) -> &str {
        match self {
            Statement::CreateTable(stmt) => &stmt.name,
            Statement::Delete(stmt) => &stmt.table,
            Statement::Insert(stmt) => &stmt.table,
            Statement::Select(stmt) => &stmt.table,
            Statement::Update(stmt) => &stmt.table,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Statement::CreateTable(_) => "create_table",
            Statement::Delete(_) => "delete",
            Statement::Insert(_) => "insert",
            Statement::Select(_) => "select",
            Statement::Update(_) => "update",
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, Statement::Select(_))
    }

    /// Number of values the statement binds.
    pub fn param_count(&self) -> usize {
        match self {
            Statement::CreateTable(_) => 0,
            Statement::Delete(stmt) => stmt.filter.len(),
            Statement::Insert(stmt) => stmt.values.len(),
            Statement::Select(stmt) => stmt.filter.len(),
            Statement::Update(stmt) => stmt.assignments.len() + stmt.filter.len(),
        }
    }
}

/// Pairs every mapped field with its value, dropping ignored fields.
///
/// `values` is a record's values in declaration order.
fn mapped<'a>(
    schema: &'a TableSchema,
    values: Vec<Value>,
) -> Result<impl Iterator<Item = (&'a FieldDescriptor, Value)>> {
    if values.len() != schema.fields.len() {
        return Err(err!(
            "record `{}` produced {} values for {} fields",
            schema.name,
            values.len(),
            schema.fields.len()
        ));
    }

    Ok(schema
        .fields
        .iter()
        .zip(values)
        .filter(|(field, _)| !field.is_ignored()))
}

/// Bindings for every present key value, in declaration order.
fn key_filter(schema: &TableSchema, values: Vec<Value>) -> Result<Vec<Binding>> {
    let mut filter = vec![];

    for (field, value) in mapped(schema, values)? {
        if field.is_key() {
            filter.extend(Binding::present(field, value)?);
        }
    }

    Ok(filter)
}
