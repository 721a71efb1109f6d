use super::{mapped, Binding, Statement, Value};

use cqlorm_core::{Result, TableSchema};

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,

    /// One binding per inserted column. Absent optional values are left
    /// out entirely.
    pub values: Vec<Binding>,
}

impl Statement {
    pub fn insert(schema: &TableSchema, values: Vec<Value>) -> Result<Statement> {
        let mut bindings = vec![];

        for (field, value) in mapped(schema, values)? {
            bindings.extend(Binding::present(field, value)?);
        }

        Ok(Insert {
            table: schema.name.clone(),
            values: bindings,
        }
        .into())
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
