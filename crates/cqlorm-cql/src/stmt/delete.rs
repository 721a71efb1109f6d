use super::{key_filter, Binding, Statement, Value};

use cqlorm_core::{Result, TableSchema};

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,

    /// Equality predicates on the present key values
    pub filter: Vec<Binding>,
}

impl Statement {
    pub fn delete(schema: &TableSchema, values: Vec<Value>) -> Result<Statement> {
        Ok(Delete {
            table: schema.name.clone(),
            filter: key_filter(schema, values)?,
        }
        .into())
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
