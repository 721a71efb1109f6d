use super::{key_filter, Binding, Statement, Value};

use cqlorm_core::{Result, TableSchema};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,

    /// Selected columns, every mapped field in declaration order
    pub columns: Vec<String>,

    /// Equality predicates on the present key values
    pub filter: Vec<Binding>,
}

impl Statement {
    pub fn select(schema: &TableSchema, values: Vec<Value>) -> Result<Statement> {
        Ok(Select {
            table: schema.name.clone(),
            columns: schema
                .columns()
                .map(|field| field.column_name.clone())
                .collect(),
            filter: key_filter(schema, values)?,
        }
        .into())
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
