use super::{mapped, Binding, Statement, Value};

use cqlorm_core::{Result, TableSchema};

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,

    /// `SET` assignments for present non-key values
    pub assignments: Vec<Binding>,

    /// Equality predicates on the present key values
    pub filter: Vec<Binding>,
}

impl Statement {
    pub fn update(schema: &TableSchema, values: Vec<Value>) -> Result<Statement> {
        let mut assignments = vec![];
        let mut filter = vec![];

        for (field, value) in mapped(schema, values)? {
            let Some(binding) = Binding::present(field, value)? else {
                continue;
            };

            if field.is_key() {
                filter.push(binding);
            } else {
                assignments.push(binding);
            }
        }

        Ok(Update {
            table: schema.name.clone(),
            assignments,
            filter,
        }
        .into())
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
