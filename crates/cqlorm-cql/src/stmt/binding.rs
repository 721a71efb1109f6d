use super::Value;

use cqlorm_core::{schema::FieldDescriptor, Result};

/// A column paired with the value bound to it, used for `INSERT` values,
/// `SET` assignments and `WHERE` equality predicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub column: String,
    pub value: Value,
}

impl Binding {
    pub fn new(column: impl Into<String>, value: impl Into<Value>) -> Binding {
        Binding {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Binds `value` to the field's column, cast to the column type.
    ///
    /// Returns `None` when the value is absent.
    pub fn present(field: &FieldDescriptor, value: Value) -> Result<Option<Binding>> {
        if value.is_null() {
            return Ok(None);
        }

        let value = match &field.ty {
            Some(ty) => ty
                .cast(value)
                .map_err(|err| err.context(format!("column `{}`", field.column_name)))?,
            None => value,
        };

        Ok(Some(Binding::new(field.column_name.clone(), value)))
    }
}
