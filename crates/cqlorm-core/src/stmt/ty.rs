use super::Value;
use crate::{Error, Result};

use jiff::tz::TimeZone;
use std::fmt;

/// Logical column type of a record field.
///
/// Each variant corresponds to exactly one CQL type; `Display` renders the
/// CQL spelling used in `CREATE TABLE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// `boolean`
    Bool,

    /// `tinyint`
    I8,

    /// `smallint`
    I16,

    /// `int`
    I32,

    /// `bigint`
    I64,

    /// `float`
    F32,

    /// `double`
    F64,

    /// `text`
    Text,

    /// `timestamp`
    Timestamp,

    /// `date`
    Date,

    /// `list<T>`, a homogeneous sequence of scalar values
    List(Box<Type>),
}

impl Type {
    pub fn list(elem: Type) -> Type {
        Type::List(Box::new(elem))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Type::List(_))
    }

    /// Returns the element type of a list, or the type itself for scalars.
    pub fn element(&self) -> &Type {
        match self {
            Type::List(elem) => elem,
            ty => ty,
        }
    }

    /// Converts a value taken from a record field into the form bound for a
    /// column of this type.
    ///
    /// Timestamps headed for a `date` column are truncated to their UTC
    /// calendar date. Every other value passes through unchanged.
    pub fn cast(&self, value: Value) -> Result<Value> {
        match (self, value) {
            (Type::Date, Value::Timestamp(ts)) => {
                Ok(Value::Date(ts.to_zoned(TimeZone::UTC).date()))
            }
            (Type::List(elem), Value::List(items)) => Ok(Value::List(
                items
                    .into_iter()
                    .map(|item| elem.cast(item))
                    .collect::<Result<_>>()?,
            )),
            (_, value) if value.is_null() || self.accepts(&value) => Ok(value),
            (_, value) => Err(Error::type_conversion(value, self.name())),
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Type::Bool, Value::Bool(_))
                | (Type::I8, Value::I8(_))
                | (Type::I16, Value::I16(_))
                | (Type::I32, Value::I32(_))
                | (Type::I64, Value::I64(_))
                | (Type::F32, Value::F32(_))
                | (Type::F64, Value::F64(_))
                | (Type::Text, Value::Text(_))
                | (Type::Timestamp, Value::Timestamp(_))
                | (Type::Date, Value::Date(_))
                | (Type::List(_), Value::List(_))
        )
    }

    fn name(&self) -> &'static str {
        match self {
            Type::Bool => "boolean",
            Type::I8 => "tinyint",
            Type::I16 => "smallint",
            Type::I32 => "int",
            Type::I64 => "bigint",
            Type::F32 => "float",
            Type::F64 => "double",
            Type::Text => "text",
            Type::Timestamp => "timestamp",
            Type::Date => "date",
            Type::List(_) => "list",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::List(elem) => write!(f, "list<{elem}>"),
            ty => f.write_str(ty.name()),
        }
    }
}
