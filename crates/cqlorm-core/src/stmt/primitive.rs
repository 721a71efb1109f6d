use super::Value;
use crate::{Error, Result};

use jiff::{civil, tz::TimeZone, Timestamp};

/// A Rust type that can be stored in a single column.
///
/// `to_value` returns [`Value::Null`] only for an absent optional value. Any
/// other value, including zero and the empty string, is bound as is.
pub trait Primitive: Sized {
    const NULLABLE: bool = false;

    fn to_value(&self) -> Value;

    fn load(value: Value) -> Result<Self>;
}

macro_rules! impl_integer {
    ($($ty:ty => $variant:ident,)*) => {
        $(
            impl Primitive for $ty {
                fn to_value(&self) -> Value {
                    Value::$variant((*self).into())
                }

                fn load(value: Value) -> Result<Self> {
                    // Drivers may widen integers; narrow losslessly when in range.
                    match value.as_i64() {
                        Some(v) => Ok(<$ty>::try_from(v)?),
                        None => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }
            }
        )*
    };
}

impl_integer! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
}

impl Primitive for isize {
    fn to_value(&self) -> Value {
        Value::I64(*self as i64)
    }

    fn load(value: Value) -> Result<Self> {
        match value.as_i64() {
            Some(v) => Ok(isize::try_from(v)?),
            None => Err(Error::type_conversion(value, "isize")),
        }
    }
}

impl Primitive for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl Primitive for f32 {
    fn to_value(&self) -> Value {
        Value::F32(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F32(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "f32")),
        }
    }
}

impl Primitive for f64 {
    fn to_value(&self) -> Value {
        Value::F64(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::F32(v) => Ok(v.into()),
            _ => Err(Error::type_conversion(value, "f64")),
        }
    }
}

impl Primitive for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Text(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl Primitive for Timestamp {
    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Timestamp(v) => Ok(v),
            // `date` columns come back as midnight UTC
            Value::Date(date) => Ok(date
                .to_datetime(civil::Time::midnight())
                .to_zoned(TimeZone::UTC)?
                .timestamp()),
            _ => Err(Error::type_conversion(value, "Timestamp")),
        }
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const NULLABLE: bool = true;

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }
}

impl<T: Primitive> Primitive for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Primitive::to_value).collect())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            // Cassandra stores an empty list as null
            Value::Null => Ok(vec![]),
            Value::List(items) => items.into_iter().map(T::load).collect(),
            _ => Err(Error::type_conversion(value, "Vec")),
        }
    }
}
