#[macro_use]
mod fmt;
use fmt::ToCql;

mod delim;
use delim::{Comma, Delimited, Period};

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod binding;
mod column_def;
mod create_table;
mod statement;
mod table_name;
use table_name::TableName;

use crate::stmt::Statement;

/// Serializes statements to CQL text.
///
/// Values are never inlined; each one is pushed to [`Params`] as its `?`
/// placeholder is written, so parameters are collected in textual order.
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    /// Keyspace used to qualify table names. Unqualified names resolve
    /// against the session's keyspace.
    keyspace: Option<String>,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized CQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer::default()
    }

    pub fn with_keyspace(keyspace: impl Into<String>) -> Serializer {
        Serializer {
            keyspace: Some(keyspace.into()),
        }
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_cql(&mut fmt);

        ret.push(';');
        ret
    }

    fn table_name<'a>(&'a self, name: &'a str) -> TableName<'a> {
        TableName {
            keyspace: self.keyspace.as_deref(),
            name,
        }
    }
}
