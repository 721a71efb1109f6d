extern crate self as cqlorm;

pub mod db;
pub use db::Db;

pub mod mock;

mod orm;
pub use orm::Orm;

mod table;
pub use table::{create_table, Table};

pub use cqlorm_core::{
    bail,
    driver::{Rows, Session},
    err,
    schema::{Record, Registry, TableSchema},
    stmt::{Dest, Type, Value},
    Error, Result,
};

pub use cqlorm_macros::Model;

#[doc(hidden)]
pub mod codegen_support {
    pub use cqlorm_core::{
        schema::{FieldDecl, Record},
        stmt::{FieldSlot, Primitive, Value},
    };
}
