pub mod driver;
pub use driver::Session;

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{Record, Registry, TableSchema};

pub mod stmt;

/// A Result type alias that uses cqlorm's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
