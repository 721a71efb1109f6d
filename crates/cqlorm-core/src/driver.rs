use crate::{
    stmt::{Dest, Value},
    Result,
};

/// A connection to the cluster.
///
/// Statements are CQL text with positional `?` placeholders; `params` holds
/// one value per placeholder in textual order.
pub trait Session: Send + Sync {
    /// Executes a statement that returns no rows.
    fn execute(&self, cql: &str, params: &[Value]) -> Result<()>;

    /// Runs a query and returns an iterator over its rows.
    fn query(&self, cql: &str, params: &[Value]) -> Box<dyn Rows + '_>;
}

/// A forward-only cursor over query results.
pub trait Rows {
    /// Writes the next row into `dest`, one destination per selected column.
    ///
    /// Returns `false` once the rows are exhausted or scanning failed. The
    /// failure, if any, is reported by [`Rows::close`].
    fn scan(&mut self, dest: &mut [Dest<'_>]) -> bool;

    /// Releases the cursor and reports the first error seen while iterating.
    ///
    /// Must be safe to call more than once.
    fn close(&mut self) -> Result<()>;
}

impl<S: Session + ?Sized> Session for &S {
    fn execute(&self, cql: &str, params: &[Value]) -> Result<()> {
        (**self).execute(cql, params)
    }

    fn query(&self, cql: &str, params: &[Value]) -> Box<dyn Rows + '_> {
        (**self).query(cql, params)
    }
}

impl<S: Session + ?Sized> Session for std::sync::Arc<S> {
    fn execute(&self, cql: &str, params: &[Value]) -> Result<()> {
        (**self).execute(cql, params)
    }

    fn query(&self, cql: &str, params: &[Value]) -> Box<dyn Rows + '_> {
        (**self).query(cql, params)
    }
}
