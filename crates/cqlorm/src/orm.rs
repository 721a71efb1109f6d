use crate::Result;

/// The operations available on one record type.
///
/// Implemented by [`Table`](crate::Table) against a live session and by
/// [`MockTable`](crate::mock::MockTable) for tests, so application code can
/// be written against either.
pub trait Orm<T> {
    /// Writes every present field of `record`.
    fn insert(&self, record: &T) -> Result<()>;

    /// Returns the rows whose keys equal the present key fields of `record`.
    fn select(&self, record: &T) -> Result<Vec<T>>;

    /// Overwrites the present non-key fields of the row addressed by the key
    /// fields of `record`.
    fn update(&self, record: &T) -> Result<()>;

    /// Removes the rows addressed by the present key fields of `record`.
    fn delete(&self, record: &T) -> Result<()>;
}
