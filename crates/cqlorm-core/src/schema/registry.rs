use super::{Record, TableSchema};
use crate::{Error, Result};

use dashmap::DashMap;
use std::{
    any::TypeId,
    sync::{Arc, OnceLock},
};

/// Catalogued schemas keyed by record type.
///
/// Entries are only ever added. Reads are lock-free on the common path and a
/// schema is built outside of any lock, then published with store-if-absent
/// semantics so racing callers all observe the first stored value.
#[derive(Debug, Default)]
pub struct Registry {
    schemas: DashMap<TypeId, Arc<TableSchema>>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    /// Returns the schema of `R`, cataloguing it on first use.
    ///
    /// Failures are not cached; a later call catalogues again.
    pub fn schema_for<R: Record>(&self) -> Result<Arc<TableSchema>> {
        let key = TypeId::of::<R>();

        if let Some(schema) = self.schemas.get(&key) {
            return Ok(schema.clone());
        }

        let schema = Arc::new(TableSchema::of::<R>()?);
        tracing::trace!(
            record = R::NAME,
            table = %schema.name,
            columns = schema.columns().count(),
            "catalogued schema"
        );

        Ok(self.schemas.entry(key).or_insert(schema).clone())
    }

    /// Returns the schema of `R` if it was catalogued.
    pub fn get<R: Record>(&self) -> Result<Arc<TableSchema>> {
        self.schemas
            .get(&TypeId::of::<R>())
            .map(|schema| schema.clone())
            .ok_or_else(|| Error::unknown_schema(R::NAME))
    }

    pub fn contains<R: Record>(&self) -> bool {
        self.schemas.contains_key(&TypeId::of::<R>())
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
