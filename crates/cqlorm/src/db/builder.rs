use super::Db;
use crate::{Record, Registry, Result, Session, TableSchema};

use cqlorm_cql::Serializer;

use std::sync::Arc;

type Catalogue = fn(&Registry) -> Result<Arc<TableSchema>>;

#[derive(Default)]
pub struct Builder<'a> {
    /// Cataloguing functions of the registered record types
    models: Vec<Catalogue>,

    /// Registry to catalogue into. Defaults to the process-wide registry.
    registry: Option<&'a Registry>,

    /// Keyspace used to qualify table names
    keyspace: Option<String>,
}

impl<'a> Builder<'a> {
    pub fn register<T: Record>(&mut self) -> &mut Self {
        self.models.push(Registry::schema_for::<T>);
        self
    }

    /// Catalogue into `registry` instead of the process-wide registry.
    pub fn registry(&mut self, registry: &'a Registry) -> &mut Self {
        self.registry = Some(registry);
        self
    }

    /// Qualify every table name with `keyspace`. Without it, names resolve
    /// against the session's current keyspace.
    pub fn keyspace(&mut self, keyspace: impl Into<String>) -> &mut Self {
        self.keyspace = Some(keyspace.into());
        self
    }

    /// Catalogues every registered record type, failing on the first
    /// invalid one.
    pub fn build(&self, session: &'a dyn Session) -> Result<Db<'a>> {
        let registry = self.registry.unwrap_or(Registry::global());

        let tables = self
            .models
            .iter()
            .map(|catalogue| catalogue(registry))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(tables = tables.len(), "built db");

        Ok(Db {
            session,
            registry,
            tables,
            serializer: match &self.keyspace {
                Some(keyspace) => Serializer::with_keyspace(keyspace.clone()),
                None => Serializer::new(),
            },
        })
    }
}

impl std::fmt::Debug for Builder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("models", &self.models.len())
            .field("keyspace", &self.keyspace)
            .finish_non_exhaustive()
    }
}
