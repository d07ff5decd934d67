use std::collections::BTreeMap;

use super::builder::derive_schema;
use super::record::Record;
use super::types::Schema;

/// Schemas keyed by resource name, derived once at registration.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, Schema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `R` under `resource`, replacing any previous entry.
    pub fn register<R: Record>(mut self, resource: impl Into<String>) -> Self {
        let resource = resource.into();
        tracing::debug!(resource = %resource, table = R::TABLE, "registering record schema");
        self.schemas.insert(resource, derive_schema::<R>());
        self
    }

    pub fn get(&self, resource: &str) -> Option<&Schema> {
        self.schemas.get(resource)
    }

    pub fn resources(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.schemas.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
