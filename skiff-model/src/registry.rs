//! Explicit model metadata registry.
//!
//! The registry is plain data passed by reference to whoever needs root
//! serializers. Lookups are statically typed; there is no reflective or
//! name-convention machinery behind them.

use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::error::{ModelError, ModelResult};
use crate::serializer::{Serializer, SerializerHandle, StructSerializer};

/// Registry of root model serializers, keyed by model name.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: IndexMap<SmolStr, Arc<StructSerializer>>,
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model serializer under its own type name.
    ///
    /// Re-registering a name replaces the previous entry.
    pub fn register(&mut self, serializer: Arc<StructSerializer>) -> &mut Self {
        let name = SmolStr::new(serializer.name());
        tracing::debug!(model = %name, "registering model");
        self.models.insert(name, serializer);
        self
    }

    /// Look up a model serializer by name.
    pub fn get(&self, name: &str) -> ModelResult<Arc<StructSerializer>> {
        self.models
            .get(name)
            .cloned()
            .ok_or_else(|| ModelError::unknown_model(name))
    }

    /// Look up a model's root serializer handle by name.
    pub fn root(&self, name: &str) -> ModelResult<SerializerHandle> {
        let model = self.get(name)?;
        Ok(model)
    }

    /// Check whether a model is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Iterate over registered models in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&SmolStr, &Arc<StructSerializer>)> {
        self.models.iter()
    }
}
