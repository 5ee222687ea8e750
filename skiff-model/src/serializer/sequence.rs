//! Sequence serializers for array-typed fields.

use crate::error::{ModelError, ModelResult};
use crate::serializer::{SequenceSerializer, Serializer, SerializerHandle};
use crate::value::Value;

/// Serializer for homogeneous sequence fields.
#[derive(Debug)]
pub struct VecSerializer {
    name: String,
    item: SerializerHandle,
}

impl VecSerializer {
    /// Create a sequence serializer with the given item serializer.
    pub fn new(item: SerializerHandle) -> Self {
        let name = format!("VecSerializer<{}>", item.name());
        Self { name, item }
    }

    /// Create a sequence serializer wrapped in a shared handle.
    pub fn shared(item: SerializerHandle) -> SerializerHandle {
        std::sync::Arc::new(Self::new(item))
    }
}

impl Serializer for VecSerializer {
    fn name(&self) -> &str {
        &self.name
    }

    fn serialize(&self, value: &Value) -> ModelResult<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Array(items) => Ok(Value::Array(
                items
                    .iter()
                    .map(|v| self.item.serialize(v))
                    .collect::<ModelResult<Vec<_>>>()?,
            )),
            other => Err(ModelError::unserializable(self.name(), other.kind())),
        }
    }

    fn as_sequence(&self) -> Option<&dyn SequenceSerializer> {
        Some(self)
    }
}

impl SequenceSerializer for VecSerializer {
    fn item_serializer(&self) -> &SerializerHandle {
        &self.item
    }
}
