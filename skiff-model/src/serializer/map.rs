//! Mapping serializers with configurable on-wire representation.

use indexmap::IndexMap;

use crate::error::{ModelError, ModelResult};
use crate::representation::MappingRepresentation;
use crate::serializer::{MappingSerializer, Serializer, SerializerHandle};
use crate::value::Value;

/// Serializer for key/value mapping fields.
///
/// The representation tag decides the wire layout of the whole mapping and,
/// downstream, which filter shapes are legal against the field. It is fixed
/// at construction and shared by reference with every translation that
/// touches the field.
#[derive(Debug)]
pub struct MapSerializer {
    name: String,
    representation: MappingRepresentation,
    key: SerializerHandle,
    value: SerializerHandle,
}

impl MapSerializer {
    /// Create a mapping serializer.
    pub fn new(
        representation: MappingRepresentation,
        key: SerializerHandle,
        value: SerializerHandle,
    ) -> Self {
        let name = format!("MapSerializer<{}, {}>", key.name(), value.name());
        Self {
            name,
            representation,
            key,
            value,
        }
    }

    /// Create a mapping serializer wrapped in a shared handle.
    pub fn shared(
        representation: MappingRepresentation,
        key: SerializerHandle,
        value: SerializerHandle,
    ) -> SerializerHandle {
        std::sync::Arc::new(Self::new(representation, key, value))
    }

    fn serialize_entries(&self, entries: &IndexMap<String, Value>) -> ModelResult<Value> {
        let mut pairs = Vec::with_capacity(entries.len());
        for (k, v) in entries {
            let wire_key = self.key.serialize(&Value::String(k.clone()))?;
            let wire_value = self.value.serialize(v)?;
            pairs.push((wire_key, wire_value));
        }

        match self.representation {
            MappingRepresentation::Document => {
                let mut out = IndexMap::with_capacity(pairs.len());
                for (k, v) in pairs {
                    match k {
                        Value::String(k) => {
                            out.insert(k, v);
                        }
                        other => {
                            return Err(ModelError::unserializable(self.name(), other.kind()));
                        }
                    }
                }
                Ok(Value::Document(out))
            }
            MappingRepresentation::ArrayOfDocuments => Ok(Value::Array(
                pairs
                    .into_iter()
                    .map(|(k, v)| {
                        let mut entry = IndexMap::with_capacity(2);
                        entry.insert("k".to_string(), k);
                        entry.insert("v".to_string(), v);
                        Value::Document(entry)
                    })
                    .collect(),
            )),
            MappingRepresentation::ArrayOfArrays => Ok(Value::Array(
                pairs
                    .into_iter()
                    .map(|(k, v)| Value::Array(vec![k, v]))
                    .collect(),
            )),
        }
    }
}

impl Serializer for MapSerializer {
    fn name(&self) -> &str {
        &self.name
    }

    fn serialize(&self, value: &Value) -> ModelResult<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Document(entries) => self.serialize_entries(entries),
            other => Err(ModelError::unserializable(self.name(), other.kind())),
        }
    }

    fn as_mapping(&self) -> Option<&dyn MappingSerializer> {
        Some(self)
    }
}

impl MappingSerializer for MapSerializer {
    fn representation(&self) -> MappingRepresentation {
        self.representation
    }

    fn key_serializer(&self) -> &SerializerHandle {
        &self.key
    }

    fn value_serializer(&self) -> &SerializerHandle {
        &self.value
    }
}
