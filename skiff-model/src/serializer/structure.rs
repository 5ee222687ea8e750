//! Document-shaped serializers for struct-like model types.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::error::{ModelError, ModelResult};
use crate::serializer::{DocumentSerializer, FieldInfo, Serializer, SerializerHandle};
use crate::value::Value;

/// Serializer for a struct-like model type with named members.
///
/// Members keep their declaration order and may carry a wire name different
/// from the model-level member name (the rename applies to the stored
/// document only; lookups use the model-level name).
#[derive(Debug)]
pub struct StructSerializer {
    name: SmolStr,
    members: IndexMap<SmolStr, FieldInfo>,
}

impl StructSerializer {
    /// Start building a struct serializer for the named model type.
    pub fn builder(name: impl Into<SmolStr>) -> StructSerializerBuilder {
        StructSerializerBuilder {
            name: name.into(),
            members: IndexMap::new(),
        }
    }

    /// Number of declared members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check whether the serializer has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over `(member name, field info)` pairs in declaration order.
    pub fn members(&self) -> impl Iterator<Item = (&SmolStr, &FieldInfo)> {
        self.members.iter()
    }
}

impl Serializer for StructSerializer {
    fn name(&self) -> &str {
        &self.name
    }

    fn serialize(&self, value: &Value) -> ModelResult<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Document(entries) => {
                let mut out = IndexMap::with_capacity(entries.len());
                for (member, v) in entries {
                    let info = self
                        .members
                        .get(member.as_str())
                        .ok_or_else(|| ModelError::unknown_member(self.name(), member))?;
                    out.insert(info.wire_name.to_string(), info.serializer.serialize(v)?);
                }
                Ok(Value::Document(out))
            }
            other => Err(ModelError::unserializable(self.name(), other.kind())),
        }
    }

    fn as_document(&self) -> Option<&dyn DocumentSerializer> {
        Some(self)
    }
}

impl DocumentSerializer for StructSerializer {
    fn member(&self, name: &str) -> Option<FieldInfo> {
        self.members.get(name).cloned()
    }
}

/// Builder for [`StructSerializer`].
#[derive(Debug)]
pub struct StructSerializerBuilder {
    name: SmolStr,
    members: IndexMap<SmolStr, FieldInfo>,
}

impl StructSerializerBuilder {
    /// Declare a member whose wire name equals the member name.
    pub fn field(self, name: impl Into<SmolStr>, serializer: SerializerHandle) -> Self {
        let name = name.into();
        let wire = name.clone();
        self.mapped_field(name, wire, serializer)
    }

    /// Declare a member stored under a different wire name.
    pub fn mapped_field(
        mut self,
        name: impl Into<SmolStr>,
        wire_name: impl Into<SmolStr>,
        serializer: SerializerHandle,
    ) -> Self {
        self.members.insert(
            name.into(),
            FieldInfo {
                wire_name: wire_name.into(),
                serializer,
            },
        );
        self
    }

    /// Finish building.
    pub fn build(self) -> StructSerializer {
        StructSerializer {
            name: self.name,
            members: self.members,
        }
    }

    /// Finish building and wrap in a shared handle.
    pub fn shared(self) -> SerializerHandle {
        std::sync::Arc::new(self.build())
    }
}
