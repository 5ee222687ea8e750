//! Serializer capability interface and concrete serializers.
//!
//! The translation engine never inspects concrete serializer types. It talks
//! to the object-safe [`Serializer`] trait and probes for capabilities
//! (`as_document`, `as_mapping`, `as_sequence`); a probe returning `None`
//! means the serializer does not have that capability. Failure messages still
//! name the concrete serializer kind via [`Serializer::name`].

mod map;
mod scalar;
mod sequence;
mod structure;

pub use map::MapSerializer;
pub use scalar::{
    BoolSerializer, DoubleSerializer, Int32Serializer, Int64Serializer, StringSerializer,
};
pub use sequence::VecSerializer;
pub use structure::{StructSerializer, StructSerializerBuilder};

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

use crate::error::ModelResult;
use crate::representation::MappingRepresentation;
use crate::value::Value;

/// A shared handle to a serializer.
pub type SerializerHandle = Arc<dyn Serializer>;

/// Encodes model-level constants into wire values.
///
/// Serializers are configured once per field at model-definition time and are
/// immutable afterwards, so a single instance is safely shared by reference
/// across concurrent translations.
pub trait Serializer: fmt::Debug + Send + Sync {
    /// Concrete serializer kind, used in diagnostics.
    fn name(&self) -> &str;

    /// Encode a model-level constant into its wire value.
    fn serialize(&self, value: &Value) -> ModelResult<Value>;

    /// Member-addressable (document-shaped) capability.
    fn as_document(&self) -> Option<&dyn DocumentSerializer> {
        None
    }

    /// Key/value mapping capability.
    fn as_mapping(&self) -> Option<&dyn MappingSerializer> {
        None
    }

    /// Homogeneous sequence capability.
    fn as_sequence(&self) -> Option<&dyn SequenceSerializer> {
        None
    }
}

/// Serialization info for one member of a document-shaped value.
#[derive(Debug, Clone)]
pub struct FieldInfo {
    /// Name of the field in the stored document.
    pub wire_name: SmolStr,
    /// Serializer governing the member's value.
    pub serializer: SerializerHandle,
}

/// Capability of serializers whose wire form is a document with named members.
pub trait DocumentSerializer: Serializer {
    /// Look up serialization info for a member, by its model-level name.
    fn member(&self, name: &str) -> Option<FieldInfo>;
}

/// Capability of serializers whose model value is a key/value mapping.
pub trait MappingSerializer: Serializer {
    /// The on-wire representation chosen for this mapping.
    fn representation(&self) -> MappingRepresentation;

    /// Serializer for the mapping's keys.
    fn key_serializer(&self) -> &SerializerHandle;

    /// Serializer for the mapping's values.
    fn value_serializer(&self) -> &SerializerHandle;
}

/// Capability of serializers whose wire form is an array of homogeneous items.
pub trait SequenceSerializer: Serializer {
    /// Serializer for the sequence's items.
    fn item_serializer(&self) -> &SerializerHandle;
}
