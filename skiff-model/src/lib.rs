//! # skiff-model
//!
//! Object-model serialization metadata for the Skiff query layer.
//!
//! This crate owns the model-side half of filter translation: wire values,
//! per-field representation tags, and the serializer capability interface the
//! translation engine queries instead of inspecting concrete types.
//!
//! ## Defining a model
//!
//! ```rust
//! use skiff_model::{
//!     DocumentSerializer, MapSerializer, MappingRepresentation, MappingSerializer,
//!     ModelRegistry, Serializer, StringSerializer, StructSerializer,
//! };
//! use std::sync::Arc;
//!
//! let restaurant = StructSerializer::builder("Restaurant")
//!     .field("name", StringSerializer::shared())
//!     .field(
//!         "tags",
//!         MapSerializer::shared(
//!             MappingRepresentation::Document,
//!             StringSerializer::shared(),
//!             StringSerializer::shared(),
//!         ),
//!     )
//!     .build();
//!
//! let mut registry = ModelRegistry::new();
//! registry.register(Arc::new(restaurant));
//!
//! let root = registry.root("Restaurant").unwrap();
//! let tags = root.as_document().unwrap().member("tags").unwrap();
//! let mapping = tags.serializer.as_mapping().unwrap();
//! assert_eq!(mapping.representation(), MappingRepresentation::Document);
//! ```
//!
//! ## Wire values
//!
//! ```rust
//! use skiff_model::{Serializer, StringSerializer, Value};
//!
//! let serializer = StringSerializer::new();
//! let wire = serializer.serialize(&Value::from("red")).unwrap();
//! assert_eq!(wire, Value::String("red".into()));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod registry;
pub mod representation;
pub mod serializer;
pub mod value;

pub use error::{ModelError, ModelResult};
pub use registry::ModelRegistry;
pub use representation::MappingRepresentation;
pub use serializer::{
    BoolSerializer, DocumentSerializer, DoubleSerializer, FieldInfo, Int32Serializer,
    Int64Serializer, MapSerializer, MappingSerializer, SequenceSerializer, Serializer,
    SerializerHandle, StringSerializer, StructSerializer, StructSerializerBuilder, VecSerializer,
};
pub use value::Value;

pub use indexmap;
