//! # Skiff
//!
//! Typed predicate-to-filter translation for document database clients.
//!
//! Skiff compiles statically-typed boolean predicate expressions — the kind
//! produced by an embedded query DSL over an object model — into a filter
//! AST that serializes into a document database's native query grammar.
//!
//! ## Quick Start
//!
//! ```rust
//! use skiff::prelude::*;
//!
//! // Describe the model: `tags` is a string map stored as a document.
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
//!     .shared();
//!
//! // Build a predicate and translate it.
//! let ctx = TranslationContext::for_root(restaurant);
//! let predicate = lambda("x", param("x").member("tags").contains_key(lit("red")));
//! let filter = translate_predicate(&ctx, &predicate).unwrap();
//!
//! // Render it into the wire grammar.
//! let document = render(&filter);
//! assert_eq!(document, bson::doc! { "tags.red": { "$exists": true } });
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Object-model serialization metadata.
pub mod model {
    pub use skiff_model::*;
}

/// Predicate-to-filter translation engine.
pub mod filter {
    pub use skiff_filter::*;
}

/// BSON rendering of filter ASTs.
pub mod encoding {
    pub use skiff_bson::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::encoding::{render, value_to_bson};
    pub use crate::filter::{
        Filter, TranslationContext, TranslationError, TranslationResult, lambda, lit, param,
        translate_predicate,
    };
    pub use crate::model::{
        BoolSerializer, DoubleSerializer, Int32Serializer, Int64Serializer, MapSerializer,
        MappingRepresentation, MappingSerializer, ModelRegistry, Serializer, SerializerHandle,
        StringSerializer, StructSerializer, Value, VecSerializer,
    };
}
