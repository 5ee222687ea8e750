//! # skiff-filter
//!
//! Typed predicate-to-filter translation engine for the Skiff query layer.
//!
//! The engine is a small compiler: its source language is a boolean predicate
//! expression over a declared object model (built with the DSL in [`expr`]),
//! and its target language is the [`Filter`] AST, which an external encoder
//! renders into the database's query-document grammar. Translation is
//! all-or-nothing: an expression the engine cannot faithfully express fails
//! with a descriptive [`TranslationError`] before anything reaches the wire.
//!
//! ## Translating a predicate
//!
//! ```rust
//! use skiff_filter::{Filter, TranslationContext, lambda, lit, param, translate_predicate};
//! use skiff_model::{MapSerializer, MappingRepresentation, StringSerializer, StructSerializer};
//!
//! let restaurant = StructSerializer::builder("Restaurant")
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
//! let ctx = TranslationContext::for_root(restaurant);
//! let predicate = lambda("x", param("x").member("tags").contains_key(lit("red")));
//!
//! let filter = translate_predicate(&ctx, &predicate).unwrap();
//! assert_eq!(
//!     filter,
//!     Filter::exists(["tags", "red"].into_iter().collect())
//! );
//! ```
//!
//! ## Failure is explicit
//!
//! ```rust
//! use skiff_filter::{TranslationContext, TranslationError, lambda, lit, param,
//!     translate_predicate};
//! use skiff_model::{MapSerializer, MappingRepresentation, StringSerializer, StructSerializer};
//!
//! let restaurant = StructSerializer::builder("Restaurant")
//!     .field(
//!         "tags",
//!         MapSerializer::shared(
//!             MappingRepresentation::ArrayOfDocuments,
//!             StringSerializer::shared(),
//!             StringSerializer::shared(),
//!         ),
//!     )
//!     .shared();
//!
//! let ctx = TranslationContext::for_root(restaurant);
//! let predicate = lambda("x", param("x").member("tags").contains_key(lit("red")));
//!
//! let err = translate_predicate(&ctx, &predicate).unwrap_err();
//! assert!(matches!(err, TranslationError::UnsupportedRepresentation { .. }));
//! assert!(err.to_string().contains("array of documents"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod context;
pub mod error;
pub mod expr;
pub mod field;
pub mod filter;
pub mod resolver;
pub mod translate;

mod translators;

pub use context::TranslationContext;
pub use error::{TranslationError, TranslationResult};
pub use expr::{BinaryOp, Expr, MethodCall, MethodSig, TypeKind, UnaryOp, lambda, lit, param};
pub use field::{FieldPath, TranslatedField};
pub use filter::{ComparisonOp, Filter};
pub use resolver::resolve_field;
pub use translate::{translate, translate_predicate};
