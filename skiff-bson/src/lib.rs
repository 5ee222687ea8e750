//! # skiff-bson
//!
//! BSON rendering of Skiff filter ASTs.
//!
//! This crate sits at the output boundary of the translation engine: it turns
//! a [`skiff_filter::Filter`] into a [`bson::Document`] in the target query
//! grammar. The engine itself never depends on this crate — a filter AST is
//! encoding-independent until it is handed here.
//!
//! ## Example
//!
//! ```rust
//! use bson::doc;
//! use skiff_bson::render;
//! use skiff_filter::Filter;
//!
//! let filter = Filter::exists(["Tags", "red"].into_iter().collect());
//! assert_eq!(render(&filter), doc! { "Tags.red": { "$exists": true } });
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod render;

pub use render::{render, value_to_bson};
