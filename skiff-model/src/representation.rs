//! On-wire representation tags for mapping-typed fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a key/value mapping field is laid out in the stored document.
///
/// The tag is chosen once at model-configuration time and is immutable for
/// the lifetime of the field's serializer. Translators branch on it because
/// the legal shape of an emitted filter depends on the physical layout: a
/// key-existence check only has a subfield meaning when the mapping is
/// stored as a document keyed by the mapping's own keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingRepresentation {
    /// Stored as a nested document: `{ "k1": v1, "k2": v2 }`.
    Document,
    /// Stored as an array of key/value documents: `[{ "k": k1, "v": v1 }, …]`.
    ArrayOfDocuments,
    /// Stored as an array of two-element arrays: `[[k1, v1], [k2, v2]]`.
    ArrayOfArrays,
}

impl MappingRepresentation {
    /// Check whether keys of this representation are addressable as subfields.
    pub fn is_key_addressable(&self) -> bool {
        matches!(self, Self::Document)
    }
}

impl fmt::Display for MappingRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Document => "document",
            Self::ArrayOfDocuments => "array of documents",
            Self::ArrayOfArrays => "array of arrays",
        };
        write!(f, "{}", name)
    }
}
