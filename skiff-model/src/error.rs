//! Error types for model metadata and serialization.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while working with model metadata.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A serializer was handed a value it cannot encode.
    #[error("serializer `{serializer}` cannot encode a {kind} value")]
    UnserializableValue {
        /// Concrete serializer kind.
        serializer: String,
        /// Kind of the rejected value.
        kind: &'static str,
    },

    /// A member lookup failed on a document-shaped serializer.
    #[error("`{model}` has no member `{member}`")]
    UnknownMember {
        /// Model or serializer name.
        model: String,
        /// The missing member.
        member: String,
    },

    /// A model lookup failed in the registry.
    #[error("unknown model `{name}`")]
    UnknownModel {
        /// The missing model name.
        name: String,
    },
}

impl ModelError {
    /// Create an unserializable-value error.
    pub fn unserializable(serializer: impl Into<String>, kind: &'static str) -> Self {
        Self::UnserializableValue {
            serializer: serializer.into(),
            kind,
        }
    }

    /// Create an unknown-member error.
    pub fn unknown_member(model: impl Into<String>, member: impl Into<String>) -> Self {
        Self::UnknownMember {
            model: model.into(),
            member: member.into(),
        }
    }

    /// Create an unknown-model error.
    pub fn unknown_model(name: impl Into<String>) -> Self {
        Self::UnknownModel { name: name.into() }
    }
}
