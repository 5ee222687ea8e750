//! Translation error taxonomy.
//!
//! Every failure is terminal for its translation call: no partial filter is
//! returned and no approximate filter is substituted, because a wrong filter
//! silently changes query semantics. Each variant carries the offending
//! source expression so callers can show the developer exactly which
//! construct could not be translated.

use skiff_model::{MappingRepresentation, ModelError};
use thiserror::Error;

use crate::expr::Expr;

/// Result type for translation operations.
pub type TranslationResult<T> = Result<T, TranslationError>;

/// Errors that can occur while translating a predicate expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslationError {
    /// No translator claims the expression, or the claiming translator's
    /// deeper applicability check failed.
    #[error("unsupported expression `{expression}`: {reason}")]
    Unsupported {
        /// The offending expression.
        expression: Expr,
        /// Human-readable reason.
        reason: String,
    },

    /// The expression is structurally recognized, but the field's on-wire
    /// representation cannot express the requested predicate.
    #[error(
        "cannot translate `{expression}`: a mapping stored as {representation} does not support this predicate"
    )]
    UnsupportedRepresentation {
        /// The offending expression.
        expression: Expr,
        /// The field's representation tag.
        representation: MappingRepresentation,
    },

    /// The expression does not denote a deterministic field path from the
    /// document root.
    #[error("cannot resolve `{expression}` to a document field: {reason}")]
    UnresolvedField {
        /// The offending expression.
        expression: Expr,
        /// Human-readable reason.
        reason: String,
    },

    /// A required compile-time key argument is missing or non-constant.
    #[error("key argument `{expression}` must be a compile-time constant")]
    NonConstantKey {
        /// The offending key expression.
        expression: Expr,
    },

    /// A constant key serialized to a wire kind other than string.
    #[error("key argument `{expression}` serializes to a {kind} value, expected a string")]
    NonStringKey {
        /// The offending key expression.
        expression: Expr,
        /// Wire kind the key serialized to.
        kind: &'static str,
    },

    /// The resolved field's serializer lacks key/value mapping semantics.
    #[error(
        "cannot translate `{expression}`: serializer `{serializer}` does not provide key/value mapping semantics"
    )]
    NotAMapping {
        /// The offending expression.
        expression: Expr,
        /// Concrete serializer kind.
        serializer: String,
    },

    /// A constant failed to serialize through the model's serializer.
    #[error(transparent)]
    Serialization(#[from] ModelError),
}

impl TranslationError {
    /// Create an unsupported-expression error.
    pub fn unsupported(expression: Expr, reason: impl Into<String>) -> Self {
        Self::Unsupported {
            expression,
            reason: reason.into(),
        }
    }

    /// Create an unsupported-representation error.
    pub fn unsupported_representation(
        expression: Expr,
        representation: MappingRepresentation,
    ) -> Self {
        Self::UnsupportedRepresentation {
            expression,
            representation,
        }
    }

    /// Create an unresolved-field error.
    pub fn unresolved(expression: Expr, reason: impl Into<String>) -> Self {
        Self::UnresolvedField {
            expression,
            reason: reason.into(),
        }
    }

    /// Create a non-constant-key error.
    pub fn non_constant_key(expression: Expr) -> Self {
        Self::NonConstantKey { expression }
    }

    /// Create a non-string-key error.
    pub fn non_string_key(expression: Expr, kind: &'static str) -> Self {
        Self::NonStringKey { expression, kind }
    }

    /// Create a serializer-capability-mismatch error.
    pub fn not_a_mapping(expression: Expr, serializer: impl Into<String>) -> Self {
        Self::NotAMapping {
            expression,
            serializer: serializer.into(),
        }
    }

    /// The offending source expression, when the failure originated in the
    /// expression tree rather than the model layer.
    pub fn expression(&self) -> Option<&Expr> {
        match self {
            Self::Unsupported { expression, .. }
            | Self::UnsupportedRepresentation { expression, .. }
            | Self::UnresolvedField { expression, .. }
            | Self::NonConstantKey { expression }
            | Self::NonStringKey { expression, .. }
            | Self::NotAMapping { expression, .. } => Some(expression),
            Self::Serialization(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{lit, param};
    use skiff_model::MappingRepresentation;

    #[test]
    fn test_messages_name_the_construct() {
        let expr = param("x").member("tags").contains_key(lit("red"));
        let err = TranslationError::unsupported_representation(
            expr.clone(),
            MappingRepresentation::ArrayOfDocuments,
        );
        assert_eq!(
            err.to_string(),
            "cannot translate `x.tags.contains_key(\"red\")`: a mapping stored as array of documents does not support this predicate"
        );
        assert_eq!(err.expression(), Some(&expr));
    }

    #[test]
    fn test_not_a_mapping_names_serializer_kind() {
        let expr = param("x").member("name").contains_key(lit("red"));
        let err = TranslationError::not_a_mapping(expr, "StringSerializer");
        assert!(err.to_string().contains("StringSerializer"));
    }

    #[test]
    fn test_non_string_key_names_kind() {
        let err = TranslationError::non_string_key(lit(3), "32-bit integer");
        assert_eq!(
            err.to_string(),
            "key argument `3` serializes to a 32-bit integer value, expected a string"
        );
    }
}
