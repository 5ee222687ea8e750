//! Filter AST for the target query-document grammar.
//!
//! A [`Filter`] is the output of translation: an intermediate tree that an
//! encoder renders into the database's native filter-document grammar. Every
//! field reference in a node is a fully resolved [`FieldPath`]; resolution
//! always completes before a node is constructed.

use serde::{Deserialize, Serialize};
use skiff_model::Value;

use crate::field::FieldPath;

/// Ordering comparison operators of the target grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOp {
    /// Less-than.
    Lt,
    /// Less-than-or-equal.
    Lte,
    /// Greater-than.
    Gt,
    /// Greater-than-or-equal.
    Gte,
}

/// A node of the target filter grammar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Filter {
    /// Field existence check.
    Exists {
        /// The checked field.
        field: FieldPath,
        /// Whether the field must exist.
        exists: bool,
    },
    /// Equality match.
    Eq {
        /// The matched field.
        field: FieldPath,
        /// Wire value to match.
        value: Value,
    },
    /// Inequality match.
    Ne {
        /// The matched field.
        field: FieldPath,
        /// Wire value to not match.
        value: Value,
    },
    /// Ordering comparison.
    Comparison {
        /// The operator.
        op: ComparisonOp,
        /// The compared field.
        field: FieldPath,
        /// Wire value to compare against.
        value: Value,
    },
    /// Set membership.
    In {
        /// The matched field.
        field: FieldPath,
        /// Accepted wire values, in source order.
        values: Vec<Value>,
    },
    /// Negated set membership.
    Nin {
        /// The matched field.
        field: FieldPath,
        /// Rejected wire values, in source order.
        values: Vec<Value>,
    },
    /// Regular-expression match.
    Regex {
        /// The matched field.
        field: FieldPath,
        /// Pattern source.
        pattern: String,
        /// Pattern options (empty for none).
        options: String,
    },
    /// Conjunction; children in source order. Empty matches everything.
    And(Vec<Filter>),
    /// Disjunction; children in source order. Empty matches nothing.
    Or(Vec<Filter>),
    /// Negation.
    Not(Box<Filter>),
}

impl Filter {
    /// Field-exists check.
    pub fn exists(field: FieldPath) -> Self {
        Self::Exists {
            field,
            exists: true,
        }
    }

    /// Field-missing check.
    pub fn missing(field: FieldPath) -> Self {
        Self::Exists {
            field,
            exists: false,
        }
    }

    /// Equality match.
    pub fn eq(field: FieldPath, value: Value) -> Self {
        Self::Eq { field, value }
    }

    /// Inequality match.
    pub fn ne(field: FieldPath, value: Value) -> Self {
        Self::Ne { field, value }
    }

    /// Less-than comparison.
    pub fn lt(field: FieldPath, value: Value) -> Self {
        Self::Comparison {
            op: ComparisonOp::Lt,
            field,
            value,
        }
    }

    /// Less-than-or-equal comparison.
    pub fn lte(field: FieldPath, value: Value) -> Self {
        Self::Comparison {
            op: ComparisonOp::Lte,
            field,
            value,
        }
    }

    /// Greater-than comparison.
    pub fn gt(field: FieldPath, value: Value) -> Self {
        Self::Comparison {
            op: ComparisonOp::Gt,
            field,
            value,
        }
    }

    /// Greater-than-or-equal comparison.
    pub fn gte(field: FieldPath, value: Value) -> Self {
        Self::Comparison {
            op: ComparisonOp::Gte,
            field,
            value,
        }
    }

    /// Set-membership match.
    pub fn is_in(field: FieldPath, values: Vec<Value>) -> Self {
        Self::In { field, values }
    }

    /// Negated set-membership match.
    pub fn not_in(field: FieldPath, values: Vec<Value>) -> Self {
        Self::Nin { field, values }
    }

    /// Regular-expression match.
    pub fn regex(field: FieldPath, pattern: impl Into<String>, options: impl Into<String>) -> Self {
        Self::Regex {
            field,
            pattern: pattern.into(),
            options: options.into(),
        }
    }

    /// The filter that matches every document.
    pub fn match_all() -> Self {
        Self::And(Vec::new())
    }

    /// The filter that matches no document.
    pub fn match_none() -> Self {
        Self::Or(Vec::new())
    }

    /// Conjunction of filters, preserving source order.
    ///
    /// Children that are themselves conjunctions are flattened one level, so
    /// `(a && b) && c` composes to `And([a, b, c])`.
    pub fn and(filters: impl IntoIterator<Item = Filter>) -> Self {
        let mut children = Vec::new();
        for filter in filters {
            match filter {
                Self::And(inner) => children.extend(inner),
                other => children.push(other),
            }
        }
        Self::And(children)
    }

    /// Disjunction of filters, preserving source order.
    ///
    /// Children that are themselves disjunctions are flattened one level.
    pub fn or(filters: impl IntoIterator<Item = Filter>) -> Self {
        let mut children = Vec::new();
        for filter in filters {
            match filter {
                Self::Or(inner) => children.extend(inner),
                other => children.push(other),
            }
        }
        Self::Or(children)
    }

    /// Negation of a filter.
    pub fn not(filter: Filter) -> Self {
        Self::Not(Box::new(filter))
    }
}
