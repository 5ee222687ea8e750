//! Resolved field paths and translated fields.

use std::fmt;

use serde::{Deserialize, Serialize};
use skiff_model::SerializerHandle;
use smallvec::SmallVec;
use smol_str::SmolStr;

/// A resolved path of named steps from the document root.
///
/// Two paths are equal iff their step sequences are equal. The empty path is
/// the document root itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FieldPath {
    steps: SmallVec<[SmolStr; 4]>,
}

impl FieldPath {
    /// The document root (empty path).
    pub fn root() -> Self {
        Self::default()
    }

    /// Check whether this is the document root.
    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check whether the path has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Append a step in place.
    pub fn push(&mut self, step: impl Into<SmolStr>) {
        self.steps.push(step.into());
    }

    /// A copy of this path extended by one step.
    pub fn child(&self, step: impl Into<SmolStr>) -> Self {
        let mut path = self.clone();
        path.push(step);
        path
    }

    /// Iterate over the steps in root-to-leaf order.
    pub fn steps(&self) -> impl Iterator<Item = &SmolStr> {
        self.steps.iter()
    }

    /// Render the path in dotted form (`a.b.c`).
    pub fn dotted(&self) -> String {
        let mut out = String::new();
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push_str(step);
        }
        out
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dotted())
    }
}

impl<S: Into<SmolStr>> FromIterator<S> for FieldPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A resolved, serializer-aware field usable inside filter nodes.
#[derive(Debug, Clone)]
pub struct TranslatedField {
    /// Path of the field from the document root.
    pub path: FieldPath,
    /// Serializer governing the field's values.
    pub serializer: SerializerHandle,
}

impl TranslatedField {
    /// Create a translated field.
    pub fn new(path: FieldPath, serializer: SerializerHandle) -> Self {
        Self { path, serializer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dotted_rendering() {
        let path: FieldPath = ["a", "b", "c"].into_iter().collect();
        assert_eq!(path.dotted(), "a.b.c");
        assert_eq!(path.to_string(), "a.b.c");
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_root_path() {
        let root = FieldPath::root();
        assert!(root.is_root());
        assert_eq!(root.dotted(), "");
    }

    #[test]
    fn test_child_does_not_mutate_parent() {
        let parent: FieldPath = ["tags"].into_iter().collect();
        let child = parent.child("red");
        assert_eq!(parent.dotted(), "tags");
        assert_eq!(child.dotted(), "tags.red");
    }

    #[test]
    fn test_path_equality() {
        let a: FieldPath = ["x", "y"].into_iter().collect();
        let b: FieldPath = ["x", "y"].into_iter().collect();
        let c: FieldPath = ["y", "x"].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
