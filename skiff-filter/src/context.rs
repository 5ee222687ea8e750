//! Per-translation context.
//!
//! A [`TranslationContext`] carries the state a single root-expression
//! translation needs: the root serializer, the lambda parameters currently in
//! scope and the enclosing field scope. Contexts are never mutated in place;
//! extending one for a nested scope produces a new context, so outer scopes
//! stay valid while inner expressions translate.

use skiff_model::SerializerHandle;
use smol_str::SmolStr;

use crate::field::FieldPath;

/// Immutable state threaded through one translation call.
#[derive(Debug, Clone, Default)]
pub struct TranslationContext {
    root: Option<SerializerHandle>,
    bindings: Vec<(SmolStr, SerializerHandle)>,
    scope: FieldPath,
}

impl TranslationContext {
    /// Create an empty context with no root serializer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context rooted at the given model serializer.
    pub fn for_root(root: SerializerHandle) -> Self {
        Self {
            root: Some(root),
            bindings: Vec::new(),
            scope: FieldPath::root(),
        }
    }

    /// The root serializer, if one is bound.
    pub fn root(&self) -> Option<&SerializerHandle> {
        self.root.as_ref()
    }

    /// A copy of this context with an additional parameter binding.
    ///
    /// Inner bindings shadow outer bindings of the same name.
    pub fn with_parameter(
        &self,
        name: impl Into<SmolStr>,
        serializer: SerializerHandle,
    ) -> Self {
        let mut next = self.clone();
        next.bindings.push((name.into(), serializer));
        next
    }

    /// Look up the serializer bound to a parameter name.
    pub fn parameter(&self, name: &str) -> Option<&SerializerHandle> {
        self.bindings
            .iter()
            .rev()
            .find(|(bound, _)| bound == name)
            .map(|(_, serializer)| serializer)
    }

    /// A copy of this context scoped under the given field path.
    pub fn with_scope(&self, scope: FieldPath) -> Self {
        let mut next = self.clone();
        next.scope = scope;
        next
    }

    /// The enclosing field scope; parameter resolution starts here.
    pub fn scope(&self) -> &FieldPath {
        &self.scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skiff_model::{Serializer, StringSerializer};

    #[test]
    fn test_parameter_binding_and_shadowing() {
        let ctx = TranslationContext::new()
            .with_parameter("x", StringSerializer::shared())
            .with_parameter("x", skiff_model::Int32Serializer::shared());

        assert_eq!(ctx.parameter("x").unwrap().name(), "Int32Serializer");
        assert!(ctx.parameter("y").is_none());
    }

    #[test]
    fn test_extension_leaves_original_untouched() {
        let outer = TranslationContext::new();
        let inner = outer.with_parameter("x", StringSerializer::shared());

        assert!(outer.parameter("x").is_none());
        assert!(inner.parameter("x").is_some());
    }

    #[test]
    fn test_scope() {
        let ctx = TranslationContext::new();
        assert!(ctx.scope().is_root());

        let scoped = ctx.with_scope(["items"].into_iter().collect());
        assert_eq!(scoped.scope().dotted(), "items");
        assert!(ctx.scope().is_root());
    }
}
