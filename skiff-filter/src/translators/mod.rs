//! Method and operator translators.
//!
//! Each translator is a stateless unit that claims exactly one syntactic
//! shape and produces one filter fragment, or fails. Method translators are
//! registered in [`METHOD_TRANSLATORS`] in claim order; the dispatcher
//! invokes at most one of them per call node. A translator whose structural
//! claim does not match simply declines — only a claimed node that fails its
//! deeper applicability checks produces an error.

pub(crate) mod comparison;
pub(crate) mod contains;
pub(crate) mod contains_key;
pub(crate) mod logical;
pub(crate) mod string_pattern;

use crate::context::TranslationContext;
use crate::error::TranslationResult;
use crate::expr::{Expr, MethodCall, TypeKind};
use crate::filter::Filter;

/// Structural guard shared by the method translators: a non-static, public,
/// boolean-returning instance method with the given name and arity.
pub(crate) fn is_instance_predicate(call: &MethodCall, name: &str, arity: usize) -> bool {
    !call.method.is_static
        && call.method.is_public
        && call.method.returns == TypeKind::Bool
        && call.receiver.is_some()
        && call.method.name == name
        && call.args.len() == arity
}

type ClaimFn = fn(&MethodCall) -> bool;
type TranslateFn = fn(&TranslationContext, &Expr, &MethodCall) -> TranslationResult<Filter>;

/// A registered method translator.
pub(crate) struct MethodTranslator {
    /// Registry name, used in dispatch tracing.
    pub name: &'static str,
    /// Structural claim check.
    pub claims: ClaimFn,
    /// Translation entry point; only invoked when `claims` matched.
    pub translate: TranslateFn,
}

/// Method translators in claim order.
pub(crate) const METHOD_TRANSLATORS: &[MethodTranslator] = &[
    MethodTranslator {
        name: "contains_key",
        claims: contains_key::claims,
        translate: contains_key::translate,
    },
    MethodTranslator {
        name: "contains",
        claims: contains::claims,
        translate: contains::translate,
    },
    MethodTranslator {
        name: "string_pattern",
        claims: string_pattern::claims,
        translate: string_pattern::translate,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{MethodSig, lit, param};

    fn call_of(expr: Expr) -> MethodCall {
        match expr {
            Expr::Call(call) => call,
            other => panic!("expected a call, got {}", other),
        }
    }

    #[test]
    fn test_structural_guard_accepts_dsl_shape() {
        let call = call_of(param("x").member("tags").contains_key(lit("red")));
        assert!(is_instance_predicate(&call, "contains_key", 1));
    }

    #[test]
    fn test_structural_guard_rejects_wrong_arity() {
        let call = call_of(
            param("x")
                .member("tags")
                .call(MethodSig::instance("contains_key", TypeKind::Bool), vec![]),
        );
        assert!(!is_instance_predicate(&call, "contains_key", 1));
    }

    #[test]
    fn test_structural_guard_rejects_non_bool_return() {
        let call = call_of(param("x").member("tags").call(
            MethodSig::instance("contains_key", TypeKind::Number),
            vec![lit("red")],
        ));
        assert!(!is_instance_predicate(&call, "contains_key", 1));
    }

    #[test]
    fn test_structural_guard_rejects_static_and_private() {
        let call = call_of(param("x").member("tags").call(
            MethodSig::new("contains_key", true, true, TypeKind::Bool),
            vec![lit("red")],
        ));
        assert!(!is_instance_predicate(&call, "contains_key", 1));

        let call = call_of(param("x").member("tags").call(
            MethodSig::new("contains_key", false, false, TypeKind::Bool),
            vec![lit("red")],
        ));
        assert!(!is_instance_predicate(&call, "contains_key", 1));
    }
}
