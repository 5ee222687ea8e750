//! Top-down translation dispatch.
//!
//! The dispatcher walks the source tree and, at each node, selects at most
//! one translator: first by node kind, then — for method calls — by the
//! structural signature claims of the registered method translators. An
//! expression nothing claims is a hard failure; the dispatcher never
//! substitutes an approximate filter, because a wrong filter would silently
//! change query semantics.

use tracing::trace;

use crate::context::TranslationContext;
use crate::error::{TranslationError, TranslationResult};
use crate::expr::{BinaryOp, Expr, MethodCall, UnaryOp};
use crate::filter::Filter;
use crate::translators::{self, METHOD_TRANSLATORS};
use skiff_model::Value;

/// Translate a root predicate of the form `param => body`.
///
/// The context must carry the root serializer the lambda parameter binds to;
/// the binding itself is established here and scoped to this call.
pub fn translate_predicate(
    ctx: &TranslationContext,
    expr: &Expr,
) -> TranslationResult<Filter> {
    match expr {
        Expr::Lambda { param, body } => {
            let Some(root) = ctx.root() else {
                return Err(TranslationError::unresolved(
                    expr.clone(),
                    "no root serializer is bound in this context",
                ));
            };
            let scoped = ctx.with_parameter(param.clone(), root.clone());
            translate(&scoped, body)
        }
        other => Err(TranslationError::unsupported(
            other.clone(),
            "a top-level predicate must be a lambda over the document root",
        )),
    }
}

/// Translate one boolean-valued expression node.
pub fn translate(ctx: &TranslationContext, expr: &Expr) -> TranslationResult<Filter> {
    match expr {
        Expr::Binary { op, left, right } => match op {
            BinaryOp::And => translators::logical::and(ctx, left, right),
            BinaryOp::Or => translators::logical::or(ctx, left, right),
            _ => translators::comparison::translate(ctx, expr, *op, left, right),
        },
        Expr::Unary {
            op: UnaryOp::Not,
            operand,
        } => translators::logical::not(ctx, operand),
        Expr::Call(call) => translate_call(ctx, expr, call),
        Expr::Constant(Value::Bool(true)) => Ok(Filter::match_all()),
        Expr::Constant(Value::Bool(false)) => Ok(Filter::match_none()),
        other => Err(TranslationError::unsupported(
            other.clone(),
            "no translator matches this expression shape",
        )),
    }
}

fn translate_call(
    ctx: &TranslationContext,
    expr: &Expr,
    call: &MethodCall,
) -> TranslationResult<Filter> {
    for translator in METHOD_TRANSLATORS {
        if (translator.claims)(call) {
            trace!(
                translator = translator.name,
                method = %call.method.name,
                "translator claimed call"
            );
            return (translator.translate)(ctx, expr, call);
        }
    }
    Err(TranslationError::unsupported(
        expr.clone(),
        format!("no translator claims method `{}`", call.method.name),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{MethodSig, TypeKind, lambda, lit, param};
    use crate::field::FieldPath;
    use pretty_assertions::assert_eq;
    use skiff_model::{
        Int32Serializer, MapSerializer, MappingRepresentation, StringSerializer, StructSerializer,
    };

    fn ctx() -> TranslationContext {
        let root = StructSerializer::builder("Restaurant")
            .field("name", StringSerializer::shared())
            .field("seats", Int32Serializer::shared())
            .field(
                "tags",
                MapSerializer::shared(
                    MappingRepresentation::Document,
                    StringSerializer::shared(),
                    StringSerializer::shared(),
                ),
            )
            .shared();
        TranslationContext::for_root(root)
    }

    fn path(steps: &[&str]) -> FieldPath {
        steps.iter().copied().collect()
    }

    #[test]
    fn test_lambda_required_at_top_level() {
        let err = translate_predicate(&ctx(), &param("x").member("seats").gt(lit(4))).unwrap_err();
        assert!(matches!(err, TranslationError::Unsupported { .. }));
    }

    #[test]
    fn test_missing_root_serializer() {
        let ctx = TranslationContext::new();
        let err =
            translate_predicate(&ctx, &lambda("x", param("x").member("seats").gt(lit(4))))
                .unwrap_err();
        assert!(matches!(err, TranslationError::UnresolvedField { .. }));
    }

    #[test]
    fn test_and_children_in_source_order() {
        let predicate = lambda(
            "x",
            param("x")
                .member("seats")
                .gt(lit(4))
                .and(param("x").member("tags").contains_key(lit("red"))),
        );
        let filter = translate_predicate(&ctx(), &predicate).unwrap();
        assert_eq!(
            filter,
            Filter::And(vec![
                Filter::gt(path(&["seats"]), skiff_model::Value::Int32(4)),
                Filter::exists(path(&["tags", "red"])),
            ])
        );
    }

    #[test]
    fn test_nested_and_flattens_in_source_order() {
        let predicate = lambda(
            "x",
            param("x")
                .member("seats")
                .gt(lit(1))
                .and(param("x").member("seats").lt(lit(9)))
                .and(param("x").member("tags").contains_key(lit("red"))),
        );
        let filter = translate_predicate(&ctx(), &predicate).unwrap();
        let Filter::And(children) = filter else {
            panic!("expected a conjunction");
        };
        assert_eq!(children.len(), 3);
        assert_eq!(
            children[2],
            Filter::exists(path(&["tags", "red"]))
        );
    }

    #[test]
    fn test_or_and_not() {
        let predicate = lambda(
            "x",
            param("x")
                .member("seats")
                .eq(lit(2))
                .or(param("x").member("seats").eq(lit(4)).not()),
        );
        let filter = translate_predicate(&ctx(), &predicate).unwrap();
        assert_eq!(
            filter,
            Filter::Or(vec![
                Filter::eq(path(&["seats"]), skiff_model::Value::Int32(2)),
                Filter::not(Filter::eq(path(&["seats"]), skiff_model::Value::Int32(4))),
            ])
        );
    }

    #[test]
    fn test_constant_predicates() {
        assert_eq!(
            translate_predicate(&ctx(), &lambda("x", lit(true))).unwrap(),
            Filter::match_all()
        );
        assert_eq!(
            translate_predicate(&ctx(), &lambda("x", lit(false))).unwrap(),
            Filter::match_none()
        );
    }

    #[test]
    fn test_unclaimed_method_is_unsupported() {
        let predicate = lambda(
            "x",
            param("x")
                .member("name")
                .call(MethodSig::instance("sounds_like", TypeKind::Bool), vec![
                    lit("cafe"),
                ]),
        );
        let err = translate_predicate(&ctx(), &predicate).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported expression `x.name.sounds_like(\"cafe\")`: no translator claims method `sounds_like`"
        );
    }

    #[test]
    fn test_structural_miss_falls_through_to_unsupported() {
        let predicate = lambda(
            "x",
            param("x").member("tags").call(
                MethodSig::new("contains_key", true, true, TypeKind::Bool),
                vec![lit("red")],
            ),
        );
        let err = translate_predicate(&ctx(), &predicate).unwrap_err();
        assert!(matches!(err, TranslationError::Unsupported { .. }));
    }

    #[test]
    fn test_determinism_across_calls() {
        let predicate = lambda(
            "x",
            param("x")
                .member("tags")
                .contains_key(lit("red"))
                .and(param("x").member("seats").gte(lit(2))),
        );
        let first = translate_predicate(&ctx(), &predicate).unwrap();
        let second = translate_predicate(&ctx(), &predicate).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_boolean_constant_rejected() {
        let err = translate_predicate(&ctx(), &lambda("x", lit(3))).unwrap_err();
        assert!(matches!(err, TranslationError::Unsupported { .. }));
    }
}
