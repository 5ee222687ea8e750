//! Prefix and suffix pattern translation for string fields.
//!
//! Claims `field.starts_with(literal)` and `field.ends_with(literal)`. The
//! literal is serialized through the field's serializer, escaped, and
//! anchored at the matching end of an emitted regular-expression filter.

use crate::context::TranslationContext;
use crate::error::{TranslationError, TranslationResult};
use crate::expr::{Expr, MethodCall};
use crate::filter::Filter;
use crate::resolver::resolve_field;
use crate::translators::is_instance_predicate;
use skiff_model::{Serializer, Value};

/// Structural claim check.
pub(crate) fn claims(call: &MethodCall) -> bool {
    is_instance_predicate(call, "starts_with", 1) || is_instance_predicate(call, "ends_with", 1)
}

/// Translate a claimed `starts_with`/`ends_with` call.
pub(crate) fn translate(
    ctx: &TranslationContext,
    expr: &Expr,
    call: &MethodCall,
) -> TranslationResult<Filter> {
    let (Some(receiver), Some(argument)) = (call.receiver.as_deref(), call.args.first()) else {
        return Err(TranslationError::unsupported(
            expr.clone(),
            "a string pattern test requires a receiver and one argument",
        ));
    };

    let field = resolve_field(ctx, receiver)?;
    let Expr::Constant(constant) = argument else {
        return Err(TranslationError::unsupported(
            expr.clone(),
            "the pattern argument must be a compile-time constant",
        ));
    };

    let literal = match field.serializer.serialize(constant)? {
        Value::String(literal) => literal,
        other => {
            return Err(TranslationError::unsupported(
                expr.clone(),
                format!(
                    "`{}` requires a string-serialized argument, got a {} value",
                    call.method.name,
                    other.kind()
                ),
            ));
        }
    };

    let escaped = regex_lite::escape(&literal);
    let pattern = if call.method.name == "starts_with" {
        format!("^{}", escaped)
    } else {
        format!("{}$", escaped)
    };
    Ok(Filter::regex(field.path, pattern, ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{lit, param};
    use crate::field::FieldPath;
    use pretty_assertions::assert_eq;
    use skiff_model::{Int32Serializer, StringSerializer, StructSerializer};

    fn ctx() -> TranslationContext {
        let root = StructSerializer::builder("Restaurant")
            .field("name", StringSerializer::shared())
            .field("seats", Int32Serializer::shared())
            .shared();
        TranslationContext::new().with_parameter("x", root)
    }

    fn path(steps: &[&str]) -> FieldPath {
        steps.iter().copied().collect()
    }

    fn run(expr: &Expr) -> TranslationResult<Filter> {
        let Expr::Call(call) = expr else {
            panic!("expected a call, got {}", expr);
        };
        assert!(claims(call));
        translate(&ctx(), expr, call)
    }

    #[test]
    fn test_starts_with_anchors_front() {
        let filter = run(&param("x").member("name").starts_with(lit("Caf"))).unwrap();
        assert_eq!(filter, Filter::regex(path(&["name"]), "^Caf", ""));
    }

    #[test]
    fn test_ends_with_anchors_back() {
        let filter = run(&param("x").member("name").ends_with(lit("Bar"))).unwrap();
        assert_eq!(filter, Filter::regex(path(&["name"]), "Bar$", ""));
    }

    #[test]
    fn test_literal_metacharacters_escaped() {
        let filter = run(&param("x").member("name").starts_with(lit("a.b*"))).unwrap();
        assert_eq!(filter, Filter::regex(path(&["name"]), "^a\\.b\\*", ""));
    }

    #[test]
    fn test_non_string_field_rejected() {
        let err = run(&param("x").member("seats").starts_with(lit("3"))).unwrap_err();
        assert!(matches!(err, TranslationError::Serialization(_)));
    }

    #[test]
    fn test_non_constant_argument_rejected() {
        let err = run(
            &param("x")
                .member("name")
                .starts_with(param("x").member("name")),
        )
        .unwrap_err();
        assert!(matches!(err, TranslationError::Unsupported { .. }));
    }
}
