//! Membership translation for `contains` calls.
//!
//! Two shapes share the signature:
//!
//! - a constant list receiver with a field argument (`["a", "b"].contains(x.f)`)
//!   becomes a set-membership filter over the field;
//! - a field receiver with a constant argument becomes an implicit-equality
//!   filter when the field is sequence-typed (array membership in the target
//!   grammar) or an unanchored regular-expression filter when the field
//!   serializes to a string.

use crate::context::TranslationContext;
use crate::error::{TranslationError, TranslationResult};
use crate::expr::{Expr, MethodCall};
use crate::filter::Filter;
use crate::resolver::resolve_field;
use crate::translators::is_instance_predicate;
use skiff_model::{SequenceSerializer, Serializer, Value};

/// Structural claim check.
pub(crate) fn claims(call: &MethodCall) -> bool {
    is_instance_predicate(call, "contains", 1)
}

/// Translate a claimed `contains` call.
pub(crate) fn translate(
    ctx: &TranslationContext,
    expr: &Expr,
    call: &MethodCall,
) -> TranslationResult<Filter> {
    let (Some(receiver), Some(argument)) = (call.receiver.as_deref(), call.args.first()) else {
        return Err(TranslationError::unsupported(
            expr.clone(),
            "contains requires a receiver and one argument",
        ));
    };

    if let Expr::Constant(Value::Array(items)) = receiver {
        let field = resolve_field(ctx, argument)?;
        let values = items
            .iter()
            .map(|item| field.serializer.serialize(item))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(Filter::is_in(field.path, values));
    }

    let field = resolve_field(ctx, receiver)?;
    let Expr::Constant(constant) = argument else {
        return Err(TranslationError::unsupported(
            expr.clone(),
            "the contains argument must be a compile-time constant",
        ));
    };

    if let Some(sequence) = field.serializer.as_sequence() {
        let item = sequence.item_serializer().serialize(constant)?;
        return Ok(Filter::eq(field.path, item));
    }

    match field.serializer.serialize(constant)? {
        Value::String(needle) => Ok(Filter::regex(field.path, regex_lite::escape(&needle), "")),
        other => Err(TranslationError::unsupported(
            expr.clone(),
            format!(
                "contains requires a sequence-typed or string-typed field, not a {} value",
                other.kind()
            ),
        )),
    }
}
