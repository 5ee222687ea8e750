//! Key-existence translation for mapping-typed fields.
//!
//! Claims `field.contains_key(key)` where the signature is a non-static,
//! public, boolean-returning single-argument method. The emitted filter
//! shape depends on the field's on-wire representation: only a mapping
//! stored as a document keys its entries by subfield name, so only there
//! does key existence reduce to a subfield-exists check. Under the array
//! representations the same predicate would need an element-wise membership
//! test, which this translator does not model — it fails instead of
//! emitting a filter with different semantics.

use tracing::trace;

use crate::context::TranslationContext;
use crate::error::{TranslationError, TranslationResult};
use crate::expr::{Expr, MethodCall};
use crate::filter::Filter;
use crate::resolver::resolve_field;
use crate::translators::is_instance_predicate;
use skiff_model::{MappingRepresentation, MappingSerializer, Serializer, Value};

/// Structural claim check.
pub(crate) fn claims(call: &MethodCall) -> bool {
    is_instance_predicate(call, "contains_key", 1)
}

/// Translate a claimed `contains_key` call.
pub(crate) fn translate(
    ctx: &TranslationContext,
    expr: &Expr,
    call: &MethodCall,
) -> TranslationResult<Filter> {
    let (Some(receiver), Some(key)) = (call.receiver.as_deref(), call.args.first()) else {
        return Err(TranslationError::unsupported(
            expr.clone(),
            "contains_key requires a receiver and one argument",
        ));
    };

    let field = resolve_field(ctx, receiver)?;
    let Some(mapping) = field.serializer.as_mapping() else {
        return Err(TranslationError::not_a_mapping(
            expr.clone(),
            field.serializer.name(),
        ));
    };

    match mapping.representation() {
        MappingRepresentation::Document => {
            let Expr::Constant(constant) = key else {
                return Err(TranslationError::non_constant_key(key.clone()));
            };
            match mapping.key_serializer().serialize(constant)? {
                Value::String(subfield) => {
                    trace!(field = %field.path, key = %subfield, "translated key existence");
                    Ok(Filter::exists(field.path.child(subfield)))
                }
                other => Err(TranslationError::non_string_key(key.clone(), other.kind())),
            }
        }
        representation => Err(TranslationError::unsupported_representation(
            expr.clone(),
            representation,
        )),
    }
}
