//! Field resolution.
//!
//! Resolution turns a member/indexer-access expression into a
//! [`TranslatedField`]: a wire-level path plus the serializer governing it.
//! It is compositional — `a.b[k]` resolves `a`, then extends the result with
//! the serializer-aware step for `b`, then for `k` — and purely a function of
//! the context, the expression and the static model metadata.

use skiff_model::{
    DocumentSerializer, MappingSerializer, SequenceSerializer, Serializer, Value,
};
use tracing::trace;

use crate::context::TranslationContext;
use crate::error::{TranslationError, TranslationResult};
use crate::expr::Expr;
use crate::field::TranslatedField;

/// Resolve an expression to a deterministic field path from the root.
pub fn resolve_field(
    ctx: &TranslationContext,
    expr: &Expr,
) -> TranslationResult<TranslatedField> {
    match expr {
        Expr::Parameter(name) => {
            let serializer = ctx.parameter(name).ok_or_else(|| {
                TranslationError::unresolved(
                    expr.clone(),
                    format!("parameter `{}` is not bound in this scope", name),
                )
            })?;
            Ok(TranslatedField::new(ctx.scope().clone(), serializer.clone()))
        }

        Expr::Member { object, member } => {
            let parent = resolve_field(ctx, object)?;
            let document = parent.serializer.as_document().ok_or_else(|| {
                TranslationError::unresolved(
                    expr.clone(),
                    format!(
                        "serializer `{}` does not expose named members",
                        parent.serializer.name()
                    ),
                )
            })?;
            let info = document.member(member).ok_or_else(|| {
                TranslationError::unresolved(
                    expr.clone(),
                    format!(
                        "`{}` has no member `{}`",
                        parent.serializer.name(),
                        member
                    ),
                )
            })?;
            trace!(member = %member, wire = %info.wire_name, "resolved member step");
            Ok(TranslatedField::new(
                parent.path.child(info.wire_name.clone()),
                info.serializer,
            ))
        }

        Expr::Index { object, index } => {
            let parent = resolve_field(ctx, object)?;
            if let Some(mapping) = parent.serializer.as_mapping() {
                resolve_mapping_index(expr, index, &parent, mapping)
            } else if let Some(sequence) = parent.serializer.as_sequence() {
                resolve_sequence_index(expr, index, &parent, sequence.item_serializer().clone())
            } else {
                Err(TranslationError::unresolved(
                    expr.clone(),
                    format!(
                        "serializer `{}` is not indexable",
                        parent.serializer.name()
                    ),
                ))
            }
        }

        other => Err(TranslationError::unresolved(
            other.clone(),
            "the expression does not denote a deterministic path from the root".to_string(),
        )),
    }
}

fn resolve_mapping_index(
    expr: &Expr,
    index: &Expr,
    parent: &TranslatedField,
    mapping: &dyn MappingSerializer,
) -> TranslationResult<TranslatedField> {
    let representation = mapping.representation();
    if !representation.is_key_addressable() {
        return Err(TranslationError::unresolved(
            expr.clone(),
            format!("cannot address keys of a mapping stored as {}", representation),
        ));
    }

    let Expr::Constant(key) = index else {
        return Err(TranslationError::unresolved(
            expr.clone(),
            "the mapping key is not a compile-time constant".to_string(),
        ));
    };

    match mapping.key_serializer().serialize(key)? {
        Value::String(step) => {
            trace!(key = %step, "resolved mapping index step");
            Ok(TranslatedField::new(
                parent.path.child(step),
                mapping.value_serializer().clone(),
            ))
        }
        other => Err(TranslationError::unresolved(
            expr.clone(),
            format!(
                "the mapping key serializes to a {} value, expected a string",
                other.kind()
            ),
        )),
    }
}

fn resolve_sequence_index(
    expr: &Expr,
    index: &Expr,
    parent: &TranslatedField,
    item_serializer: skiff_model::SerializerHandle,
) -> TranslationResult<TranslatedField> {
    let position = match index {
        Expr::Constant(Value::Int32(i)) if *i >= 0 => i64::from(*i),
        Expr::Constant(Value::Int64(i)) if *i >= 0 => *i,
        Expr::Constant(_) => {
            return Err(TranslationError::unresolved(
                expr.clone(),
                "a sequence index must be a non-negative integer constant".to_string(),
            ));
        }
        _ => {
            return Err(TranslationError::unresolved(
                expr.clone(),
                "the sequence index is not a compile-time constant".to_string(),
            ));
        }
    };
    trace!(position, "resolved sequence index step");
    Ok(TranslatedField::new(
        parent.path.child(position.to_string()),
        item_serializer,
    ))
}
