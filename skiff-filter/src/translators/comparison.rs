//! Comparison operator translation.
//!
//! Claims binary comparisons with a resolvable field on one side and a
//! compile-time constant on the other. The constant is serialized through the
//! resolved field's serializer so the emitted wire value matches the stored
//! encoding. A constant on the left is normalized by mirroring the operator
//! (`5 < x.seats` ⇔ `x.seats > 5`).

use crate::context::TranslationContext;
use crate::error::{TranslationError, TranslationResult};
use crate::expr::{BinaryOp, Expr};
use crate::filter::Filter;
use crate::resolver::resolve_field;
use skiff_model::Serializer;

fn is_field_expr(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Parameter(_) | Expr::Member { .. } | Expr::Index { .. }
    )
}

/// Translate a binary comparison.
pub(crate) fn translate(
    ctx: &TranslationContext,
    expr: &Expr,
    op: BinaryOp,
    left: &Expr,
    right: &Expr,
) -> TranslationResult<Filter> {
    let (field, value, op) = match (left, right) {
        (field_expr, Expr::Constant(constant)) if is_field_expr(field_expr) => {
            let field = resolve_field(ctx, field_expr)?;
            let value = field.serializer.serialize(constant)?;
            (field, value, op)
        }
        (Expr::Constant(constant), field_expr) if is_field_expr(field_expr) => {
            let field = resolve_field(ctx, field_expr)?;
            let value = field.serializer.serialize(constant)?;
            (field, value, op.mirrored())
        }
        _ => {
            return Err(TranslationError::unsupported(
                expr.clone(),
                "a comparison requires a document field on one side and a constant on the other",
            ));
        }
    };

    Ok(match op {
        BinaryOp::Eq => Filter::eq(field.path, value),
        BinaryOp::Ne => Filter::ne(field.path, value),
        BinaryOp::Lt => Filter::lt(field.path, value),
        BinaryOp::Lte => Filter::lte(field.path, value),
        BinaryOp::Gt => Filter::gt(field.path, value),
        BinaryOp::Gte => Filter::gte(field.path, value),
        BinaryOp::And | BinaryOp::Or => {
            return Err(TranslationError::unsupported(
                expr.clone(),
                "not a comparison operator",
            ));
        }
    })
}
