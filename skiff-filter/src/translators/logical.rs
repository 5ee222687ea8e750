//! Logical combinator translation.
//!
//! Operands recurse through the dispatcher; composed children keep the
//! left-to-right order of the source expression, so repeated translations of
//! the same predicate are structurally identical.

use crate::context::TranslationContext;
use crate::error::TranslationResult;
use crate::expr::Expr;
use crate::filter::Filter;
use crate::translate::translate;

/// Translate `left && right`.
pub(crate) fn and(
    ctx: &TranslationContext,
    left: &Expr,
    right: &Expr,
) -> TranslationResult<Filter> {
    let left = translate(ctx, left)?;
    let right = translate(ctx, right)?;
    Ok(Filter::and([left, right]))
}

/// Translate `left || right`.
pub(crate) fn or(
    ctx: &TranslationContext,
    left: &Expr,
    right: &Expr,
) -> TranslationResult<Filter> {
    let left = translate(ctx, left)?;
    let right = translate(ctx, right)?;
    Ok(Filter::or([left, right]))
}

/// Translate `!operand`.
pub(crate) fn not(ctx: &TranslationContext, operand: &Expr) -> TranslationResult<Filter> {
    Ok(Filter::not(translate(ctx, operand)?))
}
