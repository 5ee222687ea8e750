//! Filter AST to BSON document rendering.

use bson::{Bson, Document, doc};
use skiff_filter::{ComparisonOp, Filter};
use skiff_model::Value;

/// Render a filter AST as a BSON filter document.
///
/// Rendering is total over valid filter ASTs: every node the translation
/// engine can construct has exactly one document form. Child order inside
/// `$and`/`$or` arrays mirrors the AST's child order.
pub fn render(filter: &Filter) -> Document {
    let mut out = Document::new();
    match filter {
        Filter::Exists { field, exists } => {
            out.insert(field.dotted(), doc! { "$exists": *exists });
        }
        Filter::Eq { field, value } => {
            out.insert(field.dotted(), value_to_bson(value));
        }
        Filter::Ne { field, value } => {
            out.insert(field.dotted(), doc! { "$ne": value_to_bson(value) });
        }
        Filter::Comparison { op, field, value } => {
            let mut inner = Document::new();
            inner.insert(comparison_operator(*op), value_to_bson(value));
            out.insert(field.dotted(), inner);
        }
        Filter::In { field, values } => {
            let values: Vec<Bson> = values.iter().map(value_to_bson).collect();
            out.insert(field.dotted(), doc! { "$in": values });
        }
        Filter::Nin { field, values } => {
            let values: Vec<Bson> = values.iter().map(value_to_bson).collect();
            out.insert(field.dotted(), doc! { "$nin": values });
        }
        Filter::Regex {
            field,
            pattern,
            options,
        } => {
            let inner = if options.is_empty() {
                doc! { "$regex": pattern.as_str() }
            } else {
                doc! { "$regex": pattern.as_str(), "$options": options.as_str() }
            };
            out.insert(field.dotted(), inner);
        }
        Filter::And(children) => {
            if !children.is_empty() {
                let children: Vec<Bson> =
                    children.iter().map(|c| Bson::Document(render(c))).collect();
                out.insert("$and", children);
            }
        }
        Filter::Or(children) => {
            if children.is_empty() {
                out.insert("$nor", vec![Bson::Document(Document::new())]);
            } else {
                let children: Vec<Bson> =
                    children.iter().map(|c| Bson::Document(render(c))).collect();
                out.insert("$or", children);
            }
        }
        Filter::Not(inner) => {
            out.insert("$nor", vec![Bson::Document(render(inner))]);
        }
    }
    out
}

/// Convert a wire value to its BSON form.
pub fn value_to_bson(value: &Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(v) => Bson::Boolean(*v),
        Value::Int32(v) => Bson::Int32(*v),
        Value::Int64(v) => Bson::Int64(*v),
        Value::Double(v) => Bson::Double(*v),
        Value::String(v) => Bson::String(v.clone()),
        Value::Array(items) => Bson::Array(items.iter().map(value_to_bson).collect()),
        Value::Document(entries) => {
            let mut doc = Document::new();
            for (key, value) in entries {
                doc.insert(key.clone(), value_to_bson(value));
            }
            Bson::Document(doc)
        }
    }
}

fn comparison_operator(op: ComparisonOp) -> &'static str {
    match op {
        ComparisonOp::Lt => "$lt",
        ComparisonOp::Lte => "$lte",
        ComparisonOp::Gt => "$gt",
        ComparisonOp::Gte => "$gte",
    }
}
