//! End-to-end translation tests: DSL predicate → filter AST → BSON document.

use bson::doc;
use pretty_assertions::assert_eq;
use skiff::prelude::*;

fn restaurant_model(tags_representation: MappingRepresentation) -> SerializerHandle {
    StructSerializer::builder("Restaurant")
        .field("name", StringSerializer::shared())
        .field("seats", Int32Serializer::shared())
        .field(
            "Tags",
            MapSerializer::shared(
                tags_representation,
                StringSerializer::shared(),
                StringSerializer::shared(),
            ),
        )
        .field("reviews", VecSerializer::shared(StringSerializer::shared()))
        .shared()
}

#[test]
fn contains_key_on_document_mapping_renders_exists() {
    let ctx = TranslationContext::for_root(restaurant_model(MappingRepresentation::Document));
    let predicate = lambda("x", param("x").member("Tags").contains_key(lit("red")));

    let filter = translate_predicate(&ctx, &predicate).unwrap();
    assert_eq!(render(&filter), doc! { "Tags.red": { "$exists": true } });
}

#[test]
fn contains_key_on_array_mapping_fails_naming_the_representation() {
    let ctx =
        TranslationContext::for_root(restaurant_model(MappingRepresentation::ArrayOfDocuments));
    let predicate = lambda("x", param("x").member("Tags").contains_key(lit("red")));

    let err = translate_predicate(&ctx, &predicate).unwrap_err();
    assert!(matches!(
        err,
        TranslationError::UnsupportedRepresentation { .. }
    ));
    assert!(err.to_string().contains("array"));
}

#[test]
fn same_predicate_translates_identically_under_both_orders() {
    let ctx = TranslationContext::for_root(restaurant_model(MappingRepresentation::Document));
    let predicate = lambda(
        "x",
        param("x")
            .member("Tags")
            .contains_key(lit("red"))
            .and(param("x").member("seats").gte(lit(2))),
    );

    let first = translate_predicate(&ctx, &predicate).unwrap();
    let second = translate_predicate(&ctx, &predicate).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        render(&first),
        doc! { "$and": [
            { "Tags.red": { "$exists": true } },
            { "seats": { "$gte": 2 } },
        ] }
    );
}

#[test]
fn logical_children_render_in_source_order() {
    let ctx = TranslationContext::for_root(restaurant_model(MappingRepresentation::Document));
    let predicate = lambda(
        "x",
        param("x")
            .member("name")
            .eq(lit("Cafe"))
            .or(param("x").member("seats").lt(lit(10))),
    );

    let filter = translate_predicate(&ctx, &predicate).unwrap();
    assert_eq!(
        render(&filter),
        doc! { "$or": [
            { "name": "Cafe" },
            { "seats": { "$lt": 10 } },
        ] }
    );
}

#[test]
fn negation_renders_as_nor() {
    let ctx = TranslationContext::for_root(restaurant_model(MappingRepresentation::Document));
    let predicate = lambda("x", param("x").member("seats").eq(lit(2)).not());

    let filter = translate_predicate(&ctx, &predicate).unwrap();
    assert_eq!(render(&filter), doc! { "$nor": [ { "seats": 2 } ] });
}

#[test]
fn membership_and_patterns_render() {
    let ctx = TranslationContext::for_root(restaurant_model(MappingRepresentation::Document));

    let predicate = lambda(
        "x",
        lit(vec!["open", "busy"]).contains(param("x").member("name")),
    );
    let filter = translate_predicate(&ctx, &predicate).unwrap();
    assert_eq!(
        render(&filter),
        doc! { "name": { "$in": ["open", "busy"] } }
    );

    let predicate = lambda("x", param("x").member("reviews").contains(lit("great")));
    let filter = translate_predicate(&ctx, &predicate).unwrap();
    assert_eq!(render(&filter), doc! { "reviews": "great" });

    let predicate = lambda("x", param("x").member("name").starts_with(lit("Caf")));
    let filter = translate_predicate(&ctx, &predicate).unwrap();
    assert_eq!(render(&filter), doc! { "name": { "$regex": "^Caf" } });
}

#[test]
fn non_constant_key_fails_before_rendering() {
    let ctx = TranslationContext::for_root(restaurant_model(MappingRepresentation::Document));
    let predicate = lambda(
        "x",
        param("x")
            .member("Tags")
            .contains_key(param("x").member("name")),
    );

    let err = translate_predicate(&ctx, &predicate).unwrap_err();
    assert!(matches!(err, TranslationError::NonConstantKey { .. }));
}

#[test]
fn translation_failure_reports_offending_expression() {
    let ctx = TranslationContext::for_root(restaurant_model(MappingRepresentation::Document));
    let predicate = lambda("x", param("x").member("name").contains_key(lit("red")));

    let err = translate_predicate(&ctx, &predicate).unwrap_err();
    assert!(err.to_string().contains("x.name.contains_key(\"red\")"));
    assert!(err.to_string().contains("StringSerializer"));
}
