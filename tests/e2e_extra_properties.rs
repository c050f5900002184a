//! End-to-end tests for extra-property classification.
//!
//! Each test exercises: JSON -> NativeProperties -> parse_extra_options,
//! with a small attribute-aware resolver standing in for the renderer.

use operation_props::{
    is_expression_property, parse_extra_options, parse_native_properties, Error,
    ExtraPropertyEntry, ExtraPropertyParser, NativeProperties, NativeValue, PrimitiveValue,
    PropertyMap, Result, StructuredValue,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ============================================================================
// Helper: attributes and a resolver rendering attribute references by name.
// ============================================================================

#[derive(Debug, Clone)]
struct Attribute {
    id: String,
    name: String,
}

fn attributes() -> Vec<Attribute> {
    vec![
        Attribute { id: "attr-1".into(), name: "customer_id".into() },
        Attribute { id: "attr-2".into(), name: "amount".into() },
    ]
}

fn render(raw: &PropertyMap, attrs: &[Attribute]) -> Result<String> {
    let hint = raw.get("_typeHint").and_then(NativeValue::as_str).unwrap_or_default();
    match hint {
        "expr.AttrRef" => {
            let id = raw
                .get("refId")
                .and_then(NativeValue::as_str)
                .ok_or_else(|| Error::ExpressionError("attribute reference without refId".into()))?;
            attrs
                .iter()
                .find(|a| a.id == id)
                .map(|a| a.name.clone())
                .ok_or_else(|| Error::ExpressionError(format!("unknown attribute {id}")))
        }
        "expr.Literal" => raw
            .get("value")
            .map(|v| v.to_string())
            .ok_or_else(|| Error::ExpressionError("literal without value".into())),
        other => Err(Error::ExpressionError(format!("unsupported expression {other}"))),
    }
}

fn props(json: &str) -> NativeProperties {
    parse_native_properties(json).unwrap()
}

// ============================================================================
// 1. Null and undefined values are dropped
// ============================================================================

#[test]
fn test_null_values_are_filtered() {
    let input = props(r#"{"a": null, "c": 1}"#);
    let mut with_absent = input.clone();
    with_absent.insert("b".into(), NativeValue::from(None::<i64>));

    let out = parse_extra_options(&with_absent, &attributes(), &render);

    assert_eq!(out.primitive, vec![ExtraPropertyEntry::new("c", PrimitiveValue::Int(1))]);
    assert!(out.expression.is_empty());
    assert!(out.json.is_empty());
}

// ============================================================================
// 2. Strings and numbers keep key order and raw labels
// ============================================================================

#[test]
fn test_primitives_keep_key_order() {
    let out = parse_extra_options(&props(r#"{"count": 5, "name": "x"}"#), &attributes(), &render);

    assert_eq!(
        out.primitive,
        vec![
            ExtraPropertyEntry::new("count", PrimitiveValue::Int(5)),
            ExtraPropertyEntry::new("name", PrimitiveValue::String("x".into())),
        ]
    );
}

#[test]
fn test_primitive_labels_are_not_humanized() {
    let out = parse_extra_options(&props(r#"{"maxRows": 2.5}"#), &attributes(), &render);
    assert_eq!(out.primitive, vec![ExtraPropertyEntry::new("maxRows", PrimitiveValue::Float(2.5))]);
}

// ============================================================================
// 3. Expressions resolve against the attribute list
// ============================================================================

#[test]
fn test_expression_detection_and_resolution() {
    let input = props(r#"{"cond": {"_typeHint": "expr.Literal", "value": true, "dataType": "bool"}}"#);
    let raw = input["cond"].as_map().unwrap().clone();

    let out = parse_extra_options(&input, &attributes(), &render);

    assert_eq!(out.expression.len(), 1);
    assert_eq!(out.expression[0].label, "Cond");
    assert_eq!(out.expression[0].value.value, "true");
    assert_eq!(out.expression[0].value.raw_value, raw);
    assert!(out.primitive.is_empty());
    assert!(out.json.is_empty());
}

#[test]
fn test_attribute_reference_uses_attribute_names() {
    let input = props(r#"{"groupingKey": {"_typeHint": "expr.AttrRef", "refId": "attr-2"}}"#);
    let out = parse_extra_options(&input, &attributes(), &render);

    assert_eq!(out.expression[0].label, "Grouping Key");
    assert_eq!(out.expression[0].value.value, "amount");
}

#[test]
fn test_serialized_output_shape() {
    let input = props(r#"{"cond": {"_typeHint": "expr.Literal", "value": 1}, "ids": [1]}"#);
    let out = parse_extra_options(&input, &attributes(), &render);

    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        serde_json::json!({
            "primitive": [],
            "expression": [{
                "label": "Cond",
                "value": {"value": "1", "rawValue": {"_typeHint": "expr.Literal", "value": 1}}
            }],
            "json": [{"label": "Ids", "value": [1]}]
        })
    );
}

// ============================================================================
// 4. Arrays and plain objects fall back to the json bucket
// ============================================================================

#[test]
fn test_structured_fallback() {
    let out = parse_extra_options(&props(r#"{"tags": ["a", "b"]}"#), &attributes(), &render);

    assert_eq!(
        out.json,
        vec![ExtraPropertyEntry::new(
            "Tags",
            StructuredValue::List(vec!["a".into(), "b".into()])
        )]
    );
}

#[test]
fn test_malformed_type_hint_is_json() {
    let input = props(
        r#"{
            "numericHint": {"_typeHint": 3},
            "otherNamespace": {"_typeHint": "dsl.SortOrder", "direction": "ASC"},
            "noHint": {"a": 1}
        }"#,
    );
    let out = parse_extra_options(&input, &attributes(), &render);

    assert!(out.expression.is_empty());
    let labels: Vec<&str> = out.json.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Numeric Hint", "Other Namespace", "No Hint"]);
}

// ============================================================================
// 5. A resolver failure drops only the failing property
// ============================================================================

#[test]
fn test_resolver_failure_isolation() {
    let input = props(
        r#"{
            "broken": {"_typeHint": "expr.AttrRef", "refId": "attr-404"},
            "working": {"_typeHint": "expr.AttrRef", "refId": "attr-1"},
            "limit": 10
        }"#,
    );

    let report = ExtraPropertyParser::default().parse_with_report(&input, &attributes(), &render);

    assert_eq!(report.properties.expression.len(), 1);
    assert_eq!(report.properties.expression[0].label, "Working");
    assert_eq!(report.properties.expression[0].value.value, "customer_id");
    assert_eq!(report.properties.primitive.len(), 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].property, "broken");
    assert!(report.failures[0].message.contains("unknown attribute attr-404"));
}

#[test]
fn test_failure_is_deterministic() {
    let input = props(r#"{"x": {"_typeHint": "expr.Unknown"}}"#);
    let first = parse_extra_options(&input, &attributes(), &render);
    let second = parse_extra_options(&input, &attributes(), &render);
    assert!(first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_input_is_not_mutated() {
    let input = props(r#"{"cond": {"_typeHint": "expr.Literal", "value": 1}, "tags": ["a"], "n": 1}"#);
    let before = input.clone();
    let _ = parse_extra_options(&input, &attributes(), &render);
    assert_eq!(input, before);
}

// ============================================================================
// 6. Every non-null key lands in at most one bucket
// ============================================================================

fn arb_leaf() -> impl Strategy<Value = NativeValue> {
    prop_oneof![
        Just(NativeValue::Null),
        any::<bool>().prop_map(NativeValue::Bool),
        any::<i64>().prop_map(NativeValue::Int),
        (-1.0e6f64..1.0e6f64).prop_map(NativeValue::Float),
        "[a-z]{0,6}".prop_map(NativeValue::String),
    ]
}

fn arb_value() -> impl Strategy<Value = NativeValue> {
    prop_oneof![
        arb_leaf(),
        prop::collection::vec(arb_leaf(), 0..3).prop_map(NativeValue::List),
        prop::collection::vec(("[a-z]{1,4}", arb_leaf()), 0..3)
            .prop_map(|pairs| NativeValue::Map(pairs.into_iter().collect())),
        (prop_oneof![Just("expr.Literal"), Just("expr.Bad"), Just("dsl.Other")], arb_leaf())
            .prop_map(|(hint, value)| {
                let mut m = PropertyMap::new();
                m.insert("_typeHint".into(), hint.into());
                m.insert("value".into(), value);
                NativeValue::Map(m)
            }),
    ]
}

proptest! {
    #[test]
    fn bucket_exclusivity(entries in prop::collection::vec(("[a-z]{1,5}[A-Z]?[a-z]{0,3}", arb_value()), 0..12)) {
        let input: NativeProperties = entries.into_iter().collect();
        let report = ExtraPropertyParser::default().parse_with_report(&input, &attributes(), &render);
        let out = &report.properties;

        let accounted = out.len() + report.failures.len() + report.skipped.len();
        prop_assert_eq!(accounted, input.len());

        let non_null = input.values().filter(|v| !v.is_null()).count();
        prop_assert!(out.len() <= non_null);
        let primitives = input
            .values()
            .filter(|v| matches!(v, NativeValue::String(_) | NativeValue::Int(_) | NativeValue::Float(_)))
            .count();
        let structured = input
            .values()
            .filter(|v| match v {
                NativeValue::List(_) => true,
                NativeValue::Map(m) => !is_expression_property(m),
                _ => false,
            })
            .count();
        prop_assert_eq!(out.primitive.len(), primitives);
        prop_assert_eq!(out.json.len(), structured);

        for key in &report.skipped {
            prop_assert!(matches!(input[key.as_str()], NativeValue::Null | NativeValue::Bool(_)));
        }
    }
}
