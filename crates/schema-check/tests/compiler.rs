//! Integration tests for compiled checkers and the baseline validator.

use schema_algebra::{partial, KeySet, Mapping, Options, RecursionId, Schema, SchemaBuilder};
use schema_check::{CheckError, JsonSchemaValidator, TypeCompiler};
use serde_json::{json, Value};

fn t() -> SchemaBuilder {
    SchemaBuilder::new()
}

/// Both backends must agree with `expected` for every value.
fn assert_checks(schema: &Schema, expected: bool, values: &[Value]) {
    let compiled = TypeCompiler::compile(schema).unwrap();
    let baseline = JsonSchemaValidator::from_schema(schema).unwrap();
    for value in values {
        assert_eq!(
            compiled.check(value),
            expected,
            "compiled checker on {value} for {:?}",
            schema.to_json()
        );
        assert_eq!(
            baseline.validate(value),
            expected,
            "baseline validator on {value} for {:?}",
            schema.to_json()
        );
    }
}

// ── Primitives ───────────────────────────────────────────────────────────────

#[test]
fn primitives() {
    assert_checks(&t().str(), true, &[json!(""), json!("abc")]);
    assert_checks(&t().str(), false, &[json!(1), json!(null), json!([])]);
    assert_checks(&t().num(), true, &[json!(1), json!(-2.5)]);
    assert_checks(&t().int(), true, &[json!(1), json!(-3), json!(4.0)]);
    assert_checks(&t().int(), false, &[json!(1.5), json!("1")]);
    assert_checks(&t().bool(), true, &[json!(true)]);
    assert_checks(&t().null(), true, &[json!(null)]);
    assert_checks(&t().null(), false, &[json!(0)]);
    assert_checks(&t().any(), true, &[json!(null), json!({ "a": 1 })]);
    assert_checks(&t().never(), false, &[json!(null), json!(1)]);
    assert_checks(&t().Literal("x", None), true, &[json!("x")]);
    assert_checks(&t().Literal("x", None), false, &[json!("y")]);
}

#[test]
fn numeric_and_length_bounds() {
    let n = t().Number(Some(Options::new().with("minimum", 1).with("maximum", 3)));
    assert_checks(&n, true, &[json!(1), json!(3)]);
    assert_checks(&n, false, &[json!(0), json!(4)]);

    let s = t().String(Some(Options::new().with("minLength", 2)));
    assert_checks(&s, true, &[json!("ab")]);
    assert_checks(&s, false, &[json!("a")]);
}

#[test]
fn arrays() {
    let a = t().Array(t().num(), None);
    assert_checks(&a, true, &[json!([]), json!([1, 2])]);
    assert_checks(&a, false, &[json!([1, "2"]), json!({})]);
}

// ── Objects ──────────────────────────────────────────────────────────────────

#[test]
fn required_and_optional_properties() {
    let o = t()
        .Object([("a", t().str()), ("b", t().Optional(t().num()))], None)
        .unwrap();
    assert_checks(&o, true, &[json!({ "a": "" }), json!({ "a": "", "b": 1, "c": 0 })]);
    assert_checks(&o, false, &[json!({}), json!({ "a": "", "b": "x" }), json!([])]);
}

#[test]
fn closed_objects_reject_unknown_keys() {
    let o = t()
        .Object(
            [("a", t().str())],
            Some(Options::new().with("additionalProperties", false)),
        )
        .unwrap();
    assert_checks(&o, true, &[json!({ "a": "" })]);
    assert_checks(&o, false, &[json!({ "a": "", "b": 1 })]);
}

#[test]
fn partial_output_accepts_empty_objects() {
    let o = t()
        .Object([("a", t().str()), ("b", t().Readonly(t().num()))], None)
        .unwrap();
    assert_checks(&o, false, &[json!({})]);
    let p = partial(&o, None).unwrap();
    assert_checks(&p, true, &[json!({}), json!({ "b": 1 })]);
    assert_checks(&p, false, &[json!({ "b": "1" })]);
}

// ── Composites ───────────────────────────────────────────────────────────────

#[test]
fn unions_and_intersections() {
    let u = t().Union(vec![t().str(), t().num()], None);
    assert_checks(&u, true, &[json!("a"), json!(1)]);
    assert_checks(&u, false, &[json!(null)]);

    let i = t().Intersect(
        vec![
            t().Object([("x", t().num())], None).unwrap(),
            t().Object([("y", t().str())], None).unwrap(),
        ],
        None,
    );
    assert_checks(&i, true, &[json!({ "x": 1, "y": "" })]);
    assert_checks(&i, false, &[json!({ "x": 1 })]);
}

#[test]
fn recursive_schemas() {
    let tree = t()
        .recursive(|this| {
            t().Object(
                [("id", t().str()), ("nodes", t().Array(this, None))],
                None,
            )
        })
        .unwrap();
    assert_checks(
        &tree,
        true,
        &[
            json!({ "id": "a", "nodes": [] }),
            json!({ "id": "a", "nodes": [{ "id": "b", "nodes": [{ "id": "c", "nodes": [] }] }] }),
        ],
    );
    assert_checks(
        &tree,
        false,
        &[json!({ "id": "a", "nodes": [{ "id": 1, "nodes": [] }] })],
    );
}

#[test]
fn checker_outlives_schema_and_crosses_threads() {
    let checker = {
        let list = t()
            .recursive(|this| t().Object([("next", t().Optional(this))], None))
            .unwrap();
        TypeCompiler::compile(&list).unwrap()
    };
    let handle = std::thread::spawn(move || checker.check(&json!({ "next": { "next": {} } })));
    assert!(handle.join().unwrap());
}

// ── Errors ───────────────────────────────────────────────────────────────────

#[test]
fn dangling_self_reference_fails_to_compile() {
    let o = t()
        .Object([("next", t().This(RecursionId::new("Nowhere")))], None)
        .unwrap();
    assert!(matches!(
        TypeCompiler::compile(&o),
        Err(CheckError::UnresolvedReference(id)) if id == "Nowhere"
    ));
}

#[test]
fn deferred_results_are_not_compilable() {
    let mapping = Mapping::new("id", |_| Ok(SchemaBuilder::new().str()));
    let deferred = t().Deferred(KeySet::new(["a"]).unwrap(), mapping);
    assert!(matches!(
        TypeCompiler::compile(&deferred),
        Err(CheckError::Unsupported { .. })
    ));
    assert!(matches!(
        JsonSchemaValidator::from_schema(&deferred),
        Err(CheckError::Schema(_))
    ));
}

#[test]
fn invalid_schema_fails_to_compile() {
    let bad = Schema {
        kind: schema_algebra::SchemaKind::String,
        options: Options::new().with("$transform", true),
    };
    assert!(matches!(
        TypeCompiler::compile(&bad),
        Err(CheckError::Schema(schema_algebra::SchemaError::InvalidSchemaKind { .. }))
    ));
}
