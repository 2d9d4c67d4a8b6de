//! Integration tests for value creation.

use schema_algebra::{partial, Options, RecursionId, SchemaBuilder};
use schema_check::{cases, CheckError, JsonSchemaValidator, TypeCompiler, ValueCreate};
use serde_json::json;

fn t() -> SchemaBuilder {
    SchemaBuilder::new()
}

fn create(schema: &schema_algebra::Schema) -> serde_json::Value {
    ValueCreate::new().create(schema).unwrap()
}

#[test]
fn zero_values() {
    assert_eq!(create(&t().str()), json!(""));
    assert_eq!(create(&t().num()), json!(0.0));
    assert_eq!(create(&t().int()), json!(0));
    assert_eq!(create(&t().bool()), json!(false));
    assert_eq!(create(&t().null()), json!(null));
    assert_eq!(create(&t().Literal(7, None)), json!(7));
    assert_eq!(create(&t().Array(t().str(), None)), json!([]));
}

#[test]
fn bounds_and_defaults_are_respected() {
    let s = t().String(Some(Options::new().with("minLength", 3)));
    assert_eq!(create(&s), json!("   "));
    let n = t().Integer(Some(Options::new().with("minimum", 2.5)));
    assert_eq!(create(&n), json!(3));
    let d = t().Number(Some(Options::new().with("default", 42)));
    assert_eq!(create(&d), json!(42));
}

#[test]
fn objects_get_required_properties_only() {
    let o = t()
        .Object(
            [
                ("a", t().str()),
                ("b", t().Optional(t().num())),
                ("c", t().Readonly(t().bool())),
            ],
            None,
        )
        .unwrap();
    assert_eq!(create(&o), json!({ "a": "", "c": false }));
    assert_eq!(create(&partial(&o, None).unwrap()), json!({}));
}

#[test]
fn intersections_merge_objects() {
    let i = t().Intersect(
        vec![
            t().Object([("x", t().num())], None).unwrap(),
            t().Object([("y", t().str())], None).unwrap(),
        ],
        None,
    );
    assert_eq!(create(&i), json!({ "x": 0.0, "y": "" }));

    let clash = t().Intersect(vec![t().str(), t().num()], None);
    assert!(matches!(
        ValueCreate::new().create(&clash),
        Err(CheckError::Uninhabited { .. })
    ));
}

#[test]
fn never_is_uninhabited() {
    assert!(matches!(
        ValueCreate::new().create(&t().never()),
        Err(CheckError::Uninhabited { .. })
    ));
}

#[test]
fn required_self_reference_hits_the_depth_limit() {
    let id = RecursionId::new("Loop");
    let body = t().Object([("next", t().This(id.clone()))], None).unwrap();
    let looping = t().Recursive(id, body, None);
    assert!(matches!(
        ValueCreate::new().with_max_depth(4).create(&looping),
        Err(CheckError::RecursionLimit { limit: 4 })
    ));
}

#[test]
fn optional_self_reference_terminates() {
    let list = t()
        .recursive(|this| t().Object([("value", t().num()), ("next", t().Optional(this))], None))
        .unwrap();
    assert_eq!(create(&list), json!({ "value": 0.0 }));
}

#[test]
fn created_values_pass_both_backends_for_every_case() {
    for case in cases::all().unwrap() {
        let value = create(&case.schema);
        let compiled = TypeCompiler::compile(&case.schema).unwrap();
        let baseline = JsonSchemaValidator::from_schema(&case.schema).unwrap();
        assert!(compiled.check(&value), "compiled rejected {}", case.name);
        assert!(baseline.validate(&value), "baseline rejected {}", case.name);
    }
}
