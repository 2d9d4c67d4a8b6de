//! Integration tests for the check benchmark harness.

use schema_algebra::{Options, Schema, SchemaBuilder, SchemaKind};
use schema_check::{bench, cases, BenchConfig, Case, CheckError};
use serde_json::json;

fn t() -> SchemaBuilder {
    SchemaBuilder::new()
}

fn config(iterations: u64, filter: Option<&str>) -> BenchConfig {
    BenchConfig {
        iterations,
        filter: filter.map(str::to_string),
    }
}

#[test]
fn runs_every_case_and_reports_iterations() {
    let cases = cases::all().unwrap();
    let results = bench::run(&cases, &config(10, None)).unwrap();
    assert_eq!(results.len(), cases.len());
    for (case, result) in cases.iter().zip(&results) {
        assert_eq!(result.type_, case.name);
        assert_eq!(result.baseline.iterations, 10);
        assert_eq!(result.candidate.iterations, 10);
    }
}

#[test]
fn filter_selects_by_substring() {
    let cases = cases::all().unwrap();
    let results = bench::run(&cases, &config(1, Some("Partial_"))).unwrap();
    let names: Vec<&str> = results.iter().map(|r| r.type_.as_str()).collect();
    assert_eq!(names, vec!["Partial_Object", "Partial_Union", "Partial_Recursive"]);
}

#[test]
fn result_record_shape() {
    let cases = vec![Case::new("Primitive_String", t().str())];
    let result = bench::measure_case(&cases[0], 3).unwrap();
    let record = serde_json::to_value(&result).unwrap();
    assert_eq!(record["type"], json!("Primitive_String"));
    assert_eq!(record["baseline"]["iterations"], json!(3));
    assert!(record["candidate"]["completed"].is_u64());
}

#[test]
fn rejection_aborts_the_run() {
    // The default makes the sampled value a string, which the schema rejects.
    let lying = t().Number(Some(Options::new().with("default", "nope")));
    let cases = vec![
        Case::new("Bad_Default", lying),
        Case::new("Primitive_Number", t().num()),
    ];
    let cfg = config(5, None);
    let mut results = bench::execute(&cases, &cfg);
    assert!(matches!(
        results.next(),
        Some(Err(CheckError::Rejected { backend: "baseline", .. }))
    ));
    assert!(bench::run(&cases, &config(5, None)).is_err());
}

#[test]
fn invalid_case_schema_is_rejected() {
    let bad = Schema {
        kind: SchemaKind::Number,
        options: Options::new().with("required", json!([])),
    };
    let result = bench::measure_case(&Case::new("Bad_Schema", bad), 1);
    assert!(matches!(result, Err(CheckError::InvalidSchema { case }) if case == "Bad_Schema"));
}
