//! Check benchmark harness.
//!
//! For each named case a conforming value is created once, then checked
//! repeatedly by the baseline document validator and by the compiled
//! checker. A rejection by either backend means the backends disagree with
//! the value creator, which invalidates the whole run.

use std::time::Instant;

use schema_algebra::{is_schema, Schema};
use serde::Serialize;
use tracing::info;

use crate::baseline::JsonSchemaValidator;
use crate::compiler::TypeCompiler;
use crate::error::CheckError;
use crate::value::ValueCreate;

/// Iteration count and elapsed wall time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Measurement {
    pub iterations: u64,
    pub completed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    #[serde(rename = "type")]
    pub type_: String,
    pub baseline: Measurement,
    pub candidate: Measurement,
}

#[derive(Debug, Clone)]
pub struct Case {
    pub name: String,
    pub schema: Schema,
}

impl Case {
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub iterations: u64,
    /// Only cases whose name contains this substring are run.
    pub filter: Option<String>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 100_000,
            filter: None,
        }
    }
}

impl BenchConfig {
    fn selects(&self, case: &Case) -> bool {
        self.filter
            .as_deref()
            .map_or(true, |f| case.name.contains(f))
    }
}

/// Runs `f` once as a sanity check, then `iterations` more times.
fn measure<F: FnMut() -> bool>(
    case: &str,
    backend: &'static str,
    iterations: u64,
    mut f: F,
) -> Result<Measurement, CheckError> {
    let rejected = || CheckError::Rejected {
        case: case.to_string(),
        backend,
    };
    if !f() {
        return Err(rejected());
    }
    let start = Instant::now();
    for _ in 0..iterations {
        if !f() {
            return Err(rejected());
        }
    }
    Ok(Measurement {
        iterations,
        completed: start.elapsed().as_millis() as u64,
    })
}

pub fn measure_case(case: &Case, iterations: u64) -> Result<CheckResult, CheckError> {
    if !is_schema(&case.schema) {
        return Err(CheckError::InvalidSchema {
            case: case.name.clone(),
        });
    }
    info!(case = %case.name, iterations, "measuring");
    let value = ValueCreate::new().create(&case.schema)?;

    let baseline = JsonSchemaValidator::from_schema(&case.schema)?;
    let baseline = measure(&case.name, "baseline", iterations, || baseline.validate(&value))?;

    let candidate = TypeCompiler::compile(&case.schema)?;
    let candidate = measure(&case.name, "candidate", iterations, || candidate.check(&value))?;

    Ok(CheckResult {
        type_: case.name.clone(),
        baseline,
        candidate,
    })
}

/// Lazily measures every selected case in order. Callers stop at the first
/// error to abort the run.
pub fn execute<'a>(
    cases: &'a [Case],
    config: &'a BenchConfig,
) -> impl Iterator<Item = Result<CheckResult, CheckError>> + 'a {
    cases
        .iter()
        .filter(move |case| config.selects(case))
        .map(move |case| measure_case(case, config.iterations))
}

/// Measures every selected case, failing on the first error.
pub fn run(cases: &[Case], config: &BenchConfig) -> Result<Vec<CheckResult>, CheckError> {
    execute(cases, config).collect()
}
