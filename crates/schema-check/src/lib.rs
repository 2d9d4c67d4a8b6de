//! `schema-check` — runtime consumers of `schema-algebra` schemas.
//!
//! - [`TypeCompiler`] compiles a schema into a reusable [`Checker`].
//! - [`JsonSchemaValidator`] interprets the JSON document form of a schema and
//!   serves as the baseline the compiled checkers are measured against.
//! - [`ValueCreate`] produces a conforming value for a schema.
//! - [`bench`] measures both backends over the named [`cases`].

pub mod baseline;
pub mod bench;
pub mod cases;
pub mod compiler;
pub mod error;
pub mod keywords;
pub mod value;

pub use baseline::JsonSchemaValidator;
pub use bench::{execute, measure_case, run, BenchConfig, Case, CheckResult, Measurement};
pub use compiler::{Checker, TypeCompiler};
pub use error::CheckError;
pub use value::ValueCreate;
