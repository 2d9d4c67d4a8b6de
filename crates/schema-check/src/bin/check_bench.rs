//! `check-bench` — measure baseline and compiled checkers over the built-in
//! schema cases.
//!
//! Usage:
//!   check-bench [--iterations N] [--filter SUBSTR] [--json]
//!
//! Log verbosity follows `RUST_LOG` (default `info`); logs go to stderr so
//! `--json` output stays machine-readable.

use clap::Parser;
use schema_check::{bench, cases, BenchConfig, CheckResult};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "check-bench")]
#[command(about = "Compare baseline and compiled schema checkers")]
#[command(version)]
struct Cli {
    /// Checks per backend per case
    #[arg(short, long, default_value_t = BenchConfig::default().iterations)]
    iterations: u64,

    /// Only run cases whose name contains this substring
    #[arg(short, long)]
    filter: Option<String>,

    /// Print one JSON record per case instead of a table
    #[arg(long)]
    json: bool,
}

fn fmt(n: u64) -> String {
    // comma-grouped number
    let s = n.to_string();
    let mut out = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.chars().rev().collect()
}

fn row(result: &CheckResult) {
    println!(
        "  {:<24}  {:>12}  {:>10} ms  {:>10} ms",
        result.type_,
        fmt(result.baseline.iterations),
        fmt(result.baseline.completed),
        fmt(result.candidate.completed),
    );
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = BenchConfig {
        iterations: cli.iterations,
        filter: cli.filter,
    };
    let cases = cases::all()?;

    if !cli.json {
        println!(
            "\n  {:<24}  {:>12}  {:>13}  {:>13}",
            "type", "iterations", "baseline", "candidate"
        );
        println!("  {}", "-".repeat(68));
    }
    for result in bench::execute(&cases, &config) {
        let result = result?;
        if cli.json {
            println!("{}", serde_json::to_string(&result)?);
        } else {
            row(&result);
        }
    }
    Ok(())
}
