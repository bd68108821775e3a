//! `hqdm-conformance` — Validates the HQDM schema tables, typed builders,
//! instance fixtures, built artifacts and workspace sources.
//!
//! **Usage:**
//! ```text
//! hqdm-conformance [--artifacts <path>] [--workspace <path>]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use hqdm_conformance::{run_all, WorkspacePaths};

/// Run the HQDM conformance suite.
#[derive(Parser)]
#[command(
    name = "hqdm-conformance",
    about = "Validate HQDM schema, builders and artifacts"
)]
struct Args {
    /// Path to the built artifacts directory (default: public/).
    #[arg(long, env = "HQDM_ARTIFACTS", default_value = "public")]
    artifacts: PathBuf,

    /// Path to the workspace root (default: current directory).
    #[arg(long, env = "HQDM_WORKSPACE", default_value = ".")]
    workspace: PathBuf,
}

fn main() -> Result<()> {
    hqdm_clients::init_tracing();
    let args = Args::parse();

    let paths = WorkspacePaths {
        workspace: args.workspace,
        artifacts: args.artifacts,
    };

    let report = run_all(&paths)?;

    println!("HQDM Conformance Report");
    println!("=======================");
    println!();

    for validator in report.validators() {
        println!("## {validator}");
        for result in report.results_for(validator) {
            println!("{result}");
        }
        println!();
    }

    println!("Summary: {}", report.summary());

    if !report.all_passed() {
        process::exit(1);
    }

    println!("All conformance checks passed.");
    Ok(())
}
