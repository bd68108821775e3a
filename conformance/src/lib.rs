//! HQDM conformance suite.
//!
//! This crate is the workspace-wide validator. It checks that the schema
//! tables, the typed builders, and the serialized artifacts agree with each
//! other, and that the workspace sources follow the project's conventions.
//!
//! # Conformance Scope
//!
//! | Component | Standard |
//! |-----------|----------|
//! | Schema tables | Rooted acyclic hierarchy, label-ordered rule tables |
//! | Typed builders | One setter per rule, typed by the rule range |
//! | Instance graphs | Fixture scenarios build, close, and round-trip through RDF |
//! | Ontology (JSON-LD) | Inventory counts |
//! | Ontology (Turtle/N-Triples) | RDF 1.1, Turtle 1.1 |
//! | Rust source | Doc comments, thiserror, clippy deny list, edition 2021 |
//!
//! # Entry Point
//!
//! ```no_run
//! use hqdm_conformance::{WorkspacePaths, run_all};
//! use std::path::PathBuf;
//!
//! # fn main() -> anyhow::Result<()> {
//! let paths = WorkspacePaths {
//!     workspace: PathBuf::from("."),
//!     artifacts: PathBuf::from("public"),
//! };
//! let report = run_all(&paths)?;
//! assert!(report.all_passed());
//! # Ok(())
//! # }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod fixtures;
pub mod report;
pub mod validators;

pub use report::{ConformanceReport, Severity, TestResult};

/// Paths required by the conformance runner.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    /// Root of the Rust workspace (contains Cargo.toml, ontology/, clients/).
    pub workspace: std::path::PathBuf,
    /// Directory containing built artifacts (hqdm.json, hqdm.ttl, hqdm.nt).
    pub artifacts: std::path::PathBuf,
}

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Schema tables (live catalogue, no file I/O)
/// 2. Typed builder manifests (live catalogue)
/// 3. Instance fixtures and their serializations
/// 4. Inventory counts, live and in `hqdm.json`
/// 5. RDF 1.1 / Turtle 1.1 artifacts
/// 6. Rust source conventions
///
/// # Errors
///
/// Returns an error only if a file system operation fails.
pub fn run_all(paths: &WorkspacePaths) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    tracing::info!(
        workspace = %paths.workspace.display(),
        artifacts = %paths.artifacts.display(),
        "running conformance suite"
    );

    report.extend(validators::schema::validate());
    report.extend(validators::builders::validate());
    report.extend(validators::instances::validate());
    report.extend(validators::inventory::validate(&paths.artifacts)?);
    report.extend(validators::rdf::validate(&paths.artifacts)?);
    report.extend(validators::source::validate(&paths.workspace)?);

    tracing::info!(summary = %report.summary(), "conformance suite finished");

    Ok(report)
}

#[cfg(test)]
mod tests_unit {
    use super::*;

    fn assert_no_failures(report: &ConformanceReport, what: &str) {
        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "{what} failures: {failures:#?}");
    }

    #[test]
    fn catalogue_inventory() {
        let mut report = ConformanceReport::new();
        validators::inventory::validate_live_counts(&mut report);
        assert_no_failures(&report, "Inventory");
        assert_eq!(report.pass_count(), 4);
    }

    #[test]
    fn schema_tables_pass() {
        assert_no_failures(&validators::schema::validate(), "Schema");
    }

    #[test]
    fn builder_manifests_pass() {
        let report = validators::builders::validate();
        assert_no_failures(&report, "Builder");
        assert_eq!(report.pass_count(), 34);
    }

    #[test]
    fn instance_fixtures_pass() {
        let report = validators::instances::validate();
        assert_no_failures(&report, "Instance");
        assert_eq!(
            report.pass_count(),
            2 * fixtures::FIXTURES.len() + fixtures::NEGATIVE_FIXTURES.len()
        );
    }

    #[test]
    fn workspace_sources_pass() {
        let workspace = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
        match validators::source::validate(&workspace) {
            Ok(report) => assert_no_failures(&report, "Source"),
            Err(e) => unreachable!("source validator failed: {e}"),
        }
    }
}
