//! RDF 1.1 / Turtle 1.1 validator.
//!
//! Parses the Turtle and N-Triples schema artifacts with sophia and checks
//! that both yield the triples the live catalogue serializes to.

use std::path::Path;

use anyhow::{Context, Result};
use hqdm_ontology::serializer::ntriples::schema_to_ntriples;
use hqdm_ontology::Ontology;
use sophia_api::graph::Graph;
use sophia_api::source::TripleSource;
use sophia_inmem::graph::LightGraph;
use sophia_turtle::parser::{nt, turtle};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "rdf";

/// Parses a Turtle document and returns its triple count.
pub(crate) fn turtle_triple_count(src: &str) -> std::result::Result<usize, String> {
    let graph: LightGraph = turtle::parse_str(src)
        .collect_triples()
        .map_err(|e| e.to_string())?;
    Ok(graph.triples().count())
}

/// Parses an N-Triples document and returns its triple count.
pub(crate) fn ntriples_triple_count(src: &str) -> std::result::Result<usize, String> {
    let graph: LightGraph = nt::parse_str(src)
        .collect_triples()
        .map_err(|e| e.to_string())?;
    Ok(graph.triples().count())
}

/// Validates `hqdm.ttl` and `hqdm.nt` in `artifacts`.
///
/// # Errors
///
/// Returns an error if an artifact exists but cannot be read.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let expected = schema_to_ntriples(Ontology::hqdm()).lines().count();

    let turtle = parse_artifact(artifacts, "hqdm.ttl", turtle_triple_count, &mut report)?;
    let ntriples = parse_artifact(artifacts, "hqdm.nt", ntriples_triple_count, &mut report)?;

    if let (Some(turtle), Some(ntriples)) = (turtle, ntriples) {
        if turtle == ntriples && ntriples == expected {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("Turtle and N-Triples agree on {expected} triples"),
            ));
        } else {
            report.push(TestResult::fail(
                VALIDATOR,
                format!(
                    "Triple counts disagree: hqdm.ttl {turtle}, hqdm.nt {ntriples}, catalogue {expected}"
                ),
            ));
        }
    }

    Ok(report)
}

fn parse_artifact(
    artifacts: &Path,
    name: &str,
    parse: fn(&str) -> std::result::Result<usize, String>,
    report: &mut ConformanceReport,
) -> Result<Option<usize>> {
    let path = artifacts.join(name);
    if !path.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{name} not found in artifacts directory"),
        ));
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match parse(&content) {
        Ok(count) => {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("{name} parses ({count} triples)"),
            ));
            Ok(Some(count))
        }
        Err(e) => {
            report.push(TestResult::fail_with_details(
                VALIDATOR,
                format!("{name} does not parse"),
                vec![e],
            ));
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hqdm_ontology::serializer::turtle::schema_to_turtle;

    #[test]
    fn live_schema_serializations_agree() {
        let ontology = Ontology::hqdm();
        let nt = schema_to_ntriples(ontology);
        let expected = nt.lines().count();
        assert_eq!(ntriples_triple_count(&nt), Ok(expected));
        assert_eq!(turtle_triple_count(&schema_to_turtle(ontology)), Ok(expected));
    }

    #[test]
    fn parse_errors_are_reported() {
        assert!(turtle_triple_count("<a> <b> .").is_err());
        assert!(ntriples_triple_count("not a triple").is_err());
    }

    #[test]
    fn missing_artifacts_fail() {
        let dir = std::env::temp_dir().join("hqdm-conformance-no-artifacts");
        let report = validate(&dir).ok().unwrap_or_default();
        assert_eq!(report.failure_count(), 2);
    }
}
