//! Ontology inventory validator.
//!
//! Verifies the catalogue counts:
//! - 10 schema modules
//! - 75 classes
//! - 27 properties
//! - 33 typed builders
//!
//! and that the built JSON-LD artifact declares the same classes and
//! properties.

use std::path::Path;

use anyhow::{Context, Result};
use hqdm_ontology::builder::manifests;
use hqdm_ontology::Ontology;
use serde_json::Value;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "inventory";

const EXPECTED_MODULES: usize = 10;
const EXPECTED_CLASSES: usize = 75;
const EXPECTED_PROPERTIES: usize = 27;
const EXPECTED_BUILDERS: usize = 33;

/// Validates the live inventory and the `hqdm.json` artifact.
///
/// # Errors
///
/// Returns an error if the artifact exists but cannot be read or parsed.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    validate_live_counts(&mut report);

    let json_path = artifacts.join("hqdm.json");
    if !json_path.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            "hqdm.json not found in artifacts directory",
        ));
        return Ok(report);
    }

    let content = std::fs::read_to_string(&json_path)
        .with_context(|| format!("Failed to read {}", json_path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", json_path.display()))?;

    validate_json_inventory(&value, &mut report);

    Ok(report)
}

/// Checks the counts of the live catalogue.
pub(crate) fn validate_live_counts(report: &mut ConformanceReport) {
    let ontology = Ontology::hqdm();
    check_count(report, "modules", ontology.modules.len(), EXPECTED_MODULES);
    check_count(report, "classes", ontology.class_count(), EXPECTED_CLASSES);
    check_count(
        report,
        "properties",
        ontology.property_count(),
        EXPECTED_PROPERTIES,
    );
    check_count(report, "typed builders", manifests().len(), EXPECTED_BUILDERS);
}

fn check_count(report: &mut ConformanceReport, label: &str, actual: usize, expected: usize) {
    if actual == expected {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("Correct {label} count: {actual}"),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("Wrong {label} count: expected {expected}, got {actual}"),
        ));
    }
}

/// Returns true if a JSON-LD node's `@type` is `target`, in string or array
/// form.
fn node_has_type(node: &Value, target: &str) -> bool {
    match node.get("@type") {
        Some(Value::String(t)) => t == target,
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some(target)),
        _ => false,
    }
}

fn validate_json_inventory(value: &Value, report: &mut ConformanceReport) {
    let Some(graph) = value.get("@graph").and_then(Value::as_array) else {
        report.push(TestResult::fail(
            VALIDATOR,
            "JSON-LD artifact missing @graph array",
        ));
        return;
    };

    let classes = graph
        .iter()
        .filter(|node| node_has_type(node, "owl:Class"))
        .count();
    let properties = graph
        .iter()
        .filter(|node| node_has_type(node, "owl:ObjectProperty"))
        .count();

    check_count(report, "classes (JSON-LD)", classes, EXPECTED_CLASSES);
    check_count(report, "properties (JSON-LD)", properties, EXPECTED_PROPERTIES);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hqdm_ontology::serializer::jsonld::schema_to_json_ld;

    #[test]
    fn live_schema_json_ld_matches_inventory() {
        let mut report = ConformanceReport::new();
        validate_json_inventory(&schema_to_json_ld(Ontology::hqdm()), &mut report);
        assert_eq!(report.pass_count(), 2, "{:#?}", report.results);
    }

    #[test]
    fn type_may_be_an_array() {
        let node = serde_json::json!({ "@type": ["owl:Class", "rdfs:Class"] });
        assert!(node_has_type(&node, "rdfs:Class"));
        assert!(!node_has_type(&node, "owl:ObjectProperty"));
    }
}
