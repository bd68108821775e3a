//! Typed builder validator.
//!
//! Each typed builder publishes a manifest of its setters. This validator
//! proves the manifests agree with the rule tables they wrap.

use std::collections::BTreeSet;

use hqdm_ontology::builder::{manifests, BuilderManifest};
use hqdm_ontology::Ontology;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "builders";

/// Expected number of typed builders.
const EXPECTED_BUILDERS: usize = 33;

/// Validates every typed builder manifest against the live catalogue.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let all = manifests();

    let names: BTreeSet<&str> = all.iter().map(|m| m.builder).collect();
    let classes: BTreeSet<_> = all.iter().map(|m| m.class).collect();
    if all.len() == EXPECTED_BUILDERS && names.len() == all.len() && classes.len() == all.len() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{} typed builders, one per class", all.len()),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!(
                "Expected {EXPECTED_BUILDERS} distinct typed builders, got {} ({} names, {} classes)",
                all.len(),
                names.len(),
                classes.len()
            ),
        ));
    }

    for manifest in all {
        report.push(TestResult::check(
            VALIDATOR,
            format!(
                "{} matches the {} rule table ({} setters)",
                manifest.builder,
                manifest.class,
                manifest.setters.len()
            ),
            format!("{} disagrees with the {} rule table", manifest.builder, manifest.class),
            manifest_problems(manifest),
        ));
    }

    report
}

fn manifest_problems(manifest: &BuilderManifest) -> Vec<String> {
    let ontology = Ontology::hqdm();
    let rules = ontology.rules_for(manifest.class);
    let mut problems = Vec::new();

    if rules.len() != manifest.setters.len() {
        problems.push(format!(
            "{} rules but {} setters",
            rules.len(),
            manifest.setters.len()
        ));
    }

    for (rule, setter) in rules.iter().zip(manifest.setters) {
        if rule.property != setter.property {
            problems.push(format!(
                "{}: asserts {} where the table has {}",
                setter.method, setter.property, rule.property
            ));
            continue;
        }
        if !ontology.is_subclass_of(setter.target, rule.range) {
            problems.push(format!(
                "{}: accepts {} outside range {}",
                setter.method, setter.target, rule.range
            ));
        }
        if setter.method.ends_with("_m") != rule.is_mandatory() {
            problems.push(format!(
                "{}: suffix does not match {} cardinality",
                setter.method,
                rule.cardinality.as_str()
            ));
        }
    }

    problems
}
