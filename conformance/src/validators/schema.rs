//! Schema table validator.
//!
//! Checks the class hierarchy and the cardinality rule tables of the live
//! catalogue:
//! - every `HqdmClass` is catalogued exactly once
//! - every superclass and rule range is a catalogued class
//! - the hierarchy is acyclic and every class reaches `thing`
//! - rule tables are strictly ascending by property label

use std::collections::BTreeMap;

use hqdm_ontology::{HqdmClass, Ontology};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "schema";

/// Validates the schema tables of the live catalogue.
pub fn validate() -> ConformanceReport {
    let ontology = Ontology::hqdm();
    let mut report = ConformanceReport::new();

    check_catalogue(ontology, &mut report);
    check_references(ontology, &mut report);
    check_hierarchy(ontology, &mut report);
    check_rule_order(ontology, &mut report);

    report
}

fn check_catalogue(ontology: &Ontology, report: &mut ConformanceReport) {
    let mut seen: BTreeMap<HqdmClass, usize> = BTreeMap::new();
    for def in ontology.classes() {
        *seen.entry(def.class).or_default() += 1;
    }
    let mut problems: Vec<String> = seen
        .iter()
        .filter(|(_, n)| **n > 1)
        .map(|(class, n)| format!("{class} catalogued {n} times"))
        .collect();
    problems.extend(
        HqdmClass::ALL
            .iter()
            .filter(|class| !seen.contains_key(class))
            .map(|class| format!("{class} is not catalogued")),
    );
    report.push(TestResult::check(
        VALIDATOR,
        format!("All {} classes catalogued exactly once", HqdmClass::ALL.len()),
        "Class catalogue is inconsistent",
        problems,
    ));
}

fn check_references(ontology: &Ontology, report: &mut ConformanceReport) {
    let mut problems = Vec::new();
    for def in ontology.classes() {
        for parent in def.subclass_of {
            if ontology.find_class(*parent).is_none() {
                problems.push(format!("{}: superclass {parent} is not catalogued", def.class));
            }
        }
        for rule in def.rules {
            if ontology.find_class(rule.range).is_none() {
                problems.push(format!(
                    "{}: range {} of {} is not catalogued",
                    def.class, rule.range, rule.property
                ));
            }
        }
    }
    report.push(TestResult::check(
        VALIDATOR,
        format!(
            "All superclasses and {} rule ranges are catalogued classes",
            ontology.rule_count()
        ),
        "Dangling class references in schema",
        problems,
    ));
}

fn check_hierarchy(ontology: &Ontology, report: &mut ConformanceReport) {
    let mut problems = Vec::new();
    for def in ontology.classes() {
        let supers = ontology.superclasses(def.class);
        if supers.contains(&def.class) {
            problems.push(format!("{} is its own superclass", def.class));
        }
        if def.class != HqdmClass::Thing && !supers.contains(&HqdmClass::Thing) {
            problems.push(format!("{} does not reach thing", def.class));
        }
    }
    report.push(TestResult::check(
        VALIDATOR,
        "Class hierarchy is acyclic and rooted at thing",
        "Class hierarchy is malformed",
        problems,
    ));
}

fn check_rule_order(ontology: &Ontology, report: &mut ConformanceReport) {
    let mut problems = Vec::new();
    for def in ontology.classes() {
        for pair in def.rules.windows(2) {
            let (a, b) = (pair[0].property.label(), pair[1].property.label());
            if a >= b {
                problems.push(format!("{}: {a} is not before {b}", def.class));
            }
        }
    }
    report.push(TestResult::check(
        VALIDATOR,
        "Rule tables are strictly ascending by property label",
        "Rule tables are out of order or repeat a property",
        problems,
    ));
}
