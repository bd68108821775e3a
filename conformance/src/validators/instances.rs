//! Instance graph validator.
//!
//! Builds every fixture scenario and checks the result:
//! - the graph validates against the rule tables
//! - every asserted target is in the graph and is an instance of the rule
//!   range
//! - the Turtle and N-Triples serializations parse and carry every triple
//! - the JSON-LD serialization has one node per entity
//!
//! Negative fixtures must be refused with their expected message.

use hqdm_ontology::serializer::jsonld::graph_to_json_ld;
use hqdm_ontology::serializer::ntriples::graph_to_ntriples;
use hqdm_ontology::serializer::turtle::graph_to_turtle;
use hqdm_ontology::EntityGraph;

use crate::fixtures::{Fixture, NegativeFixture, FIXTURES, NEGATIVE_FIXTURES};
use crate::report::{ConformanceReport, TestResult};
use crate::validators::rdf::{ntriples_triple_count, turtle_triple_count};

const VALIDATOR: &str = "instances";

/// Builds and checks every fixture scenario.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    for fixture in FIXTURES {
        validate_fixture(fixture, &mut report);
    }
    for fixture in NEGATIVE_FIXTURES {
        validate_negative(fixture, &mut report);
    }
    report
}

fn validate_fixture(fixture: &Fixture, report: &mut ConformanceReport) {
    let graph = match (fixture.build)() {
        Ok(graph) => graph,
        Err(e) => {
            report.push(TestResult::fail(
                VALIDATOR,
                format!("{}: builder refused: {e}", fixture.name),
            ));
            return;
        }
    };

    report.push(TestResult::check(
        VALIDATOR,
        format!(
            "{}: {} entities, {} triples, closed and well-typed",
            fixture.name,
            graph.len(),
            graph.triple_count()
        ),
        format!("{}: graph does not conform", fixture.name),
        graph_problems(&graph),
    ));
    report.push(TestResult::check(
        VALIDATOR,
        format!("{}: serializations round-trip through sophia", fixture.name),
        format!("{}: serializations are inconsistent", fixture.name),
        serialization_problems(&graph),
    ));
}

fn graph_problems(graph: &EntityGraph) -> Vec<String> {
    let mut problems = Vec::new();
    if let Err(e) = graph.validate() {
        problems.push(e.to_string());
    }
    problems.extend(
        graph
            .dangling()
            .into_iter()
            .map(|(subject, property, target)| {
                format!("<{subject}> {property} <{target}>: target not in graph")
            }),
    );
    problems.extend(graph.range_violations().into_iter().map(|v| {
        format!(
            "<{}> {} <{}>: {} is not a {}",
            v.subject, v.property, v.target, v.actual, v.expected
        )
    }));
    problems
}

fn serialization_problems(graph: &EntityGraph) -> Vec<String> {
    let expected = graph.triple_count();
    let mut problems = Vec::new();

    let counts = [
        ("Turtle", turtle_triple_count(&graph_to_turtle(graph))),
        ("N-Triples", ntriples_triple_count(&graph_to_ntriples(graph))),
    ];
    for (format, count) in counts {
        match count {
            Ok(n) if n == expected => {}
            Ok(n) => problems.push(format!("{format}: {n} triples, expected {expected}")),
            Err(e) => problems.push(format!("{format}: {e}")),
        }
    }

    let nodes = graph_to_json_ld(graph)
        .get("@graph")
        .and_then(|g| g.as_array())
        .map_or(0, Vec::len);
    if nodes != graph.len() {
        problems.push(format!(
            "JSON-LD: {nodes} nodes, expected {}",
            graph.len()
        ));
    }

    problems
}

fn validate_negative(fixture: &NegativeFixture, report: &mut ConformanceReport) {
    match (fixture.build)() {
        Ok(graph) => report.push(TestResult::fail(
            VALIDATOR,
            format!(
                "{}: built {} entities, expected \"{}\"",
                fixture.name,
                graph.len(),
                fixture.expected
            ),
        )),
        Err(e) if e.to_string() == fixture.expected => report.push(TestResult::pass(
            VALIDATOR,
            format!("{}: refused with \"{e}\"", fixture.name),
        )),
        Err(e) => report.push(TestResult::fail(
            VALIDATOR,
            format!(
                "{}: refused with \"{e}\", expected \"{}\"",
                fixture.name, fixture.expected
            ),
        )),
    }
}
