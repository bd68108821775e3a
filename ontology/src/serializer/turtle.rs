//! Turtle 1.1 serializer.
//!
//! Class and property IRIs are written with the `hqdm:` prefix. Cardinality
//! rules become anonymous `owl:Restriction` superclasses.

use crate::graph::EntityGraph;
use crate::model::{iris, Cardinality, ClassDef, Ontology, PropertyRule};
use crate::property::HqdmProperty;

use super::ONTOLOGY_LABEL;

/// Serializes the HQDM schema to a Turtle string.
#[must_use]
pub fn schema_to_turtle(ontology: &Ontology) -> String {
    let mut out = String::with_capacity(64 * 1024);
    prefixes(&mut out);

    out.push_str(&format!(
        "<{}>\n  a owl:Ontology ;\n  rdfs:label {} ;\n  owl:versionInfo {} .\n\n",
        ontology.base_iri,
        turtle_string(ONTOLOGY_LABEL),
        turtle_string(ontology.version)
    ));

    out.push_str("# Properties\n");
    for prop in HqdmProperty::ALL {
        let super_str = prop
            .super_property()
            .map(|p| format!(" ;\n  rdfs:subPropertyOf hqdm:{}", p.label()))
            .unwrap_or_default();
        out.push_str(&format!(
            "hqdm:{}\n  a owl:ObjectProperty ;\n  rdfs:label {} ;\n  rdfs:comment {}{} .\n\n",
            prop.label(),
            turtle_string(prop.label()),
            turtle_string(prop.comment()),
            super_str
        ));
    }

    for module in &ontology.modules {
        out.push_str(&format!("# Area: {}\n", module.area.as_str()));
        for class in &module.classes {
            class_to_turtle(&mut out, class);
        }
    }

    out
}

fn class_to_turtle(out: &mut String, class: &ClassDef) {
    let mut statements = vec![
        "a owl:Class".to_owned(),
        format!("rdfs:label {}", turtle_string(class.class.label())),
        format!("rdfs:comment {}", turtle_string(class.comment)),
    ];
    statements.extend(
        class
            .subclass_of
            .iter()
            .map(|parent| format!("rdfs:subClassOf hqdm:{}", parent.label())),
    );
    statements.extend(
        class
            .rules
            .iter()
            .map(|rule| format!("rdfs:subClassOf {}", restriction(rule))),
    );
    out.push_str(&format!(
        "hqdm:{}\n  {} .\n\n",
        class.class.label(),
        statements.join(" ;\n  ")
    ));
}

fn restriction(rule: &PropertyRule) -> String {
    let constraint = match rule.cardinality {
        Cardinality::Mandatory => format!(
            "owl:minQualifiedCardinality \"1\"^^xsd:nonNegativeInteger ;\n    owl:onClass hqdm:{}",
            rule.range.label()
        ),
        Cardinality::Optional => format!("owl:allValuesFrom hqdm:{}", rule.range.label()),
    };
    format!(
        "[\n    a owl:Restriction ;\n    owl:onProperty hqdm:{} ;\n    {}\n  ]",
        rule.property.label(),
        constraint
    )
}

/// Serializes an entity graph to a Turtle string.
///
/// Property keys with no values produce no triples.
#[must_use]
pub fn graph_to_turtle(graph: &EntityGraph) -> String {
    let mut out = String::with_capacity(256 * (graph.len() + 1));
    prefixes(&mut out);
    for resource in graph {
        let mut statements = vec![format!("a hqdm:{}", resource.class().label())];
        for (property, values) in resource.properties() {
            if values.is_empty() {
                continue;
            }
            let objects: Vec<String> = values.iter().map(|v| format!("<{v}>")).collect();
            statements.push(format!("hqdm:{} {}", property.label(), objects.join(" , ")));
        }
        out.push_str(&format!(
            "<{}>\n  {} .\n\n",
            resource.iri(),
            statements.join(" ;\n  ")
        ));
    }
    out
}

fn prefixes(out: &mut String) {
    out.push_str(&format!("@prefix owl:  <{}> .\n", iris::OWL));
    out.push_str(&format!("@prefix rdf:  <{}> .\n", iris::RDF));
    out.push_str(&format!("@prefix rdfs: <{}> .\n", iris::RDFS));
    out.push_str(&format!("@prefix xsd:  <{}> .\n", iris::XSD));
    out.push_str(&format!("@prefix hqdm: <{}> .\n\n", iris::HQDM));
}

fn turtle_string(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::builder::EntityBuilder;
    use crate::entity::{Entity, PossibleWorld};
    use crate::iri::Iri;
    use crate::resource::Resource;
    use crate::HqdmClass;

    #[test]
    fn schema_declares_prefixes_and_ontology() {
        let turtle = schema_to_turtle(Ontology::hqdm());
        assert!(turtle.contains("@prefix hqdm: <https://hqdmtop.github.io/hqdm#>"));
        assert!(turtle.contains("<https://hqdmtop.github.io/hqdm>\n  a owl:Ontology"));
    }

    #[test]
    fn every_class_is_declared() {
        let ontology = Ontology::hqdm();
        let turtle = schema_to_turtle(ontology);
        for class in ontology.classes() {
            assert!(
                turtle.contains(&format!("hqdm:{}\n  a owl:Class", class.class.label())),
                "Missing class {}",
                class.class
            );
        }
    }

    #[test]
    fn mandatory_rules_become_qualified_cardinality() {
        let turtle = schema_to_turtle(Ontology::hqdm());
        assert!(turtle.contains(
            "owl:onProperty hqdm:causes ;\n    owl:minQualifiedCardinality \"1\"^^xsd:nonNegativeInteger ;\n    owl:onClass hqdm:event"
        ));
        assert!(turtle.contains("owl:onProperty hqdm:beginning ;\n    owl:allValuesFrom hqdm:event"));
    }

    #[test]
    fn graph_skips_empty_keys() {
        let world = EntityBuilder::<PossibleWorld>::new(Iri::new("urn:w")).build().unwrap();
        let mut event = Resource::new(Iri::new("urn:e"), HqdmClass::Event);
        event.add_value(HqdmProperty::PartOfPossibleWorld, world.resource().iri().clone());
        event.declare(HqdmProperty::Ending);
        let mut graph = EntityGraph::new();
        graph.insert(world);
        graph.insert_resource(event);
        let turtle = graph_to_turtle(&graph);
        assert!(turtle.contains("<urn:e>\n  a hqdm:event ;\n  hqdm:part_of_possible_world <urn:w> ."));
        assert!(turtle.contains("<urn:w>\n  a hqdm:possible_world ."));
        assert!(!turtle.contains("hqdm:ending"));
    }
}
