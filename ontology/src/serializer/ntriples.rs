//! N-Triples serializer.
//!
//! One triple per line with absolute IRIs. Restrictions are blank nodes
//! labelled `_:c{class}r{rule}` by catalogue position.

use crate::graph::EntityGraph;
use crate::model::{iris, Cardinality, Ontology};
use crate::property::HqdmProperty;

use super::ONTOLOGY_LABEL;

const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
const OWL_RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";
const OWL_ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
const OWL_ON_CLASS: &str = "http://www.w3.org/2002/07/owl#onClass";
const OWL_MIN_QUALIFIED_CARDINALITY: &str =
    "http://www.w3.org/2002/07/owl#minQualifiedCardinality";
const OWL_ALL_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#allValuesFrom";
const OWL_VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";
const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
const RDFS_SUBPROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";

/// Serializes the HQDM schema to an N-Triples string.
#[must_use]
pub fn schema_to_ntriples(ontology: &Ontology) -> String {
    let mut out = String::with_capacity(128 * 1024);
    let root = iri(ontology.base_iri);

    triple(&mut out, &root, iris::RDF_TYPE, &iri(OWL_ONTOLOGY));
    triple(&mut out, &root, RDFS_LABEL, &lit(ONTOLOGY_LABEL));
    triple(&mut out, &root, OWL_VERSION_INFO, &lit(ontology.version));

    for prop in HqdmProperty::ALL {
        let subj = iri(&prop.iri());
        triple(&mut out, &subj, iris::RDF_TYPE, &iri(OWL_OBJECT_PROPERTY));
        triple(&mut out, &subj, RDFS_LABEL, &lit(prop.label()));
        triple(&mut out, &subj, RDFS_COMMENT, &lit(prop.comment()));
        if let Some(parent) = prop.super_property() {
            triple(&mut out, &subj, RDFS_SUBPROPERTY_OF, &iri(&parent.iri()));
        }
    }

    for (c, class) in ontology.classes().enumerate() {
        let subj = iri(&class.class.iri());
        triple(&mut out, &subj, iris::RDF_TYPE, &iri(OWL_CLASS));
        triple(&mut out, &subj, RDFS_LABEL, &lit(class.class.label()));
        triple(&mut out, &subj, RDFS_COMMENT, &lit(class.comment));
        for parent in class.subclass_of {
            triple(&mut out, &subj, RDFS_SUBCLASS_OF, &iri(&parent.iri()));
        }
        for (r, rule) in class.rules.iter().enumerate() {
            let node = format!("_:c{c}r{r}");
            triple(&mut out, &subj, RDFS_SUBCLASS_OF, &node);
            triple(&mut out, &node, iris::RDF_TYPE, &iri(OWL_RESTRICTION));
            triple(&mut out, &node, OWL_ON_PROPERTY, &iri(&rule.property.iri()));
            match rule.cardinality {
                Cardinality::Mandatory => {
                    let one = format!("\"1\"^^<{}>", iris::XSD_NON_NEGATIVE_INTEGER);
                    triple(&mut out, &node, OWL_MIN_QUALIFIED_CARDINALITY, &one);
                    triple(&mut out, &node, OWL_ON_CLASS, &iri(&rule.range.iri()));
                }
                Cardinality::Optional => {
                    triple(&mut out, &node, OWL_ALL_VALUES_FROM, &iri(&rule.range.iri()));
                }
            }
        }
    }

    out
}

/// Serializes an entity graph to an N-Triples string.
#[must_use]
pub fn graph_to_ntriples(graph: &EntityGraph) -> String {
    let mut out = String::with_capacity(128 * (graph.triple_count() + 1));
    for resource in graph {
        let subj = iri(resource.iri().as_str());
        triple(&mut out, &subj, iris::RDF_TYPE, &iri(&resource.class().iri()));
        for (property, values) in resource.properties() {
            let pred = property.iri();
            for value in values {
                triple(&mut out, &subj, &pred, &iri(value.as_str()));
            }
        }
    }
    out
}

fn triple(out: &mut String, subj: &str, pred: &str, obj: &str) {
    out.push_str(subj);
    out.push_str(" <");
    out.push_str(pred);
    out.push_str("> ");
    out.push_str(obj);
    out.push_str(" .\n");
}

fn iri(s: &str) -> String {
    format!("<{}>", s)
}

fn lit(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{}\"^^<{}>", escaped, iris::XSD_STRING)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_schema_triples(ontology: &Ontology) -> usize {
        let header = 3;
        let properties: usize = HqdmProperty::ALL
            .iter()
            .map(|p| 3 + usize::from(p.super_property().is_some()))
            .sum();
        let classes: usize = ontology
            .classes()
            .map(|c| {
                let rules: usize = c
                    .rules
                    .iter()
                    .map(|r| if r.is_mandatory() { 5 } else { 4 })
                    .sum();
                3 + c.subclass_of.len() + rules
            })
            .sum();
        header + properties + classes
    }

    #[test]
    fn every_line_ends_with_period() {
        let nt = schema_to_ntriples(Ontology::hqdm());
        for line in nt.lines() {
            assert!(line.ends_with(" ."), "Line does not end with ' .': {line}");
        }
    }

    #[test]
    fn one_line_per_triple() {
        let ontology = Ontology::hqdm();
        let nt = schema_to_ntriples(ontology);
        assert_eq!(nt.lines().count(), expected_schema_triples(ontology));
    }

    #[test]
    fn restriction_nodes_are_blank() {
        let nt = schema_to_ntriples(Ontology::hqdm());
        assert!(nt.contains(&format!("_:c0r0 <{}> <{OWL_RESTRICTION}> .", iris::RDF_TYPE)));
        assert!(nt.contains(&format!("<{}> .", OWL_CLASS)));
    }
}
