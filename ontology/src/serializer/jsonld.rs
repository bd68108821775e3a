//! JSON-LD 1.1 serializer.
//!
//! Produces a document with an `@context` of prefixes and an `@graph` array
//! of nodes.

use serde_json::{json, Map, Value};

use crate::graph::EntityGraph;
use crate::model::{iris, Cardinality, ClassDef, Ontology, PropertyRule};
use crate::property::HqdmProperty;
use crate::resource::Resource;

use super::ONTOLOGY_LABEL;

/// Serializes the HQDM schema to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn schema_to_json_ld(ontology: &Ontology) -> Value {
    let mut nodes: Vec<Value> = Vec::new();

    nodes.push(json!({
        "@id": ontology.base_iri,
        "@type": "owl:Ontology",
        "rdfs:label": ONTOLOGY_LABEL,
        "owl:versionInfo": ontology.version
    }));

    for prop in HqdmProperty::ALL {
        nodes.push(property_to_json(prop));
    }

    for class in ontology.classes() {
        nodes.push(class_to_json(class));
    }

    json!({
        "@context": context(),
        "@graph": nodes
    })
}

/// Serializes an entity graph to a JSON-LD `Value`.
///
/// Property keys with no values are omitted.
#[must_use]
pub fn graph_to_json_ld(graph: &EntityGraph) -> Value {
    let nodes: Vec<Value> = graph.iter().map(resource_to_json).collect();
    json!({
        "@context": context(),
        "@graph": nodes
    })
}

fn context() -> Value {
    let mut ctx = Map::new();
    ctx.insert("owl".to_owned(), json!(iris::OWL));
    ctx.insert("rdf".to_owned(), json!(iris::RDF));
    ctx.insert("rdfs".to_owned(), json!(iris::RDFS));
    ctx.insert("xsd".to_owned(), json!(iris::XSD));
    ctx.insert("hqdm".to_owned(), json!(iris::HQDM));
    Value::Object(ctx)
}

fn property_to_json(prop: HqdmProperty) -> Value {
    let mut node = json!({
        "@id": format!("hqdm:{}", prop.label()),
        "@type": "owl:ObjectProperty",
        "rdfs:label": prop.label(),
        "rdfs:comment": prop.comment()
    });
    if let Some(parent) = prop.super_property() {
        node["rdfs:subPropertyOf"] = json!({ "@id": format!("hqdm:{}", parent.label()) });
    }
    node
}

fn class_to_json(class: &ClassDef) -> Value {
    let mut subclass_of: Vec<Value> = class
        .subclass_of
        .iter()
        .map(|parent| json!({ "@id": format!("hqdm:{}", parent.label()) }))
        .collect();
    subclass_of.extend(class.rules.iter().map(restriction_to_json));

    json!({
        "@id": format!("hqdm:{}", class.class.label()),
        "@type": "owl:Class",
        "rdfs:label": class.class.label(),
        "rdfs:comment": class.comment,
        "rdfs:subClassOf": subclass_of
    })
}

fn restriction_to_json(rule: &PropertyRule) -> Value {
    let range = json!({ "@id": format!("hqdm:{}", rule.range.label()) });
    let mut node = json!({
        "@type": "owl:Restriction",
        "owl:onProperty": { "@id": format!("hqdm:{}", rule.property.label()) }
    });
    match rule.cardinality {
        Cardinality::Mandatory => {
            node["owl:minQualifiedCardinality"] =
                json!({ "@value": "1", "@type": "xsd:nonNegativeInteger" });
            node["owl:onClass"] = range;
        }
        Cardinality::Optional => {
            node["owl:allValuesFrom"] = range;
        }
    }
    node
}

fn resource_to_json(resource: &Resource) -> Value {
    let mut node = Map::new();
    node.insert("@id".to_owned(), json!(resource.iri().as_str()));
    node.insert(
        "@type".to_owned(),
        json!(format!("hqdm:{}", resource.class().label())),
    );
    for (property, values) in resource.properties() {
        if values.is_empty() {
            continue;
        }
        let targets: Vec<Value> = values
            .iter()
            .map(|v| json!({ "@id": v.as_str() }))
            .collect();
        node.insert(format!("hqdm:{}", property.label()), Value::Array(targets));
    }
    Value::Object(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::HqdmClass;
    use crate::iri::Iri;

    fn count_type(doc: &Value, type_: &str) -> usize {
        doc["@graph"]
            .as_array()
            .map_or(0, |g| g.iter().filter(|n| n["@type"] == type_).count())
    }

    #[test]
    fn produces_context_and_graph() {
        let doc = schema_to_json_ld(Ontology::hqdm());
        assert_eq!(doc["@context"]["hqdm"], iris::HQDM);
        assert!(doc["@graph"].is_array());
    }

    #[test]
    fn graph_declares_every_class_and_property() {
        let ontology = Ontology::hqdm();
        let doc = schema_to_json_ld(ontology);
        assert_eq!(count_type(&doc, "owl:Class"), ontology.class_count());
        assert_eq!(count_type(&doc, "owl:ObjectProperty"), ontology.property_count());
        assert_eq!(count_type(&doc, "owl:Ontology"), 1);
    }

    #[test]
    fn ownership_requires_a_beginning() {
        let doc = schema_to_json_ld(Ontology::hqdm());
        let ownership = doc["@graph"]
            .as_array()
            .and_then(|g| g.iter().find(|n| n["@id"] == "hqdm:ownership"));
        let restrictions = ownership
            .and_then(|n| n["rdfs:subClassOf"].as_array())
            .cloned()
            .unwrap_or_default();
        let beginning = restrictions
            .iter()
            .find(|r| r["owl:onProperty"]["@id"] == "hqdm:beginning");
        assert_eq!(
            beginning.map(|r| r["owl:onClass"]["@id"].clone()),
            Some(json!("hqdm:event"))
        );
    }

    #[test]
    fn graph_nodes_list_values() {
        let mut graph = EntityGraph::new();
        let mut event = Resource::new(Iri::new("urn:e"), HqdmClass::Event);
        event.add_value(HqdmProperty::PartOfPossibleWorld, Iri::new("urn:w"));
        event.declare(HqdmProperty::Beginning);
        graph.insert_resource(event);
        let doc = graph_to_json_ld(&graph);
        let node = &doc["@graph"][0];
        assert_eq!(node["@type"], "hqdm:event");
        assert_eq!(node["hqdm:part_of_possible_world"][0]["@id"], "urn:w");
        assert!(node.get("hqdm:beginning").is_none());
    }
}
