//! Demonstrates loading the HQDM catalogue, building an activity, and
//! serializing both.
//!
//! Run with: `cargo run --example dump_schema -p hqdm-ontology`

use hqdm_ontology::builder::ActivityBuilder;
use hqdm_ontology::entity::{Event, KindOfActivity, PossibleWorld};
use hqdm_ontology::serializer::{jsonld, turtle};
use hqdm_ontology::{EntityBuilder, EntityGraph, HqdmProperty, IriBase, Ontology};

fn main() -> hqdm_ontology::Result<()> {
    let ontology = Ontology::hqdm();

    println!("HQDM schema v{}", ontology.version);
    println!("  Modules:     {}", ontology.modules.len());
    println!("  Classes:     {}", ontology.class_count());
    println!("  Properties:  {}", ontology.property_count());
    println!("  Rules:       {}", ontology.rule_count());
    println!();

    for module in &ontology.modules {
        let mandatory: usize = module
            .classes
            .iter()
            .map(|c| c.mandatory_rules().count())
            .sum();
        println!(
            "  {:12} {:>2} classes, {:>3} mandatory rules  {}",
            module.area.as_str(),
            module.classes.len(),
            mandatory,
            module.label,
        );
    }
    println!();

    let base = IriBase::new("https://example.org/plant#")?;
    let world = EntityBuilder::<PossibleWorld>::new(base.iri("world")).build()?;
    let kind = EntityBuilder::<KindOfActivity>::new(base.iri("maintenance")).build()?;
    let stopped = EntityBuilder::<Event>::new(base.iri("pump-stopped"))
        .add(HqdmProperty::PartOfPossibleWorld, &world)
        .build()?;
    let repair = ActivityBuilder::new(base.fresh())
        .causes_m(&stopped)
        .member_of_kind_m(&kind)
        .part_of_possible_world_m(&world)
        .build()?;

    let mut graph = EntityGraph::new();
    graph.insert(world);
    graph.insert(kind);
    graph.insert(stopped);
    graph.insert(repair);

    println!("Instance graph ({} triples):", graph.triple_count());
    println!("{}", turtle::graph_to_turtle(&graph));

    let json = serde_json::to_string_pretty(&jsonld::schema_to_json_ld(ontology))
        .unwrap_or_else(|e| format!("JSON error: {e}"));
    println!("Schema JSON-LD: {} bytes", json.len());

    Ok(())
}
