//! A technician repairs a failed pump.

use hqdm_ontology::builder::ActivityBuilder;
use hqdm_ontology::entity::{KindOfActivity, Person, Role};
use hqdm_ontology::{EntityGraph, Result};

use super::Scenario;

pub(crate) fn pump_repair() -> Result<EntityGraph> {
    let mut s = Scenario::new("https://example.org/plant#")?;
    let repair: KindOfActivity = s.plain("repair")?;
    let technician: Role = s.plain("technician")?;
    let alice: Person = s.in_world("alice")?;
    let failed = s.event("pump-failed")?;
    let repaired = s.event("pump-repaired")?;

    let participant = s.participant("alice-as-technician", &technician, &alice)?;

    let activity = ActivityBuilder::new(s.iri("repair-pump-101"))
        .beginning(&failed)
        .ending(&repaired)
        .causes_m(&repaired)
        .consists_of_participant(&participant)
        .member_of_kind_m(&repair)
        .part_of_possible_world_m(s.world())
        .build()?;
    s.keep(activity);

    Ok(s.finish())
}
