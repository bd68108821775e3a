//! A cooling loop: a functional system with an installed pump, a sensor
//! slot, a biofilter culture and the cabinet housing them.

use hqdm_ontology::builder::{
    BiologicalSystemBuilder, FunctionalSystemBuilder, FunctionalSystemComponentBuilder,
    InstalledFunctionalSystemComponentBuilder, IntentionallyConstructedObjectBuilder,
    OrdinaryFunctionalObjectBuilder, StateOfIntentionallyConstructedObjectBuilder,
    SystemComponentBuilder,
};
use hqdm_ontology::entity::{
    KindOfBiologicalSystem, KindOfFunctionalSystem, KindOfFunctionalSystemComponent,
    KindOfOrdinaryFunctionalObject, KindOfSystemComponent, Role,
};
use hqdm_ontology::{EntityGraph, Result};

use super::Scenario;

pub(crate) fn cooling_system() -> Result<EntityGraph> {
    let mut s = Scenario::new("https://example.org/cooling#")?;
    let cooling: Role = s.plain("coolant-circulation")?;
    let pumping: Role = s.plain("pumping")?;
    let filtering: Role = s.plain("biofiltering")?;
    let loop_kind: KindOfFunctionalSystem = s.plain("cooling-loop")?;
    let slot_kind: KindOfFunctionalSystemComponent = s.plain("circulation-pump-slot")?;
    let pump_kind: KindOfOrdinaryFunctionalObject = s.plain("centrifugal-pump")?;
    let sensor_kind: KindOfSystemComponent = s.plain("temperature-sensor-slot")?;
    let culture_kind: KindOfBiologicalSystem = s.plain("nitrifying-culture")?;
    let installed_at = s.event("pump-installed")?;

    let cooling_loop = FunctionalSystemBuilder::new(s.iri("loop-a"))
        .intended_role_m(&cooling)
        .member_of_kind_m(&loop_kind)
        .part_of_possible_world_m(s.world())
        .build()?;
    let cooling_loop = s.keep(cooling_loop);

    let slot = FunctionalSystemComponentBuilder::new(s.iri("loop-a-pump-slot"))
        .component_of_m(&cooling_loop)
        .intended_role_m(&pumping)
        .member_of_kind_m(&slot_kind)
        .part_of_possible_world_m(s.world())
        .build()?;
    s.keep(slot);

    let pump = OrdinaryFunctionalObjectBuilder::new(s.iri("pump-sn-7731"))
        .intended_role_m(&pumping)
        .member_of_kind_m(&pump_kind)
        .part_of_possible_world_m(s.world())
        .build()?;
    let pump = s.keep(pump);

    let installed = InstalledFunctionalSystemComponentBuilder::new(s.iri("pump-sn-7731-in-loop-a"))
        .beginning(&installed_at)
        .component_of_m(&cooling_loop)
        .intended_role_m(&pumping)
        .part_of_possible_world_m(s.world())
        .temporal_part_of(&pump)
        .build()?;
    s.keep(installed);

    let sensor = SystemComponentBuilder::new(s.iri("loop-a-sensor-slot"))
        .component_of_m(&cooling_loop)
        .member_of_kind_m(&sensor_kind)
        .part_of_possible_world_m(s.world())
        .build()?;
    s.keep(sensor);

    let culture = BiologicalSystemBuilder::new(s.iri("biofilter-culture"))
        .member_of_kind_m(&culture_kind)
        .natural_role_m(&filtering)
        .part_of_possible_world_m(s.world())
        .build()?;
    s.keep(culture);

    let cabinet = IntentionallyConstructedObjectBuilder::new(s.iri("cabinet-3"))
        .part_of_possible_world_m(s.world())
        .build()?;
    let cabinet = s.keep(cabinet);

    let refitted = StateOfIntentionallyConstructedObjectBuilder::new(s.iri("cabinet-3-after-refit"))
        .beginning(&installed_at)
        .part_of_possible_world_m(s.world())
        .temporal_part_of(&cabinet)
        .build()?;
    s.keep(refitted);

    Ok(s.finish())
}
