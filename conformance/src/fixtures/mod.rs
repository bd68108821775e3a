//! Instance graph fixtures.
//!
//! Each fixture builds a small HQDM scenario with the typed builders and
//! returns the resulting [`EntityGraph`]. Negative fixtures stop at a builder
//! that is expected to refuse, and name the error message it must produce.

use hqdm_ontology::builder::ParticipantBuilder;
use hqdm_ontology::entity::{Event, Individual, Participant, PossibleWorld, Role};
use hqdm_ontology::{Entity, EntityBuilder, EntityGraph, HqdmProperty, IriBase, IsA, Result};

mod activity;
mod negative;
mod ownership;
mod sale_of_goods;
mod signs;
mod systems;

/// A scenario expected to build.
pub struct Fixture {
    /// Fixture name used in reports.
    pub name: &'static str,
    /// Builds the scenario graph.
    pub build: fn() -> Result<EntityGraph>,
}

/// A scenario expected to fail with a specific message.
pub struct NegativeFixture {
    /// Fixture name used in reports.
    pub name: &'static str,
    /// Attempts to build the scenario graph.
    pub build: fn() -> Result<EntityGraph>,
    /// The exact error message expected.
    pub expected: &'static str,
}

/// Scenarios that must build.
pub const FIXTURES: &[Fixture] = &[
    Fixture {
        name: "pump_repair",
        build: activity::pump_repair,
    },
    Fixture {
        name: "sale_of_goods",
        build: sale_of_goods::sale_of_goods,
    },
    Fixture {
        name: "contract_process",
        build: sale_of_goods::contract_process,
    },
    Fixture {
        name: "ownership",
        build: ownership::ownership,
    },
    Fixture {
        name: "employment",
        build: ownership::employment,
    },
    Fixture {
        name: "cooling_system",
        build: systems::cooling_system,
    },
    Fixture {
        name: "warning_sign",
        build: signs::warning_sign,
    },
];

/// Scenarios that must fail.
pub const NEGATIVE_FIXTURES: &[NegativeFixture] = &[
    NegativeFixture {
        name: "activity_without_causes",
        build: negative::activity_without_causes,
        expected: "Property Not Set: causes",
    },
    NegativeFixture {
        name: "ownership_without_beginning",
        build: negative::ownership_without_beginning,
        expected: "Property Not Set: beginning",
    },
    NegativeFixture {
        name: "activity_with_declared_references",
        build: negative::activity_with_declared_references,
        expected: "Property Not Set: references",
    },
    NegativeFixture {
        name: "sign_with_withdrawn_pattern",
        build: negative::sign_with_withdrawn_pattern,
        expected: "Property Not Set: member_of",
    },
    NegativeFixture {
        name: "product_offering_without_offeror",
        build: negative::product_offering_without_offeror,
        expected: "Property Not Set: offeror",
    },
];

/// Shared state while a fixture is built: a namespace, a possible world,
/// and the graph every built entity is kept in.
pub(crate) struct Scenario {
    base: IriBase,
    world: PossibleWorld,
    graph: EntityGraph,
}

impl Scenario {
    pub(crate) fn new(namespace: &str) -> Result<Self> {
        let base = IriBase::new(namespace)?;
        let world = EntityBuilder::<PossibleWorld>::new(base.iri("world")).build()?;
        let mut graph = EntityGraph::new();
        graph.insert(world.clone());
        Ok(Self { base, world, graph })
    }

    pub(crate) fn world(&self) -> &PossibleWorld {
        &self.world
    }

    pub(crate) fn iri(&self, local: &str) -> hqdm_ontology::Iri {
        self.base.iri(local)
    }

    /// Adds a built entity to the graph and hands it back.
    pub(crate) fn keep<E: Entity + Clone>(&mut self, entity: E) -> E {
        self.graph.insert(entity.clone());
        entity
    }

    /// Builds an entity with no assertions, for classes whose rules are all
    /// optional.
    pub(crate) fn plain<E: Entity + Clone>(&mut self, local: &str) -> Result<E> {
        let entity = EntityBuilder::<E>::new(self.iri(local)).build()?;
        Ok(self.keep(entity))
    }

    /// Builds an entity that is only part of the possible world.
    pub(crate) fn in_world<E: Entity + Clone>(&mut self, local: &str) -> Result<E> {
        let entity = EntityBuilder::<E>::new(self.iri(local))
            .add(HqdmProperty::PartOfPossibleWorld, &self.world)
            .build()?;
        Ok(self.keep(entity))
    }

    pub(crate) fn event(&mut self, local: &str) -> Result<Event> {
        self.in_world(local)
    }

    /// Builds a participant playing `role` as a temporal part of `whole`.
    pub(crate) fn participant(
        &mut self,
        local: &str,
        role: &Role,
        whole: &impl IsA<Individual>,
    ) -> Result<Participant> {
        let participant = ParticipantBuilder::new(self.iri(local))
            .member_of_kind_m(role)
            .part_of_possible_world_m(&self.world)
            .temporal_part_of_individual(whole)
            .build()?;
        Ok(self.keep(participant))
    }

    pub(crate) fn finish(self) -> EntityGraph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_build_closed_graphs() {
        for fixture in FIXTURES {
            let graph = match (fixture.build)() {
                Ok(graph) => graph,
                Err(e) => unreachable!("{} failed: {e}", fixture.name),
            };
            assert!(graph.validate().is_ok(), "{}", fixture.name);
            assert!(graph.dangling().is_empty(), "{}: {:?}", fixture.name, graph.dangling());
            assert!(
                graph.range_violations().is_empty(),
                "{}: {:?}",
                fixture.name,
                graph.range_violations()
            );
        }
    }

    #[test]
    fn negative_fixtures_fail_with_expected_message() {
        for fixture in NEGATIVE_FIXTURES {
            let message = (fixture.build)().err().map(|e| e.to_string());
            assert_eq!(message.as_deref(), Some(fixture.expected), "{}", fixture.name);
        }
    }
}
