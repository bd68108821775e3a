//! Collections of built entities.

use std::collections::BTreeMap;

use crate::class::HqdmClass;
use crate::entity::Entity;
use crate::error::Result;
use crate::iri::Iri;
use crate::model::Ontology;
use crate::property::HqdmProperty;
use crate::resource::Resource;

/// A set of resources keyed by IRI.
///
/// Iteration is in IRI order. Inserting a resource whose IRI is already
/// present replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityGraph {
    resources: BTreeMap<Iri, Resource>,
}

/// A value whose target is in the graph but is not an instance of the range
/// the rule table declares for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeViolation {
    /// The resource carrying the value.
    pub subject: Iri,
    /// The property asserted.
    pub property: HqdmProperty,
    /// The target IRI.
    pub target: Iri,
    /// The range class of the rule.
    pub expected: HqdmClass,
    /// The class of the target.
    pub actual: HqdmClass,
}

impl EntityGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a built entity. Returns the resource it replaced, if any.
    pub fn insert(&mut self, entity: impl Entity) -> Option<Resource> {
        self.insert_resource(entity.into_resource())
    }

    /// Adds a resource without validating it.
    pub fn insert_resource(&mut self, resource: Resource) -> Option<Resource> {
        self.resources.insert(resource.iri().clone(), resource)
    }

    /// Looks up a resource by IRI.
    #[must_use]
    pub fn get(&self, iri: &Iri) -> Option<&Resource> {
        self.resources.get(iri)
    }

    /// Returns true if a resource with `iri` is present.
    #[must_use]
    pub fn contains(&self, iri: &Iri) -> bool {
        self.resources.contains_key(iri)
    }

    /// Returns the number of resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns true if the graph has no resources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Iterates over resources in IRI order.
    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.values()
    }

    /// Returns the number of RDF triples the graph serializes to: one
    /// `rdf:type` triple per resource plus one per asserted value.
    #[must_use]
    pub fn triple_count(&self) -> usize {
        self.iter().map(|r| 1 + r.triple_count()).sum()
    }

    /// Checks every resource against the rule table of its class.
    ///
    /// # Errors
    ///
    /// Returns the first [`HqdmError::PropertyNotSet`](crate::HqdmError::PropertyNotSet)
    /// found, visiting resources in IRI order.
    pub fn validate(&self) -> Result<()> {
        let ontology = Ontology::hqdm();
        self.iter().try_for_each(|r| ontology.validate(r))
    }

    /// Returns every `(subject, property, target)` whose target is not in the
    /// graph.
    #[must_use]
    pub fn dangling(&self) -> Vec<(&Iri, HqdmProperty, &Iri)> {
        let mut out = Vec::new();
        for resource in self.iter() {
            for (property, values) in resource.properties() {
                for target in values {
                    if !self.contains(target) {
                        out.push((resource.iri(), property, target));
                    }
                }
            }
        }
        out
    }

    /// Returns every value whose target is in the graph but whose class does
    /// not specialise the rule's range.
    #[must_use]
    pub fn range_violations(&self) -> Vec<RangeViolation> {
        let ontology = Ontology::hqdm();
        let mut out = Vec::new();
        for resource in self.iter() {
            let Some(def) = ontology.find_class(resource.class()) else {
                continue;
            };
            for (property, values) in resource.properties() {
                let Some(rule) = def.rule(property) else {
                    continue;
                };
                for target in values {
                    let Some(actual) = self.get(target).map(Resource::class) else {
                        continue;
                    };
                    if !ontology.is_subclass_of(actual, rule.range) {
                        out.push(RangeViolation {
                            subject: resource.iri().clone(),
                            property,
                            target: target.clone(),
                            expected: rule.range,
                            actual,
                        });
                    }
                }
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a EntityGraph {
    type Item = &'a Resource;
    type IntoIter = std::collections::btree_map::Values<'a, Iri, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.values()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::builder::EntityBuilder;
    use crate::entity::{Event, KindOfActivity, PossibleWorld};
    use crate::error::HqdmError;

    fn iri(local: &str) -> Iri {
        Iri::new(format!("https://example.org/plant#{local}"))
    }

    fn world_and_event() -> EntityGraph {
        let world = EntityBuilder::<PossibleWorld>::new(iri("world"))
            .build()
            .unwrap();
        let event = EntityBuilder::<Event>::new(iri("stop"))
            .add(HqdmProperty::PartOfPossibleWorld, &world)
            .build()
            .unwrap();
        let mut graph = EntityGraph::new();
        graph.insert(world);
        graph.insert(event);
        graph
    }

    #[test]
    fn insert_replaces_same_iri() {
        let mut graph = world_and_event();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.triple_count(), 3);
        let replaced = graph.insert_resource(Resource::new(iri("stop"), HqdmClass::Event));
        assert!(replaced.is_some());
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.triple_count(), 2);
    }

    #[test]
    fn validate_reports_unbuilt_resources() {
        let mut graph = world_and_event();
        assert_eq!(graph.validate(), Ok(()));
        graph.insert_resource(Resource::new(iri("start"), HqdmClass::Event));
        assert_eq!(
            graph.validate(),
            Err(HqdmError::PropertyNotSet("part_of_possible_world"))
        );
    }

    #[test]
    fn dangling_targets_are_listed() {
        let mut graph = world_and_event();
        assert!(graph.dangling().is_empty());
        let mut orphan = Resource::new(iri("orphan"), HqdmClass::Event);
        orphan.add_value(HqdmProperty::PartOfPossibleWorld, iri("elsewhere"));
        graph.insert_resource(orphan);
        let dangling = graph.dangling();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].2, &iri("elsewhere"));
    }

    #[test]
    fn untyped_add_is_caught_by_range_check() {
        let mut graph = world_and_event();
        let kind = EntityBuilder::<KindOfActivity>::new(iri("kind")).build().unwrap();
        let misplaced = EntityBuilder::<Event>::new(iri("odd"))
            .add(HqdmProperty::PartOfPossibleWorld, &kind)
            .build()
            .unwrap();
        graph.insert(kind);
        graph.insert(misplaced);
        let violations = graph.range_violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].expected, HqdmClass::PossibleWorld);
        assert_eq!(violations[0].actual, HqdmClass::KindOfActivity);
    }
}
