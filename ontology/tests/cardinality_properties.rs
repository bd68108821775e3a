//! Property-based tests for cardinality validation.
//!
//! For any catalogue class and any mix of populated, absent and
//! declared-empty property keys, validation reports exactly the first
//! unsatisfied rule in table order.

use hqdm_ontology::{HqdmClass, HqdmError, Iri, Ontology, Resource};
use proptest::prelude::*;

fn resource(class: HqdmClass) -> Resource {
    Resource::new(Iri::new("https://example.org/plant#subject"), class)
}

fn target() -> Iri {
    Iri::new("https://example.org/plant#target")
}

proptest! {
    /// Populating a subset of mandatory properties fails on the first
    /// unpopulated one, or succeeds when all are populated.
    #[test]
    fn prop_first_missing_mandatory_is_reported(
        class_index in 0..HqdmClass::ALL.len(),
        mask in any::<u32>(),
    ) {
        let class = HqdmClass::ALL[class_index];
        let ontology = Ontology::hqdm();
        let mut r = resource(class);
        let mut expected = None;
        let mandatory = ontology.rules_for(class).iter().filter(|rule| rule.is_mandatory());
        for (i, rule) in mandatory.enumerate() {
            if mask & (1 << i) != 0 {
                r.add_value(rule.property, target());
            } else if expected.is_none() {
                expected = Some(rule.property.label());
            }
        }
        let result = ontology.validate(&r);
        match expected {
            Some(label) => prop_assert_eq!(result, Err(HqdmError::PropertyNotSet(label))),
            None => prop_assert_eq!(result, Ok(())),
        }
    }

    /// Each rule is populated, absent, or declared empty. The first rule
    /// that is mandatory-and-unpopulated or declared-empty is reported.
    #[test]
    fn prop_declared_empty_keys_are_reported_in_table_order(
        class_index in 0..HqdmClass::ALL.len(),
        states in proptest::collection::vec(0u8..3, 32),
    ) {
        let class = HqdmClass::ALL[class_index];
        let ontology = Ontology::hqdm();
        let mut r = resource(class);
        let mut expected = None;
        for (rule, state) in ontology.rules_for(class).iter().zip(&states) {
            let violated = match *state {
                0 => {
                    r.add_value(rule.property, target());
                    false
                }
                1 => rule.is_mandatory(),
                _ => {
                    r.declare(rule.property);
                    true
                }
            };
            if violated && expected.is_none() {
                expected = Some(rule.property.label());
            }
        }
        let result = ontology.validate(&r);
        match expected {
            Some(label) => prop_assert_eq!(result, Err(HqdmError::PropertyNotSet(label))),
            None => prop_assert_eq!(result, Ok(())),
        }
    }

    /// Extra values never turn a valid resource invalid.
    #[test]
    fn prop_adding_values_preserves_validity(
        class_index in 0..HqdmClass::ALL.len(),
        extra in 1usize..4,
    ) {
        let class = HqdmClass::ALL[class_index];
        let ontology = Ontology::hqdm();
        let mut r = resource(class);
        for rule in ontology.rules_for(class) {
            r.add_value(rule.property, target());
        }
        prop_assert_eq!(ontology.validate(&r), Ok(()));
        for rule in ontology.rules_for(class) {
            for n in 0..extra {
                r.add_value(rule.property, Iri::new(format!("https://example.org/plant#t{n}")));
            }
        }
        prop_assert_eq!(ontology.validate(&r), Ok(()));
    }
}
