//! The property store backing one entity.

use std::collections::{BTreeMap, BTreeSet};

use crate::class::HqdmClass;
use crate::iri::Iri;
use crate::property::HqdmProperty;

static EMPTY: BTreeSet<Iri> = BTreeSet::new();

/// An RDF-style resource: an IRI, a class, and a multimap from property to
/// the set of target IRIs asserted for it.
///
/// A property key can be present with an empty value set, either through
/// [`Resource::declare`] or by removing its last value. Cardinality checks
/// treat such a key differently from an absent one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resource {
    iri: Iri,
    class: HqdmClass,
    properties: BTreeMap<HqdmProperty, BTreeSet<Iri>>,
}

impl Resource {
    /// Creates a resource with no properties.
    #[must_use]
    pub fn new(iri: Iri, class: HqdmClass) -> Self {
        Self {
            iri,
            class,
            properties: BTreeMap::new(),
        }
    }

    /// Returns the IRI of the resource.
    #[must_use]
    pub fn iri(&self) -> &Iri {
        &self.iri
    }

    /// Returns the class the resource was created as.
    #[must_use]
    pub fn class(&self) -> HqdmClass {
        self.class
    }

    /// Returns true if the property key is present, even with no values.
    #[must_use]
    pub fn has_value(&self, property: HqdmProperty) -> bool {
        self.properties.contains_key(&property)
    }

    /// Returns the values of `property`; empty if the key is absent.
    #[must_use]
    pub fn value(&self, property: HqdmProperty) -> &BTreeSet<Iri> {
        self.properties.get(&property).unwrap_or(&EMPTY)
    }

    /// Asserts `(property, value)`. Asserting the same pair twice is a no-op.
    pub fn add_value(&mut self, property: HqdmProperty, value: Iri) {
        self.properties.entry(property).or_default().insert(value);
    }

    /// Makes `property` present without asserting a value.
    pub fn declare(&mut self, property: HqdmProperty) {
        self.properties.entry(property).or_default();
    }

    /// Withdraws one value. The key stays present even when its last value
    /// is removed. Returns true if the value was asserted.
    pub fn remove_value(&mut self, property: HqdmProperty, value: &Iri) -> bool {
        self.properties
            .get_mut(&property)
            .is_some_and(|values| values.remove(value))
    }

    /// Removes the property key and all its values.
    pub fn retract(&mut self, property: HqdmProperty) -> Option<BTreeSet<Iri>> {
        self.properties.remove(&property)
    }

    /// Iterates over present property keys and their values, in property
    /// label order.
    pub fn properties(&self) -> impl Iterator<Item = (HqdmProperty, &BTreeSet<Iri>)> {
        self.properties.iter().map(|(p, v)| (*p, v))
    }

    /// Returns the number of asserted `(property, value)` pairs.
    #[must_use]
    pub fn triple_count(&self) -> usize {
        self.properties.values().map(BTreeSet::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pump() -> Resource {
        Resource::new(
            Iri::new("https://example.org/plant#pump"),
            HqdmClass::OrdinaryFunctionalObject,
        )
    }

    #[test]
    fn absent_key_has_no_values() {
        let r = pump();
        assert!(!r.has_value(HqdmProperty::IntendedRole));
        assert!(r.value(HqdmProperty::IntendedRole).is_empty());
    }

    #[test]
    fn values_accumulate_as_a_set() {
        let mut r = pump();
        let a = Iri::new("https://example.org/plant#role-a");
        let b = Iri::new("https://example.org/plant#role-b");
        r.add_value(HqdmProperty::IntendedRole, a.clone());
        r.add_value(HqdmProperty::IntendedRole, b.clone());
        r.add_value(HqdmProperty::IntendedRole, a.clone());
        assert_eq!(r.value(HqdmProperty::IntendedRole).len(), 2);
        assert!(r.value(HqdmProperty::IntendedRole).contains(&b));
        assert_eq!(r.triple_count(), 2);
    }

    #[test]
    fn declared_key_is_present_but_empty() {
        let mut r = pump();
        r.declare(HqdmProperty::MemberOf);
        assert!(r.has_value(HqdmProperty::MemberOf));
        assert!(r.value(HqdmProperty::MemberOf).is_empty());
        assert_eq!(r.triple_count(), 0);
    }

    #[test]
    fn removing_last_value_keeps_key() {
        let mut r = pump();
        let role = Iri::new("https://example.org/plant#role");
        r.add_value(HqdmProperty::IntendedRole, role.clone());
        assert!(r.remove_value(HqdmProperty::IntendedRole, &role));
        assert!(!r.remove_value(HqdmProperty::IntendedRole, &role));
        assert!(r.has_value(HqdmProperty::IntendedRole));
        assert!(r.value(HqdmProperty::IntendedRole).is_empty());

        r.retract(HqdmProperty::IntendedRole);
        assert!(!r.has_value(HqdmProperty::IntendedRole));
    }
}
