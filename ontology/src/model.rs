//! Core schema model types.
//!
//! These types describe the HQDM catalogue as typed Rust data: each class
//! carries its direct superclasses and an ordered cardinality rule table. The
//! top-level entry point is [`Ontology::hqdm()`](crate::Ontology::hqdm).

use std::collections::VecDeque;

use crate::cardinality;
use crate::class::HqdmClass;
use crate::error::Result;
use crate::property::HqdmProperty;
use crate::resource::Resource;

/// How many values a property must carry on an entity of a given class.
///
/// A property with no rule in a class table is unconstrained for that class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// The property must carry at least one value.
    Mandatory,
    /// The property may be absent, but if its key is present it must carry
    /// at least one value.
    Optional,
}

impl Cardinality {
    /// Returns the string used for this cardinality in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Cardinality::Mandatory => "mandatory",
            Cardinality::Optional => "optional",
        }
    }
}

/// One row of a class rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyRule {
    /// The constrained property.
    pub property: HqdmProperty,
    /// Whether the property is mandatory or optional.
    pub cardinality: Cardinality,
    /// The class every value of the property must be an instance of.
    pub range: HqdmClass,
}

impl PropertyRule {
    /// A rule requiring at least one value.
    #[must_use]
    pub const fn mandatory(property: HqdmProperty, range: HqdmClass) -> Self {
        Self {
            property,
            cardinality: Cardinality::Mandatory,
            range,
        }
    }

    /// A rule allowing the property to be absent but not declared empty.
    #[must_use]
    pub const fn optional(property: HqdmProperty, range: HqdmClass) -> Self {
        Self {
            property,
            cardinality: Cardinality::Optional,
            range,
        }
    }

    /// Returns true for [`Cardinality::Mandatory`] rules.
    #[must_use]
    pub fn is_mandatory(&self) -> bool {
        self.cardinality == Cardinality::Mandatory
    }
}

/// The schema entry for one HQDM class.
#[derive(Debug, Clone)]
pub struct ClassDef {
    /// The class being described.
    pub class: HqdmClass,
    /// Description.
    pub comment: &'static str,
    /// Direct superclasses (`rdfs:subClassOf`).
    pub subclass_of: &'static [HqdmClass],
    /// Cardinality rules, in ascending order of property label. This order is
    /// the order in which `build()` reports violations.
    pub rules: &'static [PropertyRule],
}

impl ClassDef {
    /// Returns the rule for `property`, if the class constrains it.
    #[must_use]
    pub fn rule(&self, property: HqdmProperty) -> Option<&PropertyRule> {
        self.rules.iter().find(|r| r.property == property)
    }

    /// Returns the mandatory rules only, in table order.
    pub fn mandatory_rules(&self) -> impl Iterator<Item = &PropertyRule> {
        self.rules.iter().filter(|r| r.is_mandatory())
    }
}

/// Grouping of schema modules by HQDM subject area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    /// Things, extents, events, states and possible worlds.
    Top,
    /// Roles, kinds and classes of individuals.
    Kinds,
    /// Activities and participants.
    Activity,
    /// Associations.
    Association,
    /// People and organizations.
    Party,
    /// Offers, agreements and contracts.
    Agreement,
    /// Physical objects.
    Physical,
    /// Systems and components.
    System,
    /// Money and product offerings.
    Money,
    /// Signs and representation.
    Sign,
}

impl Area {
    /// Returns the short name of the area, as used for module file names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Area::Top => "top",
            Area::Kinds => "kinds",
            Area::Activity => "activity",
            Area::Association => "association",
            Area::Party => "party",
            Area::Agreement => "agreement",
            Area::Physical => "physical",
            Area::System => "system",
            Area::Money => "money",
            Area::Sign => "sign",
        }
    }
}

/// The classes of one subject area.
#[derive(Debug, Clone)]
pub struct SchemaModule {
    /// The subject area.
    pub area: Area,
    /// Human-readable label.
    pub label: &'static str,
    /// Description of the area.
    pub comment: &'static str,
    /// Classes declared in this area.
    pub classes: Vec<ClassDef>,
}

/// The complete HQDM catalogue.
#[derive(Debug)]
pub struct Ontology {
    /// Catalogue version (e.g., `"1.0.0"`).
    pub version: &'static str,
    /// IRI of the ontology itself.
    pub base_iri: &'static str,
    /// Schema modules in assembly order.
    pub modules: Vec<SchemaModule>,
}

impl Ontology {
    /// Iterates over every class definition in module order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDef> {
        self.modules.iter().flat_map(|m| m.classes.iter())
    }

    /// Looks up the definition of `class`. Returns `None` if not catalogued.
    #[must_use]
    pub fn find_class(&self, class: HqdmClass) -> Option<&ClassDef> {
        self.classes().find(|c| c.class == class)
    }

    /// Returns the rule table of `class`, or an empty table if it is not
    /// catalogued.
    #[must_use]
    pub fn rules_for(&self, class: HqdmClass) -> &'static [PropertyRule] {
        self.find_class(class).map_or(&[], |c| c.rules)
    }

    /// Returns every transitive superclass of `class`, nearest first.
    #[must_use]
    pub fn superclasses(&self, class: HqdmClass) -> Vec<HqdmClass> {
        let mut out = Vec::new();
        let mut queue: VecDeque<HqdmClass> = self
            .find_class(class)
            .map(|c| c.subclass_of.iter().copied().collect())
            .unwrap_or_default();
        while let Some(next) = queue.pop_front() {
            if out.contains(&next) {
                continue;
            }
            out.push(next);
            if let Some(def) = self.find_class(next) {
                queue.extend(def.subclass_of.iter().copied());
            }
        }
        out
    }

    /// Returns true if `class` is `ancestor` or specialises it.
    #[must_use]
    pub fn is_subclass_of(&self, class: HqdmClass, ancestor: HqdmClass) -> bool {
        class == ancestor || self.superclasses(class).contains(&ancestor)
    }

    /// Checks `resource` against the rule table of its class.
    ///
    /// # Errors
    ///
    /// Returns [`HqdmError::PropertyNotSet`](crate::HqdmError::PropertyNotSet)
    /// naming the first violated rule in table order.
    pub fn validate(&self, resource: &Resource) -> Result<()> {
        cardinality::check(resource, self.rules_for(resource.class()))
    }

    /// Returns the total number of classes across all modules.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.modules.iter().map(|m| m.classes.len()).sum()
    }

    /// Returns the number of properties in the vocabulary.
    #[must_use]
    pub fn property_count(&self) -> usize {
        HqdmProperty::ALL.len()
    }

    /// Returns the total number of rules across all class tables.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.classes().map(|c| c.rules.len()).sum()
    }
}

/// Standard IRI constants.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// HQDM ontology IRI.
    pub const HQDM_ONTOLOGY: &str = "https://hqdmtop.github.io/hqdm";
    /// HQDM namespace; class and property IRIs are `HQDM` + label.
    pub const HQDM: &str = "https://hqdmtop.github.io/hqdm#";
    /// Default namespace for instance IRIs minted by [`IriBase::user`](crate::IriBase::user).
    pub const USER: &str = "https://hqdmtop.github.io/user#";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:nonNegativeInteger`.
    pub const XSD_NON_NEGATIVE_INTEGER: &str =
        "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
    /// `owl:Thing`.
    pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ontology;

    #[test]
    fn superclasses_follow_multiple_inheritance() {
        let supers = Ontology::hqdm().superclasses(HqdmClass::OrdinaryFunctionalObject);
        assert!(supers.contains(&HqdmClass::OrdinaryPhysicalObject));
        assert!(supers.contains(&HqdmClass::IntentionallyConstructedObject));
        assert!(supers.contains(&HqdmClass::Individual));
        assert!(supers.contains(&HqdmClass::Thing));
        assert!(!supers.contains(&HqdmClass::OrdinaryFunctionalObject));
    }

    #[test]
    fn subclass_test_is_reflexive_and_directed() {
        let ontology = Ontology::hqdm();
        assert!(ontology.is_subclass_of(HqdmClass::Event, HqdmClass::Event));
        assert!(ontology.is_subclass_of(HqdmClass::SaleOfGoods, HqdmClass::Activity));
        assert!(!ontology.is_subclass_of(HqdmClass::Activity, HqdmClass::SaleOfGoods));
    }

    #[test]
    fn activity_mandatory_rules() {
        let def = Ontology::hqdm().find_class(HqdmClass::Activity);
        let mandatory: Vec<_> = def
            .map(|d| d.mandatory_rules().map(|r| r.property).collect())
            .unwrap_or_default();
        assert_eq!(
            mandatory,
            vec![
                HqdmProperty::Causes,
                HqdmProperty::MemberOfKind,
                HqdmProperty::PartOfPossibleWorld
            ]
        );
    }

    #[test]
    fn rule_lookup_by_property() {
        let def = Ontology::hqdm().find_class(HqdmClass::Ownership);
        let beginning = def.and_then(|d| d.rule(HqdmProperty::Beginning));
        assert_eq!(
            beginning.map(|r| r.cardinality),
            Some(Cardinality::Mandatory)
        );
        assert_eq!(beginning.map(|r| r.range), Some(HqdmClass::Event));
    }

    #[test]
    fn rule_tables_are_sorted_by_label() {
        for def in Ontology::hqdm().classes() {
            let labels: Vec<_> = def.rules.iter().map(|r| r.property.label()).collect();
            let mut sorted = labels.clone();
            sorted.sort_unstable();
            assert_eq!(labels, sorted, "unsorted rules for {}", def.class);
        }
    }
}
