//! `physical` area: ordinary physical, functional and intentionally constructed objects.

use crate::class::HqdmClass as C;
use crate::model::{Area, ClassDef, PropertyRule, SchemaModule};
use crate::property::HqdmProperty as P;

/// Returns the `physical` schema module.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        area: Area::Physical,
        label: "Physical objects",
        comment: "Ordinary physical, functional and intentionally constructed objects.",
        classes: classes(),
    }
}

fn classes() -> Vec<ClassDef> {
    vec![
        ClassDef {
            class: C::OrdinaryPhysicalObject,
            comment: "A physical object that does not survive the replacement of all its parts.",
            subclass_of: &[C::Individual],
            rules: ORDINARY_PHYSICAL_OBJECT_RULES,
        },
        ClassDef {
            class: C::IntentionallyConstructedObject,
            comment: "An individual that is intentionally constructed.",
            subclass_of: &[C::Individual],
            rules: INTENTIONALLY_CONSTRUCTED_OBJECT_RULES,
        },
        ClassDef {
            class: C::StateOfIntentionallyConstructedObject,
            comment: "A state that is an intentionally constructed object or a temporal part of one.",
            subclass_of: &[C::State],
            rules: STATE_OF_INTENTIONALLY_CONSTRUCTED_OBJECT_RULES,
        },
        ClassDef {
            class: C::OrdinaryFunctionalObject,
            comment: "An ordinary physical object that has an intended role.",
            subclass_of: &[C::OrdinaryPhysicalObject, C::IntentionallyConstructedObject],
            rules: ORDINARY_FUNCTIONAL_OBJECT_RULES,
        },
    ]
}

const ORDINARY_PHYSICAL_OBJECT_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfOrdinaryPhysicalObject),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const INTENTIONALLY_CONSTRUCTED_OBJECT_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::MemberOf, C::ClassOfIntentionallyConstructedObject),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const STATE_OF_INTENTIONALLY_CONSTRUCTED_OBJECT_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::MemberOf, C::ClassOfStateOfIntentionallyConstructedObject),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
    PropertyRule::optional(P::TemporalPartOf, C::IntentionallyConstructedObject),
];

const ORDINARY_FUNCTIONAL_OBJECT_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::mandatory(P::IntendedRole, C::Role),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::MemberOf, C::ClassOfIntentionallyConstructedObject),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfOrdinaryFunctionalObject),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];
