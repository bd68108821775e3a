//! `association` area: associations between participants: ownership and employment.

use crate::class::HqdmClass as C;
use crate::model::{Area, ClassDef, PropertyRule, SchemaModule};
use crate::property::HqdmProperty as P;

/// Returns the `association` schema module.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        area: Area::Association,
        label: "Associations",
        comment: "Associations between participants: ownership and employment.",
        classes: classes(),
    }
}

fn classes() -> Vec<ClassDef> {
    vec![
        ClassDef {
            class: C::Association,
            comment: "An individual that consists of the participants that are associated.",
            subclass_of: &[C::Individual],
            rules: ASSOCIATION_RULES,
        },
        ClassDef {
            class: C::Ownership,
            comment: "An association where an owner owns an asset.",
            subclass_of: &[C::Association],
            rules: OWNERSHIP_RULES,
        },
        ClassDef {
            class: C::Employment,
            comment: "An association where an employee works for an employer.",
            subclass_of: &[C::Association],
            rules: ASSOCIATION_RULES,
        },
    ]
}

const ASSOCIATION_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::ConsistsOfParticipant, C::Participant),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfAssociation),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const OWNERSHIP_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::Beginning, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::ConsistsOfParticipant, C::Participant),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfAssociation),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];
