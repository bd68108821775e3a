//! `system` area: biological and functional systems and their components.

use crate::class::HqdmClass as C;
use crate::model::{Area, ClassDef, PropertyRule, SchemaModule};
use crate::property::HqdmProperty as P;

/// Returns the `system` schema module.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        area: Area::System,
        label: "Systems",
        comment: "Biological and functional systems and their components.",
        classes: classes(),
    }
}

fn classes() -> Vec<ClassDef> {
    vec![
        ClassDef {
            class: C::System,
            comment: "An organized or connected group of physical objects.",
            subclass_of: &[C::Individual],
            rules: super::top::EXTENT_RULES,
        },
        ClassDef {
            class: C::BiologicalSystem,
            comment: "A system that is alive and plays a natural role.",
            subclass_of: &[C::System, C::OrdinaryPhysicalObject],
            rules: BIOLOGICAL_SYSTEM_RULES,
        },
        ClassDef {
            class: C::FunctionalSystem,
            comment: "A system that has an intended role.",
            subclass_of: &[C::System, C::IntentionallyConstructedObject],
            rules: FUNCTIONAL_SYSTEM_RULES,
        },
        ClassDef {
            class: C::SystemComponent,
            comment: "An individual that is a replaceable component of a system.",
            subclass_of: &[C::Individual],
            rules: SYSTEM_COMPONENT_RULES,
        },
        ClassDef {
            class: C::FunctionalSystemComponent,
            comment: "A system component of a functional system with an intended role.",
            subclass_of: &[C::SystemComponent, C::IntentionallyConstructedObject],
            rules: FUNCTIONAL_SYSTEM_COMPONENT_RULES,
        },
        ClassDef {
            class: C::InstalledFunctionalSystemComponent,
            comment: "A state of an ordinary functional object while it is installed as a functional system component.",
            subclass_of: &[C::State],
            rules: INSTALLED_FUNCTIONAL_SYSTEM_COMPONENT_RULES,
        },
        ClassDef {
            class: C::OrganizationComponent,
            comment: "A system component that is a position or part of an organization.",
            subclass_of: &[C::SystemComponent],
            rules: ORGANIZATION_COMPONENT_RULES,
        },
    ]
}

const BIOLOGICAL_SYSTEM_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfBiologicalSystem),
    PropertyRule::mandatory(P::NaturalRole, C::Role),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const FUNCTIONAL_SYSTEM_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::mandatory(P::IntendedRole, C::Role),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::MemberOf, C::ClassOfIntentionallyConstructedObject),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfFunctionalSystem),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const SYSTEM_COMPONENT_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::mandatory(P::ComponentOf, C::System),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfSystemComponent),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const FUNCTIONAL_SYSTEM_COMPONENT_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::mandatory(P::ComponentOf, C::FunctionalSystem),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::mandatory(P::IntendedRole, C::Role),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::MemberOf, C::ClassOfIntentionallyConstructedObject),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfFunctionalSystemComponent),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const INSTALLED_FUNCTIONAL_SYSTEM_COMPONENT_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::mandatory(P::ComponentOf, C::FunctionalSystem),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::mandatory(P::IntendedRole, C::Role),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
    PropertyRule::optional(P::TemporalPartOf, C::OrdinaryFunctionalObject),
];

const ORGANIZATION_COMPONENT_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::mandatory(P::ComponentOf, C::Organization),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfOrganizationComponent),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];
