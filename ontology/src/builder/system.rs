//! Builders for systems and system components.

use crate::entity::{
    BiologicalSystem, Class, ClassOfIntentionallyConstructedObject, Event, FunctionalSystem,
    FunctionalSystemComponent, Individual, InstalledFunctionalSystemComponent,
    KindOfBiologicalSystem, KindOfFunctionalSystem, KindOfFunctionalSystemComponent,
    KindOfOrganizationComponent, KindOfSystemComponent, OrdinaryFunctionalObject, Organization,
    OrganizationComponent, PossibleWorld, Role, SpatioTemporalExtent, System, SystemComponent,
};

hqdm_builder! {
    /// Builds a [`BiologicalSystem`]: a system that is alive and plays a natural role.
    BiologicalSystemBuilder => BiologicalSystem {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of_kind_m => MemberOfKind: KindOfBiologicalSystem,
        natural_role_m => NaturalRole: Role,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds a [`FunctionalSystem`]: a system that has an intended role.
    FunctionalSystemBuilder => FunctionalSystem {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        ending => Ending: Event,
        intended_role_m => IntendedRole: Role,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfIntentionallyConstructedObject,
        member_of_kind_m => MemberOfKind: KindOfFunctionalSystem,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds a [`SystemComponent`]: an individual that is a replaceable component of a system.
    SystemComponentBuilder => SystemComponent {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        component_of_m => ComponentOf: System,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of_kind_m => MemberOfKind: KindOfSystemComponent,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds a [`FunctionalSystemComponent`]: a system component of a functional system with an
    /// intended role.
    FunctionalSystemComponentBuilder => FunctionalSystemComponent {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        component_of_m => ComponentOf: FunctionalSystem,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        ending => Ending: Event,
        intended_role_m => IntendedRole: Role,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfIntentionallyConstructedObject,
        member_of_kind_m => MemberOfKind: KindOfFunctionalSystemComponent,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds an [`InstalledFunctionalSystemComponent`]: a state of an ordinary functional object
    /// while it is installed as a functional system component.
    InstalledFunctionalSystemComponentBuilder => InstalledFunctionalSystemComponent {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        component_of_m => ComponentOf: FunctionalSystem,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        ending => Ending: Event,
        intended_role_m => IntendedRole: Role,
        member_of_class => MemberOfClass: Class,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
        temporal_part_of => TemporalPartOf: OrdinaryFunctionalObject,
    }
}

hqdm_builder! {
    /// Builds an [`OrganizationComponent`]: a system component that is a position or part of an
    /// organization.
    OrganizationComponentBuilder => OrganizationComponent {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        component_of_m => ComponentOf: Organization,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of_kind_m => MemberOfKind: KindOfOrganizationComponent,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}
