//! Builders for physical and intentionally constructed objects.

use crate::entity::{
    Class, ClassOfIntentionallyConstructedObject, ClassOfStateOfIntentionallyConstructedObject,
    Event, Individual, IntentionallyConstructedObject, KindOfOrdinaryFunctionalObject,
    KindOfOrdinaryPhysicalObject, OrdinaryFunctionalObject, OrdinaryPhysicalObject, PossibleWorld,
    Role, SpatioTemporalExtent, StateOfIntentionallyConstructedObject,
};

hqdm_builder! {
    /// Builds an [`OrdinaryPhysicalObject`]: a physical object that does not survive the
    /// replacement of all its parts.
    OrdinaryPhysicalObjectBuilder => OrdinaryPhysicalObject {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of_kind_m => MemberOfKind: KindOfOrdinaryPhysicalObject,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds an [`IntentionallyConstructedObject`]: an individual that is intentionally
    /// constructed.
    IntentionallyConstructedObjectBuilder => IntentionallyConstructedObject {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfIntentionallyConstructedObject,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds a [`StateOfIntentionallyConstructedObject`]: a state that is an intentionally
    /// constructed object or a temporal part of one.
    StateOfIntentionallyConstructedObjectBuilder => StateOfIntentionallyConstructedObject {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfStateOfIntentionallyConstructedObject,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
        temporal_part_of => TemporalPartOf: IntentionallyConstructedObject,
    }
}

hqdm_builder! {
    /// Builds an [`OrdinaryFunctionalObject`]: an ordinary physical object that has an intended
    /// role.
    OrdinaryFunctionalObjectBuilder => OrdinaryFunctionalObject {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        ending => Ending: Event,
        intended_role_m => IntendedRole: Role,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfIntentionallyConstructedObject,
        member_of_kind_m => MemberOfKind: KindOfOrdinaryFunctionalObject,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}
