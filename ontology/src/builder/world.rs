//! Builders for possible worlds and plans.

use crate::entity::{
    Class, ClassOfPossibleWorld, Event, Individual, Plan, PossibleWorld, SpatioTemporalExtent,
};

hqdm_builder! {
    /// Builds a [`PossibleWorld`]: an individual that is a complete spatio-temporal history of some
    /// possible world.
    PossibleWorldBuilder => PossibleWorld {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfPossibleWorld,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of_possible_world => PartOfPossibleWorld: PossibleWorld,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds a [`Plan`]: a possible world that some party would like to bring about.
    PlanBuilder => Plan {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfPossibleWorld,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of_possible_world => PartOfPossibleWorld: PossibleWorld,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}
