//! Builders for money, sales products and product offerings.

use crate::entity::{
    AmountOfMoney, Class, ClassOfAmountOfMoney, ClassOfSalesProductInstance, Currency, Event,
    Individual, KindOfOrdinaryFunctionalObject, Party, PeriodOfTime, PossibleWorld, Price,
    ProductOffering, Role, SalesProduct, SalesProductInstance, SpatioTemporalExtent,
};

hqdm_builder! {
    /// Builds an [`AmountOfMoney`]: a socially constructed object that is an amount of some
    /// currency.
    AmountOfMoneyBuilder => AmountOfMoney {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfAmountOfMoney,
        member_of_currency => MemberOfCurrency: Currency,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds a [`SalesProductInstance`]: an ordinary functional object that is produced in order
    /// to be sold.
    SalesProductInstanceBuilder => SalesProductInstance {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        ending => Ending: Event,
        intended_role_m => IntendedRole: Role,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfSalesProductInstance,
        member_of_kind_m => MemberOfKind: KindOfOrdinaryFunctionalObject,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds a [`ProductOffering`]: a class of offer for a sales product, at a price, by a party,
    /// for a period.
    ProductOfferingBuilder => ProductOffering {
        class_of_offered_m => ClassOfOffered: SalesProduct,
        consideration_by_class_m => ConsiderationByClass: Price,
        has_superclass => HasSuperclass: Class,
        member_of_class => MemberOfClass: Class,
        offeror_m => Offeror: Party,
        period_offered_m => PeriodOffered: PeriodOfTime,
    }
}
