//! `money` area: amounts of money, currencies, prices and product offerings.

use crate::class::HqdmClass as C;
use crate::model::{Area, ClassDef, PropertyRule, SchemaModule};
use crate::property::HqdmProperty as P;

/// Returns the `money` schema module.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        area: Area::Money,
        label: "Money and products",
        comment: "Amounts of money, currencies, prices and product offerings.",
        classes: classes(),
    }
}

fn classes() -> Vec<ClassDef> {
    vec![
        ClassDef {
            class: C::AmountOfMoney,
            comment: "A socially constructed object that is an amount of some currency.",
            subclass_of: &[C::Individual],
            rules: AMOUNT_OF_MONEY_RULES,
        },
        ClassDef {
            class: C::Currency,
            comment: "A class of amount of money issued by some authority.",
            subclass_of: &[C::ClassOfAmountOfMoney],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::Price,
            comment: "A class of amount of money that is the consideration asked for a product.",
            subclass_of: &[C::ClassOfAmountOfMoney],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::SalesProduct,
            comment: "A class of sales product instance sold under a brand.",
            subclass_of: &[C::ClassOfSalesProductInstance],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::SalesProductInstance,
            comment: "An ordinary functional object that is produced in order to be sold.",
            subclass_of: &[C::OrdinaryFunctionalObject],
            rules: SALES_PRODUCT_INSTANCE_RULES,
        },
        ClassDef {
            class: C::ProductOffering,
            comment: "A class of offer for a sales product, at a price, by a party, for a period.",
            subclass_of: &[C::ClassOfOffer],
            rules: PRODUCT_OFFERING_RULES,
        },
    ]
}

const AMOUNT_OF_MONEY_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::MemberOf, C::ClassOfAmountOfMoney),
    PropertyRule::optional(P::MemberOfCurrency, C::Currency),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const SALES_PRODUCT_INSTANCE_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::mandatory(P::IntendedRole, C::Role),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::MemberOf, C::ClassOfSalesProductInstance),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfOrdinaryFunctionalObject),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const PRODUCT_OFFERING_RULES: &[PropertyRule] = &[
    PropertyRule::mandatory(P::ClassOfOffered, C::SalesProduct),
    PropertyRule::mandatory(P::ConsiderationByClass, C::Price),
    PropertyRule::optional(P::HasSuperclass, C::Class),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::mandatory(P::Offeror, C::Party),
    PropertyRule::mandatory(P::PeriodOffered, C::PeriodOfTime),
];
