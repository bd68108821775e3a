//! Scenarios whose final builder must refuse.

use hqdm_ontology::builder::{
    ActivityBuilder, OwnershipBuilder, ProductOfferingBuilder, SignBuilder,
};
use hqdm_ontology::entity::{
    Individual, KindOfActivity, KindOfAssociation, Organization, Pattern, PeriodOfTime, Price,
    RepresentationBySign, Role, SalesProduct,
};
use hqdm_ontology::{Entity, EntityBuilder, EntityGraph, HqdmProperty, Result};

use super::Scenario;

pub(crate) fn activity_without_causes() -> Result<EntityGraph> {
    let mut s = Scenario::new("https://example.org/negative#")?;
    let repair: KindOfActivity = s.plain("repair")?;
    let activity = ActivityBuilder::new(s.iri("uncaused-repair"))
        .member_of_kind_m(&repair)
        .part_of_possible_world_m(s.world())
        .build()?;
    s.keep(activity);
    Ok(s.finish())
}

pub(crate) fn ownership_without_beginning() -> Result<EntityGraph> {
    let mut s = Scenario::new("https://example.org/negative#")?;
    let owning: KindOfAssociation = s.plain("owning")?;
    let owner_role: Role = s.plain("owner")?;
    let acme: Organization = s.in_world("acme")?;
    let owner = s.participant("acme-as-owner", &owner_role, &acme)?;
    let ownership = OwnershipBuilder::new(s.iri("timeless-ownership"))
        .consists_of_participant_m(&owner)
        .member_of_kind_m(&owning)
        .part_of_possible_world_m(s.world())
        .build()?;
    s.keep(ownership);
    Ok(s.finish())
}

pub(crate) fn activity_with_declared_references() -> Result<EntityGraph> {
    let mut s = Scenario::new("https://example.org/negative#")?;
    let repair: KindOfActivity = s.plain("repair")?;
    let failed = s.event("failed")?;
    let mut builder = ActivityBuilder::new(s.iri("repair-of-nothing"))
        .causes_m(&failed)
        .member_of_kind_m(&repair)
        .part_of_possible_world_m(s.world());
    builder.resource_mut().declare(HqdmProperty::References);
    let activity = builder.build()?;
    s.keep(activity);
    Ok(s.finish())
}

pub(crate) fn sign_with_withdrawn_pattern() -> Result<EntityGraph> {
    let mut s = Scenario::new("https://example.org/negative#")?;
    let symbol: Pattern = s.plain("hot-surface-symbol")?;
    let warning: Role = s.plain("warning")?;
    let represented: Role = s.plain("represented")?;
    let representing: KindOfAssociation = s.plain("representation")?;
    let valve: Individual = s.in_world("valve-v7")?;
    let subject = s.participant("valve-v7-as-represented", &represented, &valve)?;
    let representation = EntityBuilder::<RepresentationBySign>::new(s.iri("hot-valve-warning"))
        .add(HqdmProperty::ConsistsOfParticipant, &subject)
        .add(HqdmProperty::MemberOfKind, &representing)
        .add(HqdmProperty::PartOfPossibleWorld, s.world())
        .build()?;
    let representation = s.keep(representation);

    let mut builder = SignBuilder::new(s.iri("blank-plate"))
        .member_of_m(&symbol)
        .member_of_kind_m(&warning)
        .part_of_possible_world_m(s.world())
        .participant_in_m(&representation);
    builder
        .resource_mut()
        .remove_value(HqdmProperty::MemberOf, symbol.iri());
    let sign = builder.build()?;
    s.keep(sign);
    Ok(s.finish())
}

pub(crate) fn product_offering_without_offeror() -> Result<EntityGraph> {
    let mut s = Scenario::new("https://example.org/negative#")?;
    let model: SalesProduct = s.plain("p101-model")?;
    let price: Price = s.plain("list-price")?;
    let season: PeriodOfTime = s.in_world("spring-2026")?;
    let offering = ProductOfferingBuilder::new(s.iri("anonymous-offering"))
        .class_of_offered_m(&model)
        .consideration_by_class_m(&price)
        .period_offered_m(&season)
        .build()?;
    s.keep(offering);
    Ok(s.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hqdm_ontology::HqdmError;

    #[test]
    fn each_refusal_names_one_property() {
        let cases: [(fn() -> Result<EntityGraph>, &str); 5] = [
            (activity_without_causes, "causes"),
            (ownership_without_beginning, "beginning"),
            (activity_with_declared_references, "references"),
            (sign_with_withdrawn_pattern, "member_of"),
            (product_offering_without_offeror, "offeror"),
        ];
        for (build, label) in cases {
            assert_eq!(build().err(), Some(HqdmError::PropertyNotSet(label)));
        }
    }
}
