//! A warning sign on a valve, recognised by the site's staff.

use hqdm_ontology::builder::{RecognizingLanguageCommunityBuilder, SignBuilder};
use hqdm_ontology::entity::{
    Individual, KindOfAssociation, LanguageCommunity, Pattern, RepresentationBySign, Role,
};
use hqdm_ontology::{EntityBuilder, EntityGraph, HqdmProperty, Result};

use super::Scenario;

pub(crate) fn warning_sign() -> Result<EntityGraph> {
    let mut s = Scenario::new("https://example.org/signs#")?;
    let symbol: Pattern = s.plain("hot-surface-symbol")?;
    let warning: Role = s.plain("warning")?;
    let represented: Role = s.plain("represented")?;
    let reader: Role = s.plain("reader")?;
    let representing: KindOfAssociation = s.plain("representation")?;
    let staff: LanguageCommunity = s.in_world("site-staff")?;
    let valve: Individual = s.in_world("valve-v7")?;

    let subject = s.participant("valve-v7-as-represented", &represented, &valve)?;
    let representation = EntityBuilder::<RepresentationBySign>::new(s.iri("hot-valve-warning"))
        .add(HqdmProperty::ConsistsOfParticipant, &subject)
        .add(HqdmProperty::MemberOfKind, &representing)
        .add(HqdmProperty::PartOfPossibleWorld, s.world())
        .build()?;
    let representation = s.keep(representation);

    let sign = SignBuilder::new(s.iri("plate-v7"))
        .member_of_m(&symbol)
        .member_of_kind_m(&warning)
        .part_of_possible_world_m(s.world())
        .participant_in_m(&representation)
        .build()?;
    s.keep(sign);

    let recognizers = RecognizingLanguageCommunityBuilder::new(s.iri("site-staff-reading-v7"))
        .member_of_kind_m(&reader)
        .part_of_possible_world_m(s.world())
        .participant_in_m(&representation)
        .temporal_part_of(&staff)
        .build()?;
    s.keep(recognizers);

    Ok(s.finish())
}
