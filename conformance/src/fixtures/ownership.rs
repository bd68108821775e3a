//! Ownership of a pump, and employment within an organization.

use hqdm_ontology::builder::{
    EmploymentBuilder, OrdinaryPhysicalObjectBuilder, OrganizationComponentBuilder,
    OwnershipBuilder,
};
use hqdm_ontology::entity::{
    KindOfAssociation, KindOfOrdinaryPhysicalObject, KindOfOrganizationComponent, Organization,
    Person, Role,
};
use hqdm_ontology::{EntityGraph, Result};

use super::Scenario;

pub(crate) fn ownership() -> Result<EntityGraph> {
    let mut s = Scenario::new("https://example.org/assets#")?;
    let ownership_kind: KindOfAssociation = s.plain("ownership")?;
    let owner_role: Role = s.plain("owner")?;
    let asset_role: Role = s.plain("asset")?;
    let pump_kind: KindOfOrdinaryPhysicalObject = s.plain("centrifugal-pump")?;
    let acme: Organization = s.in_world("acme")?;
    let purchased = s.event("pump-purchased")?;

    let pump = OrdinaryPhysicalObjectBuilder::new(s.iri("pump-p101"))
        .member_of_kind_m(&pump_kind)
        .part_of_possible_world_m(s.world())
        .build()?;
    let pump = s.keep(pump);

    let owner = s.participant("acme-as-owner", &owner_role, &acme)?;
    let asset = s.participant("pump-as-asset", &asset_role, &pump)?;

    let ownership = OwnershipBuilder::new(s.iri("acme-owns-p101"))
        .beginning_m(&purchased)
        .consists_of_participant_m(&owner)
        .consists_of_participant_m(&asset)
        .member_of_kind_m(&ownership_kind)
        .part_of_possible_world_m(s.world())
        .build()?;
    s.keep(ownership);

    Ok(s.finish())
}

pub(crate) fn employment() -> Result<EntityGraph> {
    let mut s = Scenario::new("https://example.org/staff#")?;
    let employment_kind: KindOfAssociation = s.plain("employment")?;
    let employer_role: Role = s.plain("employer")?;
    let employee_role: Role = s.plain("employee")?;
    let position_kind: KindOfOrganizationComponent = s.plain("maintenance-engineer")?;
    let acme: Organization = s.in_world("acme")?;
    let bob: Person = s.in_world("bob")?;
    let hired = s.event("bob-hired")?;

    let position = OrganizationComponentBuilder::new(s.iri("acme-engineer-1"))
        .component_of_m(&acme)
        .member_of_kind_m(&position_kind)
        .part_of_possible_world_m(s.world())
        .build()?;
    s.keep(position);

    let employer = s.participant("acme-as-employer", &employer_role, &acme)?;
    let employee = s.participant("bob-as-employee", &employee_role, &bob)?;

    let employment = EmploymentBuilder::new(s.iri("bob-works-for-acme"))
        .beginning(&hired)
        .consists_of_participant_m(&employer)
        .consists_of_participant_m(&employee)
        .member_of_kind_m(&employment_kind)
        .part_of_possible_world_m(s.world())
        .build()?;
    s.keep(employment);

    Ok(s.finish())
}
