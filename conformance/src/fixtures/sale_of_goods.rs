//! Sale of a pump: offer, acceptance, exchange of goods and money, and the
//! contract process that agrees and executes it.

use hqdm_ontology::builder::{
    AcceptanceOfOfferBuilder, AgreeContractBuilder, AmountOfMoneyBuilder, ContractProcessBuilder,
    ExchangeOfGoodsAndMoneyBuilder, OfferAndAcceptanceForGoodsBuilder, OfferBuilder,
    OfferForGoodsBuilder, ProductOfferingBuilder, ReachingAgreementBuilder, SaleOfGoodsBuilder,
    SalesProductInstanceBuilder, SociallyConstructedActivityBuilder,
    StateOfSociallyConstructedActivityBuilder, TransferOfOwnershipOfMoneyBuilder,
};
use hqdm_ontology::entity::{
    ClassOfAgreeContract, ClassOfContractProcess, ClassOfOffer, Currency, KindOfActivity,
    KindOfOrdinaryFunctionalObject, Organization, PeriodOfTime, Person, Price, Role,
    SalesProduct,
};
use hqdm_ontology::{EntityGraph, Result};

use super::Scenario;

pub(crate) fn sale_of_goods() -> Result<EntityGraph> {
    let mut s = Scenario::new("https://example.org/sales#")?;
    let buyer_role: Role = s.plain("buyer")?;
    let seller_role: Role = s.plain("seller")?;
    let pumping: Role = s.plain("pumping")?;
    let offering: KindOfActivity = s.plain("offering")?;
    let accepting: KindOfActivity = s.plain("accepting")?;
    let paying: KindOfActivity = s.plain("paying")?;
    let exchanging: KindOfActivity = s.plain("exchanging")?;
    let agreeing: KindOfActivity = s.plain("agreeing")?;
    let selling: KindOfActivity = s.plain("selling")?;
    let offers: ClassOfOffer = s.plain("offers-for-pumps")?;
    let sales: ClassOfContractProcess = s.plain("pump-sales")?;
    let euro: Currency = s.plain("euro")?;
    let list_price: Price = s.plain("list-price-2400-eur")?;
    let pump_model: SalesProduct = s.plain("p101-model")?;
    let pump_kind: KindOfOrdinaryFunctionalObject = s.plain("centrifugal-pump")?;
    let acme: Organization = s.in_world("acme")?;
    let carol: Person = s.in_world("carol")?;
    let season: PeriodOfTime = s.in_world("spring-2026")?;

    let product_offering = ProductOfferingBuilder::new(s.iri("p101-spring-offering"))
        .class_of_offered_m(&pump_model)
        .consideration_by_class_m(&list_price)
        .offeror_m(&acme)
        .period_offered_m(&season)
        .build()?;
    s.keep(product_offering);

    let pump = SalesProductInstanceBuilder::new(s.iri("pump-sn-4411"))
        .intended_role_m(&pumping)
        .member_of(&pump_model)
        .member_of_kind_m(&pump_kind)
        .part_of_possible_world_m(s.world())
        .build()?;
    let pump = s.keep(pump);

    let money = AmountOfMoneyBuilder::new(s.iri("payment-2400-eur"))
        .member_of_currency(&euro)
        .part_of_possible_world_m(s.world())
        .build()?;
    let money = s.keep(money);

    let buyer = s.participant("carol-as-buyer", &buyer_role, &carol)?;
    let seller = s.participant("acme-as-seller", &seller_role, &acme)?;
    let offered = s.event("offer-made")?;
    let accepted = s.event("offer-accepted")?;
    let paid = s.event("money-paid")?;
    let delivered = s.event("pump-delivered")?;
    let agreed = s.event("sale-agreed")?;
    let sold = s.event("pump-sold")?;

    let payment = TransferOfOwnershipOfMoneyBuilder::new(s.iri("payment"))
        .causes_m(&paid)
        .consists_of_participant_m(&buyer)
        .member_of_kind_m(&paying)
        .part_of_possible_world_m(s.world())
        .references_m(&money)
        .build()?;
    let payment = s.keep(payment);

    let exchange = ExchangeOfGoodsAndMoneyBuilder::new(s.iri("exchange"))
        .causes_m(&delivered)
        .consists_of_m(&payment)
        .member_of_kind_m(&exchanging)
        .part_of_possible_world_m(s.world())
        .references(&pump)
        .build()?;
    let exchange = s.keep(exchange);

    let offer = OfferForGoodsBuilder::new(s.iri("offer"))
        .causes_m(&offered)
        .consists_of_participant_m(&seller)
        .member_of(&offers)
        .member_of_kind_m(&offering)
        .part_of_possible_world_m(s.world())
        .references_m(&exchange)
        .build()?;
    let offer = s.keep(offer);

    let acceptance = AcceptanceOfOfferBuilder::new(s.iri("acceptance"))
        .causes_m(&accepted)
        .consists_of_participant_m(&buyer)
        .member_of_kind_m(&accepting)
        .part_of_possible_world_m(s.world())
        .references_m(&offer)
        .build()?;
    let acceptance = s.keep(acceptance);

    let agreement = OfferAndAcceptanceForGoodsBuilder::new(s.iri("agreement"))
        .causes_m(&agreed)
        .consists_of_m(&offer)
        .consists_of_m(&acceptance)
        .member_of_kind_m(&agreeing)
        .part_of_possible_world_m(s.world())
        .build()?;
    let agreement = s.keep(agreement);

    let sale = SaleOfGoodsBuilder::new(s.iri("sale"))
        .causes_m(&sold)
        .consists_of_m(&agreement)
        .consists_of_m(&exchange)
        .member_of(&sales)
        .member_of_kind_m(&selling)
        .part_of_possible_world_m(s.world())
        .build()?;
    s.keep(sale);

    Ok(s.finish())
}

pub(crate) fn contract_process() -> Result<EntityGraph> {
    let mut s = Scenario::new("https://example.org/contracts#")?;
    let client_role: Role = s.plain("client")?;
    let contractor_role: Role = s.plain("contractor")?;
    let negotiating: KindOfActivity = s.plain("negotiating")?;
    let proposing: KindOfActivity = s.plain("proposing")?;
    let contracting: KindOfActivity = s.plain("contracting")?;
    let servicing: KindOfActivity = s.plain("servicing")?;
    let maintenance_contracts: ClassOfContractProcess = s.plain("maintenance-contracts")?;
    let service_agreements: ClassOfAgreeContract = s.plain("service-agreements")?;
    let acme: Organization = s.in_world("acme")?;
    let dave: Person = s.in_world("dave")?;

    let client = s.participant("dave-as-client", &client_role, &dave)?;
    let contractor = s.participant("acme-as-contractor", &contractor_role, &acme)?;
    let proposed = s.event("terms-proposed")?;
    let settled = s.event("terms-settled")?;
    let signed = s.event("contract-signed")?;
    let serviced = s.event("pump-serviced")?;
    let closed = s.event("contract-closed")?;

    let proposal = OfferBuilder::new(s.iri("proposal"))
        .causes_m(&proposed)
        .consists_of_participant_m(&contractor)
        .member_of_kind_m(&proposing)
        .part_of_possible_world_m(s.world())
        .build()?;
    let proposal = s.keep(proposal);

    let negotiation = ReachingAgreementBuilder::new(s.iri("negotiation"))
        .causes_m(&settled)
        .consists_of(&proposal)
        .consists_of_participant(&client)
        .member_of_kind_m(&negotiating)
        .part_of_possible_world_m(s.world())
        .build()?;
    let negotiation = s.keep(negotiation);

    let signing = AgreeContractBuilder::new(s.iri("signing"))
        .causes_m(&signed)
        .consists_of(&negotiation)
        .member_of(&service_agreements)
        .member_of_kind_m(&contracting)
        .part_of_possible_world_m(s.world())
        .build()?;
    let signing = s.keep(signing);

    let execution = SociallyConstructedActivityBuilder::new(s.iri("execution"))
        .causes_m(&serviced)
        .consists_of_participant(&contractor)
        .member_of_kind_m(&servicing)
        .part_of_possible_world_m(s.world())
        .build()?;
    let execution = s.keep(execution);

    let first_visit = StateOfSociallyConstructedActivityBuilder::new(s.iri("execution-first-visit"))
        .part_of_possible_world_m(s.world())
        .temporal_part_of(&execution)
        .build()?;
    s.keep(first_visit);

    let contract = ContractProcessBuilder::new(s.iri("maintenance-contract"))
        .causes_m(&closed)
        .consists_of_m(&signing)
        .consists_of_m(&execution)
        .member_of(&maintenance_contracts)
        .member_of_kind_m(&contracting)
        .part_of_possible_world_m(s.world())
        .build()?;
    s.keep(contract);

    Ok(s.finish())
}
