//! `kinds` area: roles, kinds and the classes that HQDM individuals can be members of.

use crate::class::HqdmClass as C;
use crate::model::{Area, ClassDef, SchemaModule};

/// Returns the `kinds` schema module.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        area: Area::Kinds,
        label: "Kinds and classes",
        comment: "Roles, kinds and the classes that HQDM individuals can be members of.",
        classes: classes(),
    }
}

fn classes() -> Vec<ClassDef> {
    vec![
        ClassDef {
            class: C::Role,
            comment: "A class whose members are participants playing the same part in activities or associations.",
            subclass_of: &[C::Class],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::KindOfActivity,
            comment: "A class of activity where all the members are of the same kind.",
            subclass_of: &[C::Class],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::KindOfAssociation,
            comment: "A class of association where all the members have the same kind of participants.",
            subclass_of: &[C::Class],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::KindOfOrdinaryPhysicalObject,
            comment: "A class of ordinary physical object where all the members are of the same kind.",
            subclass_of: &[C::Class],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::KindOfOrdinaryFunctionalObject,
            comment: "A class of ordinary functional object where all the members are of the same kind.",
            subclass_of: &[C::KindOfOrdinaryPhysicalObject],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::KindOfSystem,
            comment: "A class of system where all the members are of the same kind.",
            subclass_of: &[C::Class],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::KindOfBiologicalSystem,
            comment: "A class of biological system where all the members are of the same kind.",
            subclass_of: &[C::KindOfSystem],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::KindOfFunctionalSystem,
            comment: "A class of functional system where all the members are of the same kind.",
            subclass_of: &[C::KindOfSystem],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::KindOfSystemComponent,
            comment: "A class of system component where all the members are of the same kind.",
            subclass_of: &[C::Class],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::KindOfFunctionalSystemComponent,
            comment: "A class of functional system component where all the members are of the same kind.",
            subclass_of: &[C::KindOfSystemComponent],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::KindOfOrganizationComponent,
            comment: "A class of organization component where all the members are of the same kind.",
            subclass_of: &[C::KindOfSystemComponent],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::ClassOfPossibleWorld,
            comment: "A class whose members are possible worlds.",
            subclass_of: &[C::Class],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::ClassOfIntentionallyConstructedObject,
            comment: "A class whose members are intentionally constructed objects.",
            subclass_of: &[C::Class],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::ClassOfStateOfIntentionallyConstructedObject,
            comment: "A class whose members are states of intentionally constructed objects.",
            subclass_of: &[C::Class],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::ClassOfSociallyConstructedActivity,
            comment: "A class whose members are socially constructed activities.",
            subclass_of: &[C::Class],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::ClassOfStateOfSociallyConstructedActivity,
            comment: "A class whose members are states of socially constructed activities.",
            subclass_of: &[C::Class],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::ClassOfReachingAgreement,
            comment: "A class whose members are reaching agreement activities.",
            subclass_of: &[C::ClassOfSociallyConstructedActivity],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::ClassOfAgreeContract,
            comment: "A class whose members are agree contract activities.",
            subclass_of: &[C::ClassOfReachingAgreement],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::ClassOfContractProcess,
            comment: "A class whose members are contract processes.",
            subclass_of: &[C::ClassOfSociallyConstructedActivity],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::ClassOfOffer,
            comment: "A class whose members are offers.",
            subclass_of: &[C::ClassOfSociallyConstructedActivity],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::ClassOfAmountOfMoney,
            comment: "A class whose members are amounts of money.",
            subclass_of: &[C::Class],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::ClassOfSalesProductInstance,
            comment: "A class whose members are sales product instances.",
            subclass_of: &[C::Class],
            rules: super::top::CLASS_RULES,
        },
    ]
}
