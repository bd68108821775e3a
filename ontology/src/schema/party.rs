//! `party` area: people, organizations and language communities.

use crate::class::HqdmClass as C;
use crate::model::{Area, ClassDef, SchemaModule};

/// Returns the `party` schema module.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        area: Area::Party,
        label: "Parties",
        comment: "People, organizations and language communities.",
        classes: classes(),
    }
}

fn classes() -> Vec<ClassDef> {
    vec![
        ClassDef {
            class: C::Party,
            comment: "A person or organization.",
            subclass_of: &[C::Individual],
            rules: super::top::EXTENT_RULES,
        },
        ClassDef {
            class: C::Person,
            comment: "A biological person.",
            subclass_of: &[C::Party],
            rules: super::top::EXTENT_RULES,
        },
        ClassDef {
            class: C::Organization,
            comment: "A socially constructed object that is an organized body of people.",
            subclass_of: &[C::Party],
            rules: super::top::EXTENT_RULES,
        },
        ClassDef {
            class: C::LanguageCommunity,
            comment: "An organization whose members recognize a common language.",
            subclass_of: &[C::Organization],
            rules: super::top::EXTENT_RULES,
        },
    ]
}
