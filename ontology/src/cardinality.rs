//! Cardinality checking of resources against class rule tables.

use tracing::debug;

use crate::error::{HqdmError, Result};
use crate::model::{Cardinality, PropertyRule};
use crate::resource::Resource;

/// Returns true if `resource` satisfies `rule`.
///
/// A mandatory rule needs at least one value. An optional rule is satisfied
/// by an absent key but not by a key present with no values.
#[must_use]
pub fn satisfies(resource: &Resource, rule: &PropertyRule) -> bool {
    let empty = resource.value(rule.property).is_empty();
    match rule.cardinality {
        Cardinality::Mandatory => !empty,
        Cardinality::Optional => !(resource.has_value(rule.property) && empty),
    }
}

/// Checks `resource` against `rules`, stopping at the first violation.
///
/// # Errors
///
/// Returns [`HqdmError::PropertyNotSet`] with the label of the first rule, in
/// table order, that `resource` does not satisfy.
pub fn check(resource: &Resource, rules: &[PropertyRule]) -> Result<()> {
    match rules.iter().find(|rule| !satisfies(resource, rule)) {
        Some(rule) => {
            debug!(
                iri = %resource.iri(),
                class = %resource.class(),
                property = rule.property.label(),
                cardinality = rule.cardinality.as_str(),
                "cardinality check failed"
            );
            Err(HqdmError::PropertyNotSet(rule.property.label()))
        }
        None => Ok(()),
    }
}

/// Returns every rule `resource` violates, in table order.
#[must_use]
pub fn violations<'a>(resource: &Resource, rules: &'a [PropertyRule]) -> Vec<&'a PropertyRule> {
    rules
        .iter()
        .filter(|rule| !satisfies(resource, rule))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::HqdmClass;
    use crate::iri::Iri;
    use crate::property::HqdmProperty;

    const RULES: &[PropertyRule] = &[
        PropertyRule::optional(HqdmProperty::Beginning, HqdmClass::Event),
        PropertyRule::mandatory(HqdmProperty::Causes, HqdmClass::Event),
        PropertyRule::mandatory(HqdmProperty::MemberOfKind, HqdmClass::KindOfActivity),
    ];

    fn activity() -> Resource {
        Resource::new(
            Iri::new("https://example.org/plant#repair"),
            HqdmClass::Activity,
        )
    }

    #[test]
    fn absent_optional_is_fine_absent_mandatory_is_not() {
        let mut r = activity();
        r.add_value(HqdmProperty::MemberOfKind, Iri::new("urn:kind"));
        assert_eq!(check(&r, RULES), Err(HqdmError::PropertyNotSet("causes")));
        r.add_value(HqdmProperty::Causes, Iri::new("urn:event"));
        assert_eq!(check(&r, RULES), Ok(()));
    }

    #[test]
    fn declared_empty_optional_fails() {
        let mut r = activity();
        r.add_value(HqdmProperty::Causes, Iri::new("urn:event"));
        r.add_value(HqdmProperty::MemberOfKind, Iri::new("urn:kind"));
        r.declare(HqdmProperty::Beginning);
        assert_eq!(check(&r, RULES), Err(HqdmError::PropertyNotSet("beginning")));
    }

    #[test]
    fn declared_empty_mandatory_fails() {
        let mut r = activity();
        r.declare(HqdmProperty::Causes);
        r.add_value(HqdmProperty::MemberOfKind, Iri::new("urn:kind"));
        assert_eq!(check(&r, RULES), Err(HqdmError::PropertyNotSet("causes")));
    }

    #[test]
    fn first_violation_in_table_order_wins() {
        let mut r = activity();
        r.declare(HqdmProperty::Beginning);
        assert_eq!(check(&r, RULES), Err(HqdmError::PropertyNotSet("beginning")));
        let all: Vec<_> = violations(&r, RULES).iter().map(|v| v.property).collect();
        assert_eq!(
            all,
            vec![
                HqdmProperty::Beginning,
                HqdmProperty::Causes,
                HqdmProperty::MemberOfKind
            ]
        );
    }

    #[test]
    fn unconstrained_properties_are_ignored() {
        let mut r = activity();
        r.add_value(HqdmProperty::Causes, Iri::new("urn:event"));
        r.add_value(HqdmProperty::MemberOfKind, Iri::new("urn:kind"));
        r.declare(HqdmProperty::Offeror);
        assert_eq!(check(&r, RULES), Ok(()));
    }
}
