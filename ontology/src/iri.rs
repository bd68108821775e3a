//! IRIs and IRI namespaces.

use std::fmt;

use uuid::Uuid;

use crate::error::{HqdmError, Result};
use crate::model::iris;

/// An absolute IRI naming an entity.
///
/// Equality and ordering are lexical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Iri(String);

impl Iri {
    /// Wraps `iri` without checking it.
    #[must_use]
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    /// Parses an absolute IRI.
    ///
    /// Accepts `scheme:rest` where the scheme starts with an ASCII letter and
    /// continues with letters, digits, `+`, `-` or `.`, and the remainder is
    /// non-empty and free of whitespace and of the characters `<>"{}|^` and
    /// backtick.
    ///
    /// # Errors
    ///
    /// Returns [`HqdmError::InvalidIri`] if `iri` does not have that shape.
    pub fn parse(iri: &str) -> Result<Self> {
        let invalid = || HqdmError::InvalidIri(iri.to_string());
        let (scheme, rest) = iri.split_once(':').ok_or_else(invalid)?;
        let mut chars = scheme.chars();
        if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
            return Err(invalid());
        }
        if rest.is_empty() {
            return Err(invalid());
        }
        if rest
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || "<>\"{}|^`\\".contains(c))
        {
            return Err(invalid());
        }
        Ok(Self(iri.to_string()))
    }

    /// Returns the IRI text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the part after the last `#` or `/`, or the whole IRI if it has
    /// neither.
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.0
            .rfind(['#', '/'])
            .map_or(self.0.as_str(), |i| &self.0[i + 1..])
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Iri> for String {
    fn from(iri: Iri) -> Self {
        iri.0
    }
}

/// A namespace that mints IRIs by appending local names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IriBase {
    base: String,
}

impl IriBase {
    /// Creates a namespace from an absolute IRI prefix, typically ending in
    /// `#` or `/`.
    ///
    /// # Errors
    ///
    /// Returns [`HqdmError::InvalidIri`] if `base` is not an absolute IRI.
    pub fn new(base: &str) -> Result<Self> {
        Iri::parse(base)?;
        Ok(Self {
            base: base.to_string(),
        })
    }

    /// The default namespace for user-created instances.
    #[must_use]
    pub fn user() -> Self {
        Self {
            base: iris::USER.to_string(),
        }
    }

    /// Returns the namespace prefix.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Returns `base` + `local`.
    #[must_use]
    pub fn iri(&self, local: &str) -> Iri {
        Iri(format!("{}{local}", self.base))
    }

    /// Mints a new IRI with a random UUID v4 local name.
    #[must_use]
    pub fn fresh(&self) -> Iri {
        self.iri(&Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_absolute_iris() {
        for iri in [
            "https://hqdmtop.github.io/hqdm#activity",
            "urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "http://example.org/a/b?c=d",
        ] {
            assert!(Iri::parse(iri).is_ok(), "{iri}");
        }
    }

    #[test]
    fn parse_rejects_malformed_iris() {
        for iri in [
            "",
            "activity",
            "1http://example.org",
            "http:",
            "http://example.org/a b",
            "http://example.org/<a>",
        ] {
            assert_eq!(
                Iri::parse(iri),
                Err(HqdmError::InvalidIri(iri.to_string())),
                "{iri}"
            );
        }
    }

    #[test]
    fn local_name_after_hash_or_slash() {
        assert_eq!(Iri::new("https://hqdmtop.github.io/hqdm#causes").local_name(), "causes");
        assert_eq!(Iri::new("https://example.org/plant/pump").local_name(), "pump");
        assert_eq!(Iri::new("urn:x").local_name(), "urn:x");
    }

    #[test]
    fn base_mints_iris() {
        let base = IriBase::new("https://example.org/plant#").unwrap();
        assert_eq!(base.iri("pump").as_str(), "https://example.org/plant#pump");
        assert!(IriBase::new("plant#").is_err());
    }

    #[test]
    fn fresh_iris_are_unique_and_valid() {
        let base = IriBase::user();
        let a = base.fresh();
        let b = base.fresh();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with(iris::USER));
        assert!(Iri::parse(a.as_str()).is_ok());
    }
}
