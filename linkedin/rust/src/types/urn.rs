//! LinkedIn URNs (`urn:li:organization:123456789`).

use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// Returns the part of `urn` after its last `:`.
///
/// Empty when `urn` has no separator; callers treat that as "no ID".
pub fn extract_trailing_id(urn: &str) -> &str {
    match urn.rfind(':') {
        Some(idx) => &urn[idx + 1..],
        None => "",
    }
}

/// A parsed `urn:<namespace>:<entity_type>:<id>` identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Urn {
    namespace: String,
    entity_type: String,
    id: String,
}

impl Urn {
    /// Build a URN in the `li` namespace.
    pub fn new(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            namespace: "li".to_string(),
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// `urn:li:organization:<id>`
    pub fn organization(id: impl fmt::Display) -> Self {
        Self::new("organization", id.to_string())
    }

    /// `urn:li:person:<id>`
    pub fn person(id: impl Into<String>) -> Self {
        Self::new("person", id)
    }

    /// Parse a URN string.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidUrn { urn: s.to_string() };

        let rest = s.strip_prefix("urn:").ok_or_else(invalid)?;
        let (namespace, rest) = rest.split_once(':').ok_or_else(invalid)?;
        let (entity_type, id) = rest.split_once(':').ok_or_else(invalid)?;

        if namespace.is_empty() || entity_type.is_empty() || id.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            namespace: namespace.to_string(),
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Entity id; may itself be a nested URN or tuple for compound keys.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "urn:{}:{}:{}", self.namespace, self.entity_type, self.id)
    }
}

impl FromStr for Urn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
