//! Organization resources.
//!
//! See: https://learn.microsoft.com/en-us/linkedin/marketing/community-management/organizations/organization-lookup-api

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::urn::extract_trailing_id;

/// Role assignment of a member on an organization (`/organizationAcls`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationAcl {
    /// Member URN, e.g. `urn:li:person:abc`.
    pub role_assignee: String,
    /// `APPROVED`, `REQUESTED`, `REJECTED` or `REVOKED`.
    pub state: String,
    pub last_modified: AuditStamp,
    /// e.g. `ADMINISTRATOR`
    pub role: String,
    pub created: AuditStamp,
    /// Organization URN, e.g. `urn:li:organization:123`.
    pub organization: String,
}

impl OrganizationAcl {
    /// Numeric part of the organization URN; empty when the URN has none.
    pub fn organization_id(&self) -> &str {
        extract_trailing_id(&self.organization)
    }
}

/// Who changed a record and when.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditStamp {
    pub actor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impersonator: Option<String>,
    /// Epoch milliseconds.
    pub time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Organization {
    pub vanity_name: String,
    pub localized_name: String,
    pub created: AuditStamp,
    pub version_tag: String,
    #[serde(rename = "coverPhotoV2")]
    pub cover_photo_v2: CroppedImage,
    pub organization_type: String,
    pub default_locale: Locale,
    pub localized_specialties: Vec<String>,
    pub name: LocalizedString,
    pub primary_organization_type: String,
    pub last_modified: AuditStamp,
    pub id: i64,
    pub localized_description: String,
    pub auto_created: bool,
    pub localized_website: String,
    #[serde(rename = "logoV2")]
    pub logo_v2: CroppedImage,
}

impl Organization {
    pub fn organization_id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    pub country: String,
    pub language: String,
}

impl Locale {
    /// Key used in `LocalizedString::localized`, e.g. `en_US`.
    pub fn key(&self) -> String {
        format!("{}_{}", self.language, self.country)
    }
}

/// Text with per-locale variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalizedString {
    pub localized: HashMap<String, String>,
    pub preferred_locale: Locale,
}

impl LocalizedString {
    /// Value for the preferred locale, falling back to any value.
    pub fn preferred(&self) -> Option<&str> {
        self.localized
            .get(&self.preferred_locale.key())
            .or_else(|| self.localized.values().next())
            .map(String::as_str)
    }
}

/// Image asset reference. `original` is a digital media asset URN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CroppedImage {
    pub original: String,
}

/// Rest.li `BATCH_GET` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchResult<T> {
    /// Entities keyed by the requested id.
    pub results: HashMap<String, T>,
    pub statuses: HashMap<String, u16>,
    pub errors: HashMap<String, serde_json::Value>,
}

impl<T> Default for BatchResult<T> {
    fn default() -> Self {
        Self {
            results: HashMap::new(),
            statuses: HashMap::new(),
            errors: HashMap::new(),
        }
    }
}

impl<T> BatchResult<T> {
    pub fn get(&self, id: &str) -> Option<&T> {
        self.results.get(id)
    }

    /// Ids that came back with an error entry.
    pub fn failed_ids(&self) -> Vec<&str> {
        self.errors.keys().map(String::as_str).collect()
    }
}
