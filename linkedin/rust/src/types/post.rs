//! Posts API resources.
//!
//! See: https://learn.microsoft.com/en-us/linkedin/marketing/community-management/shares/posts-api

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Post {
    pub is_reshare_disabled_by_author: bool,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// e.g. `PUBLISHED`
    pub lifecycle_state: String,
    /// Epoch milliseconds.
    pub last_modified_at: i64,
    /// e.g. `PUBLIC`
    pub visibility: String,
    /// Epoch milliseconds.
    pub published_at: i64,
    /// Author URN (organization or person).
    pub author: String,
    /// Post URN, e.g. `urn:li:share:123` or `urn:li:ugcPost:123`.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reshare_context: Option<ReshareContext>,
    pub distribution: Distribution,
    pub commentary: String,
    pub lifecycle_state_info: LifecycleStateInfo,
}

impl Post {
    /// True when this post reshares another one.
    pub fn is_reshare(&self) -> bool {
        self.reshare_context.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReshareContext {
    /// Post being reshared.
    pub parent: String,
    /// Original post at the top of the reshare chain.
    pub root: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Distribution {
    /// e.g. `MAIN_FEED` or `NONE`
    pub feed_distribution: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LifecycleStateInfo {
    pub is_edited_by_author: bool,
}

/// Sort order of the posts-by-author finder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortBy {
    #[default]
    LastModified,
    Created,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LastModified => "LAST_MODIFIED",
            Self::Created => "CREATED",
        }
    }
}
