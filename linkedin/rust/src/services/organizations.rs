//! Organization operations.

use tracing::instrument;

use crate::errors::LinkedInResult;
use crate::pagination::{Page, PageIterator};
use crate::session::Session;
use crate::types::{restli, BatchResult, Organization, OrganizationAcl};

/// Service for organization operations.
pub struct OrganizationsService<'a> {
    session: &'a Session,
}

impl<'a> OrganizationsService<'a> {
    /// Creates a new organizations service.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Lists the first page of organizations the member has a role on.
    #[instrument(skip(self))]
    pub async fn list_acls(&self, count: u32) -> LinkedInResult<Page<OrganizationAcl>> {
        self.session.get_json(&acls_path(count)).await
    }

    /// Iterates every page of the member's organization roles.
    pub fn acl_pages(&self, count: u32) -> PageIterator<'a, OrganizationAcl> {
        PageIterator::new(self.session, acls_path(count))
    }

    /// Gets an organization by id.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> LinkedInResult<Organization> {
        self.session.get_json(&format!("/organizations/{}", id)).await
    }

    /// Gets several organizations in one call.
    #[instrument(skip(self))]
    pub async fn batch_get(&self, ids: &[i64]) -> LinkedInResult<BatchResult<Organization>> {
        let ids = restli::list(ids.iter().map(i64::to_string));
        self.session
            .get_json(&format!("/organizations?ids={}", ids))
            .await
    }
}

fn acls_path(count: u32) -> String {
    format!("/organizationAcls?q=roleAssignee&count={}", count)
}
