//! Authenticated member profile.

use tracing::instrument;

use crate::errors::LinkedInResult;
use crate::session::Session;
use crate::types::JsonObject;

/// Service for the authenticated member.
pub struct ProfileService<'a> {
    session: &'a Session,
}

impl<'a> ProfileService<'a> {
    /// Creates a new profile service.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Gets the profile of the member owning the access token.
    ///
    /// The shape depends on the granted scopes, so the body is left untyped.
    #[instrument(skip(self))]
    pub async fn me(&self) -> LinkedInResult<JsonObject> {
        self.session.get_json("/me").await
    }
}
