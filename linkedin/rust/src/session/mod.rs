//! Authenticated session against the LinkedIn REST API.
//!
//! A [`Session`] pairs an access token with the endpoints, API version and
//! transport used to call LinkedIn. Sessions are created by
//! [`Application::new_session`](crate::Application::new_session) and are
//! cheap to clone; clones share the transport and credentials but nothing
//! mutable.

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::config::{
    content_type, headers, validate_version, LinkedInConfig, ACCESS_TOKEN_QUERY_PARAM,
    RESTLI_PROTOCOL_VERSION,
};
use crate::context::RequestContext;
use crate::encoding::encode_url;
use crate::errors::{AuthError, LinkedInResult, TransportError};
use crate::services::{OrganizationsService, PostsService, ProfileService};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::types::{Credentials, IntrospectionRequest, Token, TokenIntrospection, TokenRequest};

const ACCESS_TOKEN_PATH: &str = "/accessToken";
const INTROSPECT_TOKEN_PATH: &str = "/introspectToken";

/// LinkedIn API session bound to one access token.
#[derive(Clone)]
pub struct Session {
    credentials: Arc<Credentials>,
    access_token: SecretString,
    api_base_url: String,
    oauth_base_url: String,
    linkedin_version: String,
    use_authorization_header: bool,
    user_agent: String,
    transport: Arc<dyn HttpTransport>,
    context: Option<RequestContext>,
}

impl Session {
    pub(crate) fn new(
        credentials: Arc<Credentials>,
        access_token: impl Into<String>,
        config: &LinkedInConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            credentials,
            access_token: SecretString::new(access_token.into()),
            api_base_url: config.api_base_url.clone(),
            oauth_base_url: config.oauth_base_url.clone(),
            linkedin_version: config.linkedin_version.clone(),
            use_authorization_header: config.use_authorization_header,
            user_agent: config.user_agent.clone(),
            transport,
            context: None,
        }
    }

    /// Returns a copy of this session that runs its requests under `context`.
    ///
    /// The original session is left untouched.
    pub fn with_context(&self, context: RequestContext) -> Session {
        let mut session = self.clone();
        session.context = Some(context);
        session
    }

    /// The attached request context, or a background context if none is set.
    pub fn context(&self) -> RequestContext {
        self.context.clone().unwrap_or_default()
    }

    /// Replace the access token used for resource requests.
    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.access_token = SecretString::new(access_token.into());
    }

    pub fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }

    /// Override the `LinkedIn-Version` header.
    ///
    /// Fails with `ConfigurationError::InvalidVersion` unless `version` is
    /// `YYYYMM`; the previous version is kept in that case.
    pub fn set_linkedin_version(&mut self, version: impl Into<String>) -> LinkedInResult<()> {
        let version = version.into();
        validate_version(&version)?;
        self.linkedin_version = version;
        Ok(())
    }

    pub fn linkedin_version(&self) -> &str {
        &self.linkedin_version
    }

    /// Send the access token as a bearer header (`true`) or as the
    /// `oauth2_access_token` query parameter (`false`).
    pub fn use_authorization_header(&mut self, enabled: bool) {
        self.use_authorization_header = enabled;
    }

    /// Override the REST API base URL.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.api_base_url = base_url.into();
    }

    pub fn base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Override the OAuth2 base URL used for introspection.
    pub fn set_oauth_base_url(&mut self, base_url: impl Into<String>) {
        self.oauth_base_url = base_url.into();
    }

    /// Replace the HTTP transport.
    pub fn set_http_transport(&mut self, transport: Arc<dyn HttpTransport>) {
        self.transport = transport;
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    // Service accessors

    /// Gets the organizations service.
    pub fn organizations(&self) -> OrganizationsService<'_> {
        OrganizationsService::new(self)
    }

    /// Gets the posts service.
    pub fn posts(&self) -> PostsService<'_> {
        PostsService::new(self)
    }

    /// Gets the profile service.
    pub fn profile(&self) -> ProfileService<'_> {
        ProfileService::new(self)
    }

    /// Sends a GET request for `path` relative to the API base URL.
    ///
    /// The status is returned as-is: non-2xx responses are not errors here,
    /// callers inspect `status` before decoding.
    #[instrument(skip(self), fields(version = %self.linkedin_version))]
    pub async fn get(&self, path: &str) -> LinkedInResult<HttpResponse> {
        let mut request = HttpRequest::get(self.resource_url(path))
            .with_header(headers::CONTENT_TYPE, content_type::JSON)
            .with_header(headers::RESTLI_PROTOCOL_VERSION, RESTLI_PROTOCOL_VERSION)
            .with_header(headers::LINKEDIN_VERSION, self.linkedin_version.as_str())
            .with_header(headers::USER_AGENT, self.user_agent.as_str());

        if self.use_authorization_header {
            request = request.with_header(
                headers::AUTHORIZATION,
                format!("Bearer {}", self.access_token.expose_secret()),
            );
        }

        debug!("sending request");
        let response = self.dispatch(request).await?;
        debug!(status = response.status, "received response");

        Ok(response)
    }

    /// Sends a GET request and decodes a 2xx JSON body.
    ///
    /// Non-2xx statuses fail with `AuthError::UnexpectedStatus`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> LinkedInResult<T> {
        let response = self.get(path).await?;

        if !response.is_success() {
            warn!(status = response.status, path = %path, "unexpected status");
            return Err(AuthError::UnexpectedStatus {
                status: response.status,
                path: path.to_string(),
            }
            .into());
        }

        Ok(response.json()?)
    }

    /// Queries the validity and metadata of `token`.
    #[instrument(skip_all)]
    pub async fn introspect_token(&self, token: &str) -> LinkedInResult<TokenIntrospection> {
        let request = IntrospectionRequest {
            client_id: self.credentials.client_id().to_string(),
            client_secret: self.credentials.client_secret().to_string(),
            token: token.trim().to_string(),
        };
        request.validate()?;

        let body = encode_form(&request.form_fields())?;
        let response = self.post_form(INTROSPECT_TOKEN_PATH, body).await?;

        if response.status != 200 {
            warn!(status = response.status, "token introspection rejected");
            return Err(AuthError::introspection(response.status, &response.body).into());
        }

        Ok(response.json()?)
    }

    /// Calls the token endpoint with a validated grant.
    #[instrument(skip_all, fields(grant_type = request.grant_type()))]
    pub(crate) async fn send_auth_request(&self, request: TokenRequest) -> LinkedInResult<Token> {
        request.validate()?;

        let body = encode_form(&request.form_fields())?;
        let response = self.post_form(ACCESS_TOKEN_PATH, body).await?;

        if response.status != 200 {
            warn!(status = response.status, "token exchange rejected");
            return Err(AuthError::token_exchange(response.status, &response.body).into());
        }

        response.json().map_err(|e| {
            warn!(status = response.status, "undecodable token response");
            AuthError::InvalidTokenResponse {
                status: response.status,
                message: e.to_string(),
            }
            .into()
        })
    }

    async fn post_form(&self, path: &str, body: String) -> LinkedInResult<HttpResponse> {
        let url = format!("{}{}", self.oauth_base_url.trim_end_matches('/'), path);
        let request = HttpRequest::post(url, content_type::URL_ENCODED, body)
            .with_header(headers::USER_AGENT, self.user_agent.as_str());

        debug!(path = %path, "sending OAuth request");
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: HttpRequest) -> LinkedInResult<HttpResponse> {
        let send = self.transport.send(request);
        match &self.context {
            Some(context) => context.run(send).await,
            None => send.await,
        }
    }

    fn resource_url(&self, path: &str) -> String {
        let mut url = self.api_base_url.trim_end_matches('/').to_string();
        if !path.starts_with('/') {
            url.push('/');
        }
        url.push_str(path);

        let token = self.access_token.expose_secret();
        if !self.use_authorization_header && !token.is_empty() {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(ACCESS_TOKEN_QUERY_PARAM);
            url.push('=');
            url.push_str(&encode_url(token));
        }

        url
    }
}

fn encode_form(fields: &[(&'static str, &str)]) -> Result<String, TransportError> {
    serde_urlencoded::to_string(fields).map_err(|e| TransportError::RequestFailed {
        message: format!("failed to encode form body: {}", e),
    })
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("client_id", &self.credentials.client_id())
            .field("access_token", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .field("oauth_base_url", &self.oauth_base_url)
            .field("linkedin_version", &self.linkedin_version)
            .field("use_authorization_header", &self.use_authorization_header)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
