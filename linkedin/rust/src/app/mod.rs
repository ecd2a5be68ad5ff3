//! LinkedIn application: client credentials and the OAuth2 code flow.
//!
//! See: https://learn.microsoft.com/en-us/linkedin/shared/authentication/authorization-code-flow

use std::sync::Arc;
use tracing::instrument;

use crate::config::LinkedInConfig;
use crate::errors::{ConfigurationError, LinkedInResult, ValidationError};
use crate::session::Session;
use crate::transport::{HttpTransport, ReqwestHttpTransport};
use crate::types::{Credentials, Token, TokenRequest};

const AUTHORIZATION_PATH: &str = "/authorization";

/// A registered LinkedIn application.
///
/// Owns the client credentials and the HTTP transport shared by every
/// session it creates.
pub struct Application {
    credentials: Arc<Credentials>,
    config: LinkedInConfig,
    transport: Arc<dyn HttpTransport>,
}

impl Application {
    /// Creates an application with default configuration.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> LinkedInResult<Self> {
        Self::builder(client_id, client_secret).build()
    }

    /// Creates a new application builder.
    pub fn builder(client_id: impl Into<String>, client_secret: impl Into<String>) -> ApplicationBuilder {
        ApplicationBuilder::new(client_id, client_secret)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &LinkedInConfig {
        &self.config
    }

    /// Creates a session for `access_token`. No I/O.
    pub fn new_session(&self, access_token: impl Into<String>) -> Session {
        Session::new(
            self.credentials.clone(),
            access_token,
            &self.config,
            self.transport.clone(),
        )
    }

    /// Exchanges an authorization code for tokens.
    #[instrument(skip_all)]
    pub async fn exchange_authorization_code(&self, code: &str) -> LinkedInResult<Token> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ValidationError::missing("code").into());
        }

        let request = TokenRequest::AuthorizationCode {
            client_id: self.credentials.client_id().to_string(),
            client_secret: self.credentials.client_secret().to_string(),
            redirect_uri: self.credentials.redirect_uri().unwrap_or_default().to_string(),
            code: code.to_string(),
        };

        self.new_session("").send_auth_request(request).await
    }

    /// Exchanges a refresh token for a new access token.
    #[instrument(skip_all)]
    pub async fn refresh_token(&self, refresh_token: &str) -> LinkedInResult<Token> {
        let refresh_token = refresh_token.trim();
        if refresh_token.is_empty() {
            return Err(ValidationError::missing("refresh_token").into());
        }

        let request = TokenRequest::RefreshToken {
            client_id: self.credentials.client_id().to_string(),
            client_secret: self.credentials.client_secret().to_string(),
            refresh_token: refresh_token.to_string(),
        };

        self.new_session("").send_auth_request(request).await
    }

    /// Builds the URL the member is sent to for granting `scopes`.
    pub fn authorization_url(&self, state: &str, scopes: &[&str]) -> LinkedInResult<String> {
        let redirect_uri = self
            .credentials
            .redirect_uri()
            .filter(|uri| !uri.trim().is_empty())
            .ok_or(ValidationError::missing("redirect_uri"))?;
        if state.trim().is_empty() {
            return Err(ValidationError::missing("state").into());
        }

        let base = format!(
            "{}{}",
            self.config.oauth_base_url.trim_end_matches('/'),
            AUTHORIZATION_PATH
        );
        let mut url = url::Url::parse(&base).map_err(|_| ConfigurationError::InvalidBaseUrl {
            url: self.config.oauth_base_url.clone(),
        })?;

        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", self.credentials.client_id())
            .append_pair("redirect_uri", redirect_uri)
            .append_pair("state", state)
            .append_pair("scope", &scopes.join(" "));

        Ok(url.into())
    }
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("credentials", &self.credentials)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for Application.
pub struct ApplicationBuilder {
    client_id: String,
    client_secret: String,
    redirect_uri: Option<String>,
    config: Option<LinkedInConfig>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ApplicationBuilder {
    /// Creates a new builder.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: None,
            config: None,
            transport: None,
        }
    }

    /// Sets the redirect URI registered for the application.
    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Sets the configuration.
    pub fn config(mut self, config: LinkedInConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the HTTP transport used by every session.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the application.
    pub fn build(self) -> LinkedInResult<Application> {
        if self.client_id.trim().is_empty() {
            return Err(ValidationError::missing("client_id").into());
        }
        if self.client_secret.trim().is_empty() {
            return Err(ValidationError::missing("client_secret").into());
        }

        let config = self.config.unwrap_or_default();
        config.validate()?;

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestHttpTransport::new(config.timeout, config.connect_timeout)?),
        };

        let mut credentials = Credentials::new(self.client_id, self.client_secret);
        if let Some(redirect_uri) = self.redirect_uri {
            credentials = credentials.with_redirect_uri(redirect_uri);
        }

        Ok(Application {
            credentials: Arc::new(credentials),
            config,
            transport,
        })
    }
}
