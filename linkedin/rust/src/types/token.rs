//! Token Types
//!
//! OAuth2 credentials, token exchange requests and responses, and token
//! introspection results.
//!
//! See: https://learn.microsoft.com/en-us/linkedin/shared/authentication/authorization-code-flow

use chrono::{DateTime, Duration, TimeZone, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Client credentials of a LinkedIn application.
///
/// https://www.linkedin.com/developers/apps/{appID}/auth
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: SecretString,
    redirect_uri: Option<String>,
}

impl Credentials {
    /// Create credentials without a redirect URI.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::new(client_secret.into()),
            redirect_uri: None,
        }
    }

    /// Set the redirect URI registered for the application.
    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        self.client_secret.expose_secret()
    }

    pub fn redirect_uri(&self) -> Option<&str> {
        self.redirect_uri.as_deref()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

/// Access and refresh tokens returned by the token endpoint.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    /// Access token lifetime in seconds.
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default)]
    pub refresh_token: String,
    /// Refresh token lifetime in seconds.
    #[serde(default)]
    pub refresh_token_expires_in: i64,
    /// Comma separated granted scopes.
    #[serde(default)]
    pub scope: String,
}

impl Token {
    /// Granted scopes as a list.
    pub fn scopes(&self) -> Vec<String> {
        split_scopes(&self.scope)
    }

    /// True when the response carried a refresh token.
    pub fn has_refresh_token(&self) -> bool {
        !self.refresh_token.is_empty()
    }

    /// When the access token expires, given when it was issued.
    pub fn access_token_expires_at(&self, issued_at: DateTime<Utc>) -> DateTime<Utc> {
        issued_at + Duration::seconds(self.expires_in)
    }

    /// When the refresh token expires, given when it was issued.
    pub fn refresh_token_expires_at(&self, issued_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.has_refresh_token()
            .then(|| issued_at + Duration::seconds(self.refresh_token_expires_in))
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .field("refresh_token", &"[REDACTED]")
            .field("refresh_token_expires_in", &self.refresh_token_expires_in)
            .field("scope", &self.scope)
            .finish()
    }
}

/// Token state reported by the introspection endpoint.
///
/// See: https://learn.microsoft.com/en-us/linkedin/shared/authentication/token-introspection
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenIntrospection {
    pub active: bool,
    pub client_id: String,
    /// Unix seconds.
    pub authorized_at: i64,
    /// Unix seconds.
    pub created_at: i64,
    /// e.g. `active`, `expired`, `revoked`
    pub status: String,
    /// Unix seconds.
    pub expires_at: i64,
    pub scope: String,
    /// e.g. `3L` (three-legged) or `2L`
    pub auth_type: String,
}

impl TokenIntrospection {
    /// Check if token is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Expiry as a timestamp, if the server reported one.
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        if self.expires_at <= 0 {
            return None;
        }
        Utc.timestamp_opt(self.expires_at, 0).single()
    }

    /// Remaining lifetime in seconds relative to `now` (zero once expired).
    pub fn remaining_lifetime(&self, now: DateTime<Utc>) -> Option<i64> {
        self.expires_at_utc()
            .map(|exp| (exp - now).num_seconds().max(0))
    }

    /// Granted scopes as a list.
    pub fn scopes(&self) -> Vec<String> {
        split_scopes(&self.scope)
    }
}

fn split_scopes(scope: &str) -> Vec<String> {
    scope
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Parameters of a token endpoint call, one variant per grant type.
#[derive(Clone)]
pub enum TokenRequest {
    AuthorizationCode {
        client_id: String,
        client_secret: String,
        redirect_uri: String,
        code: String,
    },
    RefreshToken {
        client_id: String,
        client_secret: String,
        refresh_token: String,
    },
}

impl TokenRequest {
    /// The `grant_type` form value.
    pub fn grant_type(&self) -> &'static str {
        match self {
            Self::AuthorizationCode { .. } => "authorization_code",
            Self::RefreshToken { .. } => "refresh_token",
        }
    }

    /// Check every required field is present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::AuthorizationCode {
                client_id,
                client_secret,
                redirect_uri,
                code,
            } => {
                require("client_id", client_id)?;
                require("client_secret", client_secret)?;
                require("redirect_uri", redirect_uri)?;
                require("code", code)
            }
            Self::RefreshToken {
                client_id,
                client_secret,
                refresh_token,
            } => {
                require("client_id", client_id)?;
                require("client_secret", client_secret)?;
                require("refresh_token", refresh_token)
            }
        }
    }

    /// Form fields in the order they are sent.
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields: Vec<(&'static str, &str)> = vec![("grant_type", self.grant_type())];
        match self {
            Self::AuthorizationCode {
                client_id,
                client_secret,
                redirect_uri,
                code,
            } => {
                fields.push(("client_id", client_id.as_str()));
                fields.push(("client_secret", client_secret.as_str()));
                fields.push(("redirect_uri", redirect_uri.as_str()));
                fields.push(("code", code.as_str()));
            }
            Self::RefreshToken {
                client_id,
                client_secret,
                refresh_token,
            } => {
                fields.push(("client_id", client_id.as_str()));
                fields.push(("client_secret", client_secret.as_str()));
                fields.push(("refresh_token", refresh_token.as_str()));
            }
        }
        fields
    }
}

impl std::fmt::Debug for TokenRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRequest")
            .field("grant_type", &self.grant_type())
            .finish_non_exhaustive()
    }
}

/// Parameters of a token introspection call.
#[derive(Clone)]
pub struct IntrospectionRequest {
    pub client_id: String,
    pub client_secret: String,
    pub token: String,
}

impl IntrospectionRequest {
    /// Check every required field is present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("client_id", &self.client_id)?;
        require("client_secret", &self.client_secret)?;
        require("token", &self.token)
    }

    /// Form fields in the order they are sent.
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("token", self.token.as_str()),
        ]
    }
}

impl std::fmt::Debug for IntrospectionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntrospectionRequest")
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::missing(field));
    }
    Ok(())
}
