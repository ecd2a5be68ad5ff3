//! LinkedIn error types.
//!
//! Every operation returns [`LinkedInResult`]. Errors are grouped into the
//! categories callers branch on: bad input, network failures, rejections by
//! the remote API, undecodable responses, and cancelled requests.

use std::time::Duration;
use thiserror::Error;

/// Root error type for the LinkedIn client.
#[derive(Error, Debug)]
pub enum LinkedInError {
    #[error("linkedIn: validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("linkedIn: transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("linkedIn: auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("linkedIn: decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("linkedIn: {0}")]
    Cancelled(#[from] CancelledError),

    #[error("linkedIn: configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl LinkedInError {
    /// Get error code for telemetry.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "LINKEDIN_VALIDATION",
            Self::Transport(_) => "LINKEDIN_TRANSPORT",
            Self::Auth(_) => "LINKEDIN_AUTH",
            Self::Decode(_) => "LINKEDIN_DECODE",
            Self::Cancelled(_) => "LINKEDIN_CANCELLED",
            Self::Configuration(_) => "LINKEDIN_CONFIG",
        }
    }

    /// HTTP status code, when the error was produced from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Auth(e) => Some(e.status()),
            _ => None,
        }
    }

    /// Check if the failed call could succeed when issued again.
    ///
    /// The client never retries on its own; this is a hint for callers
    /// implementing their own policy.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_retryable(),
            Self::Auth(e) => matches!(e.status(), 429 | 500 | 502 | 503 | 504),
            _ => false,
        }
    }

    /// Check if the error was caused by cancellation or an expired deadline.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}

/// Missing or malformed caller input. Raised before any I/O.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("malformed URL encoding: {message}")]
    MalformedEncoding { message: String },

    #[error("invalid URN: {urn}")]
    InvalidUrn { urn: String },
}

impl ValidationError {
    pub(crate) fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}

/// Network-level failure while reaching LinkedIn.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("cannot reach linkedIn server: {message}")]
    ConnectionFailed { message: String },

    #[error("request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("request failed: {message}")]
    RequestFailed { message: String },
}

impl TransportError {
    /// Check if error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ConnectionFailed { .. } | Self::Timeout { .. })
    }
}

/// Non-success status returned by the remote API.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("failed to receive tokens with status {status}{}", describe(.error, .error_description))]
    TokenExchangeFailed {
        status: u16,
        error: Option<String>,
        error_description: Option<String>,
    },

    #[error("failed to introspect token with status {status}{}", describe(.error, .error_description))]
    IntrospectionFailed {
        status: u16,
        error: Option<String>,
        error_description: Option<String>,
    },

    #[error("invalid token response with status {status}: {message}")]
    InvalidTokenResponse { status: u16, message: String },

    #[error("unexpected status {status} for {path}")]
    UnexpectedStatus { status: u16, path: String },
}

impl AuthError {
    /// HTTP status code returned by LinkedIn.
    pub fn status(&self) -> u16 {
        match self {
            Self::TokenExchangeFailed { status, .. }
            | Self::IntrospectionFailed { status, .. }
            | Self::InvalidTokenResponse { status, .. }
            | Self::UnexpectedStatus { status, .. } => *status,
        }
    }

    pub(crate) fn token_exchange(status: u16, body: &[u8]) -> Self {
        let parsed = parse_error_response(body);
        Self::TokenExchangeFailed {
            status,
            error: parsed.as_ref().map(|r| r.error.clone()),
            error_description: parsed.and_then(|r| r.error_description),
        }
    }

    pub(crate) fn introspection(status: u16, body: &[u8]) -> Self {
        let parsed = parse_error_response(body);
        Self::IntrospectionFailed {
            status,
            error: parsed.as_ref().map(|r| r.error.clone()),
            error_description: parsed.and_then(|r| r.error_description),
        }
    }
}

fn describe(error: &Option<String>, description: &Option<String>) -> String {
    match (error, description) {
        (Some(e), Some(d)) => format!(" ({}: {})", e, d),
        (Some(e), None) => format!(" ({})", e),
        _ => String::new(),
    }
}

/// Response body could not be read or decoded.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("cannot read linkedIn response: {message}")]
    BodyRead { message: String },

    #[error("invalid JSON: {message}")]
    InvalidJson { message: String },
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidJson {
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for LinkedInError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.into())
    }
}

/// The request context was cancelled or its deadline passed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CancelledError {
    #[error("request cancelled")]
    Cancelled,

    #[error("request deadline exceeded")]
    DeadlineExceeded,
}

/// Invalid client configuration.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("invalid base URL: {url}")]
    InvalidBaseUrl { url: String },

    #[error("invalid LinkedIn-Version {version:?}, expected YYYYMM")]
    InvalidVersion { version: String },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Result type for LinkedIn operations.
pub type LinkedInResult<T> = Result<T, LinkedInError>;

/// OAuth2 error response body.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct OAuthErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// Parse an OAuth2 error response from an HTTP body.
pub fn parse_error_response(body: &[u8]) -> Option<OAuthErrorResponse> {
    serde_json::from_slice(body).ok()
}
