//! Configuration types for the LinkedIn client.
//!
//! See: https://learn.microsoft.com/en-us/linkedin/marketing/versioning

use crate::errors::{ConfigurationError, LinkedInError};
use std::time::Duration;
use url::Url;

/// Default OAuth2 base URL (token exchange, introspection, authorization).
pub const DEFAULT_OAUTH_BASE_URL: &str = "https://www.linkedin.com/oauth/v2";

/// Default versioned REST API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.linkedin.com/rest";

/// Default LinkedIn API version (calendar based, `YYYYMM`).
pub const DEFAULT_LINKEDIN_VERSION: &str = "202510";

/// Rest.li protocol version sent with every resource request.
pub const RESTLI_PROTOCOL_VERSION: &str = "2.0.0";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default User-Agent header.
pub const DEFAULT_USER_AGENT: &str = "integrations-linkedin/0.1.0";

/// HTTP headers used in LinkedIn API requests.
///
/// https://linkedin.github.io/rest.li/spec/protocol
pub mod headers {
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const RESTLI_PROTOCOL_VERSION: &str = "X-RestLi-Protocol-Version";
    pub const LINKEDIN_VERSION: &str = "LinkedIn-Version";
    pub const AUTHORIZATION: &str = "Authorization";
    pub const USER_AGENT: &str = "User-Agent";
}

/// Request body content types.
pub mod content_type {
    pub const URL_ENCODED: &str = "application/x-www-form-urlencoded";
    pub const JSON: &str = "application/json";
}

/// Query parameter carrying the access token when the bearer header is off.
pub const ACCESS_TOKEN_QUERY_PARAM: &str = "oauth2_access_token";

/// LinkedIn client configuration.
#[derive(Debug, Clone)]
pub struct LinkedInConfig {
    /// OAuth2 endpoint base URL.
    pub oauth_base_url: String,
    /// Versioned REST API base URL.
    pub api_base_url: String,
    /// `LinkedIn-Version` header value.
    pub linkedin_version: String,
    /// Send the access token as a bearer header (otherwise as a query parameter).
    pub use_authorization_header: bool,
    /// Request timeout.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// User-Agent header.
    pub user_agent: String,
}

impl Default for LinkedInConfig {
    fn default() -> Self {
        Self {
            oauth_base_url: DEFAULT_OAUTH_BASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            linkedin_version: DEFAULT_LINKEDIN_VERSION.to_string(),
            use_authorization_header: true,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl LinkedInConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> LinkedInConfigBuilder {
        LinkedInConfigBuilder::new()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), LinkedInError> {
        validate_base_url(&self.oauth_base_url)?;
        validate_base_url(&self.api_base_url)?;
        validate_version(&self.linkedin_version)?;

        if self.user_agent.is_empty() {
            return Err(ConfigurationError::InvalidConfig {
                message: "User-Agent cannot be empty".to_string(),
            }
            .into());
        }

        if self.timeout.is_zero() {
            return Err(ConfigurationError::InvalidConfig {
                message: "timeout must be greater than zero".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Accepts absolute `http`/`https` URLs that have a host.
fn validate_base_url(url: &str) -> Result<(), ConfigurationError> {
    let valid = match Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && !parsed.cannot_be_a_base()
                && parsed.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    };

    if !valid {
        return Err(ConfigurationError::InvalidBaseUrl {
            url: url.to_string(),
        });
    }
    Ok(())
}

/// Checks a `LinkedIn-Version` value has the `YYYYMM` shape.
pub(crate) fn validate_version(version: &str) -> Result<(), ConfigurationError> {
    if version.len() != 6 || !version.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigurationError::InvalidVersion {
            version: version.to_string(),
        });
    }
    Ok(())
}

/// Builder for LinkedInConfig.
#[derive(Debug, Default)]
pub struct LinkedInConfigBuilder {
    oauth_base_url: Option<String>,
    api_base_url: Option<String>,
    linkedin_version: Option<String>,
    use_authorization_header: Option<bool>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl LinkedInConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the OAuth2 base URL.
    pub fn oauth_base_url(mut self, url: impl Into<String>) -> Self {
        self.oauth_base_url = Some(url.into());
        self
    }

    /// Sets the REST API base URL.
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Sets the LinkedIn API version.
    pub fn linkedin_version(mut self, version: impl Into<String>) -> Self {
        self.linkedin_version = Some(version.into());
        self
    }

    /// Chooses bearer-header (true) or query-parameter (false) token passing.
    pub fn use_authorization_header(mut self, enabled: bool) -> Self {
        self.use_authorization_header = Some(enabled);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Result<LinkedInConfig, LinkedInError> {
        let config = LinkedInConfig {
            oauth_base_url: self
                .oauth_base_url
                .unwrap_or_else(|| DEFAULT_OAUTH_BASE_URL.to_string()),
            api_base_url: self
                .api_base_url
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            linkedin_version: self
                .linkedin_version
                .unwrap_or_else(|| DEFAULT_LINKEDIN_VERSION.to_string()),
            use_authorization_header: self.use_authorization_header.unwrap_or(true),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        };

        config.validate()?;
        Ok(config)
    }
}
