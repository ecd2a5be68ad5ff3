//! Integration tests using WireMock
//!
//! These tests run the real reqwest transport against a mock server and
//! verify the full request/response cycle: form encoding, headers, status
//! handling, pagination and cancellation.

mod oauth;
mod pagination;
mod session;

use integrations_linkedin::{Application, LinkedInConfig};
use wiremock::MockServer;

pub const CLIENT_ID: &str = "client-id";
pub const CLIENT_SECRET: &str = "client-secret";
pub const REDIRECT_URI: &str = "https://app.example.com/callback";

/// Helper to create a mock server
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Application whose OAuth and REST endpoints point at `server`.
pub fn app_for(server: &MockServer) -> Application {
    let config = LinkedInConfig::builder()
        .oauth_base_url(format!("{}/oauth/v2", server.uri()))
        .api_base_url(format!("{}/rest", server.uri()))
        .build()
        .expect("Failed to build config");

    Application::builder(CLIENT_ID, CLIENT_SECRET)
        .redirect_uri(REDIRECT_URI)
        .config(config)
        .build()
        .expect("Failed to build application")
}
