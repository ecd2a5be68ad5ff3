//! Integration tests for token exchange and introspection

use super::*;
use integrations_linkedin::errors::{AuthError, ValidationError};
use integrations_linkedin::LinkedInError;
use serde_json::json;
use wiremock::matchers::{any, body_string, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_exchange_authorization_code() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/oauth/v2/accessToken"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "grant_type=authorization_code&client_id=client-id&client_secret=client-secret\
             &redirect_uri=https%3A%2F%2Fapp.example.com%2Fcallback&code=AQTx",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "AQV8",
            "expires_in": 5184000,
            "refresh_token": "AQWA",
            "refresh_token_expires_in": 31536000,
            "scope": "r_basicprofile,r_organization_social"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = app_for(&mock_server);
    let token = app.exchange_authorization_code("AQTx").await.unwrap();

    assert_eq!(token.access_token, "AQV8");
    assert_eq!(token.refresh_token, "AQWA");
    assert_eq!(token.expires_in, 5184000);
    assert_eq!(token.scopes(), vec!["r_basicprofile", "r_organization_social"]);
}

#[tokio::test]
async fn test_refresh_token() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/oauth/v2/accessToken"))
        .and(body_string(
            "grant_type=refresh_token&client_id=client-id&client_secret=client-secret&refresh_token=AQWA",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "AQV9",
            "expires_in": 5184000
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = app_for(&mock_server);
    let token = app.refresh_token("AQWA").await.unwrap();

    assert_eq!(token.access_token, "AQV9");
    assert!(!token.has_refresh_token());
}

#[tokio::test]
async fn test_empty_code_makes_no_request() {
    let mock_server = setup_mock_server().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let app = app_for(&mock_server);
    let err = app.exchange_authorization_code("").await.unwrap_err();

    assert!(matches!(
        err,
        LinkedInError::Validation(ValidationError::MissingField { field: "code" })
    ));
}

#[tokio::test]
async fn test_exchange_rejected() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/oauth/v2/accessToken"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_request",
            "error_description": "Unable to retrieve access token: appid/redirect uri/code verifier does not match authorization code"
        })))
        .mount(&mock_server)
        .await;

    let app = app_for(&mock_server);
    let err = app.exchange_authorization_code("stale").await.unwrap_err();

    match err {
        LinkedInError::Auth(AuthError::TokenExchangeFailed { status, error, .. }) => {
            assert_eq!(status, 400);
            assert_eq!(error.as_deref(), Some("invalid_request"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_exchange_invalid_json() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/oauth/v2/accessToken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let app = app_for(&mock_server);
    let err = app.exchange_authorization_code("AQTx").await.unwrap_err();
    assert!(matches!(
        err,
        LinkedInError::Auth(AuthError::InvalidTokenResponse { status: 200, .. })
    ));

    let err = app.refresh_token("AQWA").await.unwrap_err();
    assert_eq!(err.error_code(), "LINKEDIN_AUTH");
    assert_eq!(err.status_code(), Some(200));
}

#[tokio::test]
async fn test_introspect_token() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/oauth/v2/introspectToken"))
        .and(body_string(
            "client_id=client-id&client_secret=client-secret&token=AQV8",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "active": true,
            "client_id": "client-id",
            "authorized_at": 1700000000,
            "created_at": 1700000000,
            "status": "active",
            "expires_at": 1705184000,
            "scope": "r_basicprofile",
            "auth_type": "3L"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = app_for(&mock_server).new_session("AQV8");
    let result = session.introspect_token("AQV8").await.unwrap();

    assert!(result.is_active());
    assert_eq!(result.status, "active");
    assert_eq!(result.expires_at, 1705184000);
    assert_eq!(result.auth_type, "3L");
}

#[tokio::test]
async fn test_introspect_token_rejected() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/oauth/v2/introspectToken"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_client",
            "error_description": "Client authentication failed"
        })))
        .mount(&mock_server)
        .await;

    let session = app_for(&mock_server).new_session("AQV8");
    let err = session.introspect_token("AQV8").await.unwrap_err();

    assert!(matches!(
        err,
        LinkedInError::Auth(AuthError::IntrospectionFailed { status: 401, .. })
    ));
}
