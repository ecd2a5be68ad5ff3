//! Integration tests for resource requests

use super::*;
use integrations_linkedin::errors::{CancelledError, TransportError};
use integrations_linkedin::{JsonObject, LinkedInError, RequestContext};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_get_me() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/rest/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "123"})))
        .mount(&mock_server)
        .await;

    let session = app_for(&mock_server).new_session("tok");

    let response = session.get("/me").await.unwrap();
    assert_eq!(response.status, 200);

    let body: JsonObject = response.json().unwrap();
    let mut expected = JsonObject::new();
    expected.insert("id".to_string(), json!("123"));
    assert_eq!(body, expected);

    let me = session.profile().me().await.unwrap();
    assert_eq!(me.get("id"), Some(&json!("123")));
}

#[tokio::test]
async fn test_unauthorized_status_is_returned() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/rest/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": 401,
            "serviceErrorCode": 65600,
            "code": "INVALID_ACCESS_TOKEN",
            "message": "Invalid access token"
        })))
        .mount(&mock_server)
        .await;

    let session = app_for(&mock_server).new_session("expired");
    let response = session.get("me").await.unwrap();

    assert_eq!(response.status, 401);
    assert!(response.text().contains("INVALID_ACCESS_TOKEN"));
}

#[tokio::test]
async fn test_required_headers() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/rest/me"))
        .and(header("Content-Type", "application/json"))
        .and(header("X-RestLi-Protocol-Version", "2.0.0"))
        .and(header("LinkedIn-Version", "202405"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut session = app_for(&mock_server).new_session("tok");
    session.set_linkedin_version("202405").unwrap();

    let response = session.get("/me").await.unwrap();
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_access_token_query_param() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/rest/me"))
        .and(query_param("oauth2_access_token", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut session = app_for(&mock_server).new_session("tok");
    session.use_authorization_header(false);

    let response = session.get("/me").await.unwrap();
    assert_eq!(response.status, 200);

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_deadline_cancels_in_flight_request() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/rest/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "123"}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let session = app_for(&mock_server)
        .new_session("tok")
        .with_context(RequestContext::background().with_timeout(Duration::from_millis(100)));

    let err = session.get("/me").await.unwrap_err();
    assert!(matches!(
        err,
        LinkedInError::Cancelled(CancelledError::DeadlineExceeded)
    ));
}

#[tokio::test]
async fn test_cancel_in_flight_request() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/rest/me"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let context = RequestContext::background();
    let session = app_for(&mock_server)
        .new_session("tok")
        .with_context(context.clone());

    let canceller = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        context.cancel();
    };
    let (result, _) = tokio::join!(session.get("/me"), canceller);

    assert!(result.unwrap_err().is_cancelled());
}

#[tokio::test]
async fn test_with_context_leaves_parent_untouched() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/rest/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "123"})))
        .mount(&mock_server)
        .await;

    let parent = app_for(&mock_server).new_session("tok");
    let child = parent.with_context(RequestContext::background());
    child.context().cancel();

    let err = child.get("/me").await.unwrap_err();
    assert!(err.is_cancelled());

    let response = parent.get("/me").await.unwrap();
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_connection_failure() {
    let config = LinkedInConfig::builder()
        .api_base_url("http://127.0.0.1:1/rest")
        .connect_timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    let app = Application::builder(CLIENT_ID, CLIENT_SECRET)
        .config(config)
        .build()
        .unwrap();

    let err = app.new_session("tok").get("/me").await.unwrap_err();
    assert!(matches!(err, LinkedInError::Transport(_)));
    assert!(!matches!(
        err,
        LinkedInError::Transport(TransportError::Timeout { .. })
    ));
}
