//! Integration tests for paginated finders and typed services

use super::*;
use integrations_linkedin::errors::AuthError;
use integrations_linkedin::{LinkedInError, SortBy, Urn};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

fn acl(org: u64) -> serde_json::Value {
    json!({
        "roleAssignee": "urn:li:person:abc",
        "state": "APPROVED",
        "role": "ADMINISTRATOR",
        "organization": format!("urn:li:organization:{}", org)
    })
}

#[tokio::test]
async fn test_acl_pages_follow_next_links() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/rest/organizationAcls"))
        .and(query_param("q", "roleAssignee"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paging": {
                "start": 0,
                "count": 2,
                "total": 3,
                "links": [{
                    "type": "application/json",
                    "rel": "next",
                    "href": "/rest/organizationAcls?count=2&q=roleAssignee&start=2"
                }]
            },
            "elements": [acl(1), acl(2)]
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/organizationAcls"))
        .and(query_param("start", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paging": {
                "start": 2,
                "count": 2,
                "total": 3,
                "links": [{
                    "type": "application/json",
                    "rel": "prev",
                    "href": "/rest/organizationAcls?count=2&q=roleAssignee&start=0"
                }]
            },
            "elements": [acl(3)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = app_for(&mock_server).new_session("tok");

    let first = session.organizations().list_acls(2).await.unwrap();
    assert_eq!(
        first.next_page_url().as_deref(),
        Some("/organizationAcls?count=2&q=roleAssignee&start=2")
    );

    let acls = session.organizations().acl_pages(2).collect_all().await;
    let ids: Vec<String> = acls
        .unwrap()
        .iter()
        .map(|acl| acl.organization_id().to_string())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_page_iterator_keeps_cursor_on_error_status() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/rest/organizationAcls"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "status": 403,
            "message": "Not enough permissions to access: organizationAcls"
        })))
        .mount(&mock_server)
        .await;

    let session = app_for(&mock_server).new_session("tok");
    let mut pages = session.organizations().acl_pages(10);

    let err = pages.next_page().await.unwrap_err();
    assert!(matches!(
        err,
        LinkedInError::Auth(AuthError::UnexpectedStatus { status: 403, .. })
    ));
    assert!(pages.has_more());
    assert_eq!(pages.pages_fetched(), 0);
}

#[tokio::test]
async fn test_page_iterator_retries_after_server_error() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/rest/organizationAcls"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paging": {
                "start": 0,
                "count": 1,
                "links": [{
                    "type": "application/json",
                    "rel": "next",
                    "href": "/rest/organizationAcls?count=1&q=roleAssignee&start=1"
                }]
            },
            "elements": [acl(1)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/organizationAcls"))
        .and(query_param("start", "1"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/organizationAcls"))
        .and(query_param("start", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paging": {"start": 1, "count": 1, "links": []},
            "elements": [acl(2)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = app_for(&mock_server).new_session("tok");
    let mut pages = session.organizations().acl_pages(1);

    let first = pages.next_page().await.unwrap().unwrap();
    assert_eq!(first.elements[0].organization_id(), "1");

    let err = pages.next_page().await.unwrap_err();
    assert!(err.is_retryable());
    assert!(pages.has_more());

    let second = pages.next_page().await.unwrap().unwrap();
    assert_eq!(second.elements[0].organization_id(), "2");
    assert!(pages.next_page().await.unwrap().is_none());
}

#[tokio::test]
async fn test_posts_by_author() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/rest/posts"))
        .and(query_param("q", "author"))
        .and(query_param("author", "urn:li:organization:123"))
        .and(query_param("count", "5"))
        .and(query_param("sortBy", "CREATED"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paging": {"start": 0, "count": 5, "links": []},
            "elements": [{
                "id": "urn:li:share:7000",
                "author": "urn:li:organization:123",
                "commentary": "hello",
                "lifecycleState": "PUBLISHED",
                "visibility": "PUBLIC",
                "distribution": {"feedDistribution": "MAIN_FEED"}
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = app_for(&mock_server).new_session("tok");
    let author = Urn::organization(123).to_string();
    let page = session
        .posts()
        .list_by_author(&author, 5, SortBy::Created)
        .await
        .unwrap();

    assert!(!page.has_next());
    assert_eq!(page.len(), 1);
    assert_eq!(page.elements[0].commentary, "hello");
    assert_eq!(page.elements[0].distribution.feed_distribution, "MAIN_FEED");
}

#[tokio::test]
async fn test_get_organization() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/rest/organizations/123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 123,
            "vanityName": "acme",
            "localizedName": "Acme",
            "logoV2": {"original": "urn:li:digitalmediaAsset:L1"}
        })))
        .mount(&mock_server)
        .await;

    let session = app_for(&mock_server).new_session("tok");
    let org = session.organizations().get(123).await.unwrap();

    assert_eq!(org.organization_id(), 123);
    assert_eq!(org.localized_name, "Acme");
    assert_eq!(org.logo_v2.original, "urn:li:digitalmediaAsset:L1");
}

#[tokio::test]
async fn test_batch_get_organizations() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/rest/organizations"))
        .and(query_param("ids", "List(1,2)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": {
                "1": {"id": 1, "localizedName": "One"},
                "2": {"id": 2, "localizedName": "Two"}
            },
            "statuses": {"1": 200, "2": 200},
            "errors": {}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = app_for(&mock_server).new_session("tok");
    let batch = session.organizations().batch_get(&[1, 2]).await.unwrap();

    assert_eq!(batch.results.len(), 2);
    assert_eq!(batch.get("2").map(|o| o.localized_name.as_str()), Some("Two"));
    assert!(batch.failed_ids().is_empty());
}
