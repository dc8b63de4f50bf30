//! HTTP transport tests for fleet-rs.
//!
//! These tests use wiremock to serve fleet API responses, checking the
//! requests `HttpTransport` puts on the wire.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fleet_rs::prelude::*;

fn client_for(server: &MockServer) -> FleetClient {
    FleetClient::new(
        ClientConfig::default()
            .with_base_url(server.uri())
            .with_timeout(Duration::from_secs(5)),
    )
    .unwrap()
}

#[tokio::test]
async fn test_paginated_unit_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fleet/v1/units"))
        .and(query_param_is_missing("nextPageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "units": [{"name": "a.service", "desiredState": "launched"}],
            "nextPageToken": "page-2"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/fleet/v1/units"))
        .and(query_param("nextPageToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "units": [{"name": "b.service", "desiredState": "inactive"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let units = client_for(&mock_server).units().list().await.unwrap();

    assert_eq!(units.len(), 2);
    assert_eq!(units[0].name.as_str(), "a.service");
    assert_eq!(units[1].desired_state, Some(DesiredState::Inactive));
}

#[tokio::test]
async fn test_put_unit_sends_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/fleet/v1/units/web%401.service"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"desiredState": "loaded"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    client_for(&mock_server)
        .units()
        .load(&UnitName::new("web@1.service"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_unit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/fleet/v1/units/web.service"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    client_for(&mock_server)
        .units()
        .destroy(&UnitName::new("web.service"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_error_response_mapped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fleet/v1/units/missing.service"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": 404, "message": "unit does not exist"}
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .units()
        .get(&UnitName::new("missing.service"))
        .await
        .unwrap_err();

    match err {
        Error::Api { kind, code, message, .. } => {
            assert_eq!(kind, ApiErrorKind::NotFound);
            assert_eq!(code, 404);
            assert_eq!(message, "unit does not exist");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_service_unavailable_mapped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fleet/v1/machines"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": {"code": 503, "message": "fleet server unable to communicate with etcd"}
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).machines().list().await.unwrap_err();
    assert_eq!(err.api_kind(), Some(ApiErrorKind::ServiceUnavailable));
    assert!(err.is_server_error());
}

#[tokio::test]
async fn test_timeout_is_connection_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fleet/v1/machines"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"machines": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = FleetClient::new(
        ClientConfig::default()
            .with_base_url(mock_server.uri())
            .with_timeout(Duration::from_millis(200)),
    )
    .unwrap();

    let err = client.machines().list().await.unwrap_err();
    assert!(err.is_connection_error(), "unexpected error: {:?}", err);
}

#[tokio::test]
async fn test_unreachable_server_is_connection_error() {
    // Nothing listens on port 9 (discard) in the test environment.
    let client = FleetClient::new(
        ClientConfig::default()
            .with_base_url("http://127.0.0.1:9")
            .with_connect_timeout(Duration::from_millis(500)),
    )
    .unwrap();

    let err = client.read("units", &()).await.unwrap_err();
    assert!(err.is_connection_error(), "unexpected error: {:?}", err);
}

#[tokio::test]
async fn test_user_agent_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fleet/v1/state"))
        .and(header("User-Agent", "fleet-tests/1.0"))
        .and(query_param("unitName", "web.service"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"states": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FleetClient::new(
        ClientConfig::default()
            .with_base_url(mock_server.uri())
            .with_user_agent("fleet-tests/1.0"),
    )
    .unwrap();

    let query = StatesQuery::default().unit(UnitName::new("web.service"));
    let states = client.states().list(Some(query)).await.unwrap();
    assert!(states.is_empty());
}
