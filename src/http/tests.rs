//! Tests for the HTTP transport

use super::*;
use crate::config::ClientConfig;
use crate::error::{Error, ErrorType};
use crate::params::Form;
use crate::types::Method;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "sk_test_123";
const BASIC_AUTH: &str = "Basic c2tfdGVzdF8xMjM6";

fn backend_for(server: &MockServer) -> HttpBackend {
    let config = ClientConfig::builder()
        .api_key(KEY)
        .base_url(format!("{}/v1", server.uri()))
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    HttpBackend::new(&config).unwrap()
}

#[tokio::test]
async fn test_get_sends_basic_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/recipients/rp_1"))
        .and(header("Authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "rp_1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = backend_for(&mock_server);
    let body = backend
        .call(Method::GET, "/recipients/rp_1", KEY, None)
        .await
        .unwrap();

    assert_eq!(body["id"], "rp_1");
}

#[tokio::test]
async fn test_get_encodes_form_as_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/recipients"))
        .and(query_param("limit", "3"))
        .and(query_param("starting_after", "rp_9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut form = Form::new();
    form.add("limit", "3");
    form.add("starting_after", "rp_9");

    let backend = backend_for(&mock_server);
    backend
        .call(Method::GET, "recipients", KEY, Some(&form))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_post_encodes_form_as_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/recipients"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string("name=Jane+Doe&type=individual"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "rp_2"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut form = Form::new();
    form.add("name", "Jane Doe");
    form.add("type", "individual");

    let backend = backend_for(&mock_server);
    let body = backend
        .call(Method::POST, "/recipients", KEY, Some(&form))
        .await
        .unwrap();

    assert_eq!(body["id"], "rp_2");
}

#[tokio::test]
async fn test_api_version_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/events/evt_1"))
        .and(header("Stripe-Version", "2014-01-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "evt_1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .api_key(KEY)
        .base_url(format!("{}/v1", mock_server.uri()))
        .api_version("2014-01-31")
        .build()
        .unwrap();
    let backend = HttpBackend::new(&config).unwrap();

    backend
        .call(Method::GET, "/events/evt_1", KEY, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_empty_body_is_null() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/recipients/rp_1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let backend = backend_for(&mock_server);
    let body = backend
        .call(Method::DELETE, "/recipients/rp_1", KEY, None)
        .await
        .unwrap();

    assert!(body.is_null());
}

#[tokio::test]
async fn test_api_error_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/recipients/rp_missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "type": "invalid_request_error",
                "message": "No such recipient: rp_missing",
                "param": "id"
            }
        })))
        .mount(&mock_server)
        .await;

    let backend = backend_for(&mock_server);
    let err = backend
        .call(Method::GET, "/recipients/rp_missing", KEY, None)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    let api = err.api_error().unwrap();
    assert_eq!(api.kind, ErrorType::InvalidRequestError);
    assert_eq!(api.param.as_deref(), Some("id"));
}

#[tokio::test]
async fn test_non_json_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/events"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = backend_for(&mock_server);
    let err = backend
        .call(Method::GET, "/events", KEY, None)
        .await
        .unwrap_err();

    // No retry: a single request is made and the error comes straight back
    assert!(matches!(err, Error::HttpStatus { status: 502, ref body } if body == "Bad Gateway"));
}

#[tokio::test]
async fn test_invalid_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/events"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&mock_server)
        .await;

    let backend = backend_for(&mock_server);
    let err = backend
        .call(Method::GET, "/events", KEY, None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::JsonParse(_)));
}

#[test]
fn test_build_url() {
    let config = ClientConfig::builder()
        .api_key(KEY)
        .base_url("https://api.example.com/v1/")
        .build()
        .unwrap();
    let backend = HttpBackend::new(&config).unwrap();

    assert_eq!(
        backend.build_url("/recipients").unwrap().as_str(),
        "https://api.example.com/v1/recipients"
    );
    assert_eq!(
        backend.build_url("events/evt_1").unwrap().as_str(),
        "https://api.example.com/v1/events/evt_1"
    );
    assert_eq!(
        backend.build_url("https://files.example.com/x").unwrap().as_str(),
        "https://files.example.com/x"
    );
}
