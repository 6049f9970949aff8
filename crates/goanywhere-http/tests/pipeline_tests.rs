//! End-to-end pipeline tests against a mock server

use goanywhere_http::header::{HeaderValue, AUTHORIZATION, USER_AGENT};
use goanywhere_http::{
    decode, Content, HeaderMap, HttpConfig, HttpError, MethodsClient, Params, PipelineBuilder,
    StatusCode,
};
use serde_json::json;
use std::sync::Arc;

fn client_for(server_url: &str, config: HttpConfig) -> MethodsClient {
    let pipeline = PipelineBuilder::from_config(config.with_endpoint(server_url))
        .build()
        .unwrap();
    MethodsClient::new(Arc::new(pipeline))
}

#[tokio::test]
async fn test_request_passes_through_the_standard_chain() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/goanywhere/rest/gacmd/v1/jobs/42")
        .match_header("authorization", "Basic YWRtaW46c2VjcmV0")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"jobNumber": 42}"#)
        .create_async()
        .await;

    let client = client_for(
        &server.url(),
        HttpConfig::new().with_credentials("admin", "secret"),
    );
    let response = client.get("/jobs/42", &[], HeaderMap::new()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(decode(&response), Content::Json(json!({"jobNumber": 42})));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_authentication_overwrites_caller_authorization() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/jobs/1")
        .match_header("authorization", "Basic YWRtaW46c2VjcmV0")
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(
        &server.url(),
        HttpConfig::new()
            .with_credentials("admin", "secret")
            .with_path_prefix(""),
    );
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer stale"));
    client.get("/jobs/1", &[], headers).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_default_user_agent_is_sent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/ping")
        .match_header(
            "user-agent",
            mockito::Matcher::Regex("^goanywhere-rs/".to_string()),
        )
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(&server.url(), HttpConfig::new().with_path_prefix(""));
    client.get("/ping", &[], HeaderMap::new()).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_caller_user_agent_survives_defaults() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/ping")
        .match_header("user-agent", "custom-agent/9")
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(&server.url(), HttpConfig::new().with_path_prefix(""));
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("custom-agent/9"));
    client.get("/ping", &[], headers).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_json_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/echo")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::JsonString(r#"{"a": 1}"#.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"a": 1}"#)
        .create_async()
        .await;

    let client = client_for(&server.url(), HttpConfig::new().with_path_prefix(""));
    let mut params = Params::new();
    params.insert("a".to_string(), json!(1));
    let response = client
        .post("/echo", &params, HeaderMap::new())
        .await
        .unwrap();

    assert_eq!(decode(&response), Content::Json(json!({"a": 1})));
}

#[tokio::test]
async fn test_redirects_are_followed_through_the_chain() {
    let mut server = mockito::Server::new_async().await;
    let _first = server
        .mock("GET", "/old")
        .with_status(302)
        .with_header("location", "/new")
        .create_async()
        .await;
    let target = server
        .mock("GET", "/new")
        .with_status(200)
        .with_body("moved here")
        .create_async()
        .await;

    let client = client_for(&server.url(), HttpConfig::new().with_path_prefix(""));
    let response = client.get("/old", &[], HeaderMap::new()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text(), "moved here");
    target.assert_async().await;
}

#[tokio::test]
async fn test_redirect_loop_fails_at_the_bound() {
    let mut server = mockito::Server::new_async().await;
    let _loop_mock = server
        .mock("GET", "/loop")
        .with_status(302)
        .with_header("location", "/loop")
        .expect_at_least(3)
        .create_async()
        .await;

    let client = client_for(
        &server.url(),
        HttpConfig::new().with_path_prefix("").with_max_redirects(2),
    );
    let err = client
        .get("/loop", &[], HeaderMap::new())
        .await
        .unwrap_err();

    assert!(matches!(err, HttpError::RedirectLimit { limit: 2 }));
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
    // Nothing listens on this port.
    let client = client_for(
        "http://127.0.0.1:1",
        HttpConfig::new().with_path_prefix("").with_max_redirects(0),
    );
    let err = client.get("/x", &[], HeaderMap::new()).await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_concurrent_requests_share_one_pipeline_without_crosstalk() {
    let mut server = mockito::Server::new_async().await;
    for i in 0..8 {
        server
            .mock("GET", format!("/items/{i}").as_str())
            .with_status(200)
            .with_body(format!("item-{i}"))
            .create_async()
            .await;
    }

    let client = client_for(&server.url(), HttpConfig::new().with_path_prefix(""));

    let mut handles = Vec::new();
    for i in 0..8 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let response = client
                .get(&format!("/items/{i}"), &[], HeaderMap::new())
                .await
                .unwrap();
            (i, response.text())
        }));
    }

    for handle in handles {
        let (i, body) = handle.await.unwrap();
        assert_eq!(body, format!("item-{i}"));
    }
}
