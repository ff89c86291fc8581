//! Tests for HTTP module functionality.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT};
use streamsave::http::{
    create_http_client, declared_content_type, declared_length, HttpClientConfig,
};

mod common;
use common::helpers::*;

#[test]
fn test_create_http_client_with_custom_headers() {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(TEST_USER_AGENT));
    let config = HttpClientConfig {
        retries: 2,
        proxy: None,
        headers: Some(headers),
    };

    assert!(create_http_client(config).is_ok());
}

#[test]
fn test_create_http_client_with_proxy() {
    let config = HttpClientConfig {
        retries: 0,
        proxy: Some(reqwest::Proxy::http("http://127.0.0.1:3128").unwrap()),
        headers: None,
    };

    assert!(create_http_client(config).is_ok());
}

#[test]
fn test_declared_headers_from_response_map() {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_LENGTH, HeaderValue::from_static("2000"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("image/png"));

    assert_eq!(declared_length(&headers), Some(2000));
    assert_eq!(declared_content_type(&headers).as_deref(), Some("image/png"));
}

#[tokio::test]
async fn test_declared_headers_from_live_response() {
    let server = wiremock::MockServer::start().await;
    let url = mount_file(&server, "/cover", create_test_content(2000), Some("image/png")).await;

    let response = reqwest::get(&url).await.unwrap();

    assert_eq!(declared_length(response.headers()), Some(2000));
    assert_eq!(
        declared_content_type(response.headers()).as_deref(),
        Some("image/png")
    );
}
