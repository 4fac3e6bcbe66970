use serde_json::Value;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

use crate::common::setup::{TEST_API_KEY, TEST_MODEL, expected_prompt};
use crate::fixtures::{generate_request, generate_response};

pub fn generate_path() -> String {
    format!("/models/{TEST_MODEL}:generateContent")
}

/// Upstream that answers `reply` to exactly the prompt built from `message`,
/// and expects to be called `calls` times.
pub async fn setup_reply_mock(message: &str, reply: &str, calls: u64) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(generate_path()))
        .and(header("x-goog-api-key", TEST_API_KEY))
        .and(body_json(generate_request(&expected_prompt(message))))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_response(reply)))
        .expect(calls)
        .mount(&mock_server)
        .await;

    mock_server
}

pub async fn setup_generate_mock(status: u16, body: impl Into<Value>) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(status).set_body_json(body.into()))
        .mount(&mock_server)
        .await;

    mock_server
}

/// Upstream that fails the test if it receives any request.
pub async fn setup_untouched_mock() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_response("unused")))
        .expect(0)
        .mount(&mock_server)
        .await;

    mock_server
}
