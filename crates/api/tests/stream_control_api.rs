//! HTTP-level integration tests for stream transport controls.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_app, build_test_app, mock_domain, post_auth, post_json_auth, post_raw_auth,
    send, session_token, test_config, TEST_PAT,
};
use serde_json::json;
use wiremock::matchers::{body_json as body_json_matcher, header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn forbid_upstream(server: &MockServer) {
    Mock::given(path_regex(".*"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_play_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recording/streams/abc123/play/"))
        .and(header("authorization", format!("PersonalAccessToken {TEST_PAT}").as_str()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let uri = format!("/api/v1/streams/{}/abc123/play", mock_domain(&server));
    let response = post_auth(build_test_app(&server), &uri, &session_token(TEST_PAT)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], json!({ "status": "playing" }));
}

#[tokio::test]
async fn test_pause_failure_passes_status_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recording/streams/abc123/pause/"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let uri = format!("/api/v1/streams/{}/abc123/pause", mock_domain(&server));
    let response = post_auth(build_test_app(&server), &uri, &session_token(TEST_PAT)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_ERROR");
    assert_eq!(json["error"], "Failed to pause the recording");
}

#[tokio::test]
async fn test_set_speed_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recording/streams/abc123/speed/"))
        .and(body_json_matcher(json!({ "speed": 8 })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let uri = format!("/api/v1/streams/{}/abc123/speed", mock_domain(&server));
    let response = post_json_auth(
        build_test_app(&server),
        &uri,
        &session_token(TEST_PAT),
        json!({ "speed": 8 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], json!({ "status": "speed_updated", "speed": 8 }));
}

#[tokio::test]
async fn test_set_speed_malformed_json() {
    let server = MockServer::start().await;
    forbid_upstream(&server).await;

    let uri = format!("/api/v1/streams/{}/abc123/speed", mock_domain(&server));
    let response = post_raw_auth(
        build_test_app(&server),
        &uri,
        &session_token(TEST_PAT),
        "{\"speed\": ",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_set_speed_out_of_range_makes_no_upstream_call() {
    let server = MockServer::start().await;
    forbid_upstream(&server).await;

    let uri = format!("/api/v1/streams/{}/abc123/speed", mock_domain(&server));
    for speed in [0, 17] {
        let response = post_json_auth(
            build_test_app(&server),
            &uri,
            &session_token(TEST_PAT),
            json!({ "speed": speed }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert!(json["details"].get("speed").is_some());
    }
}

#[tokio::test]
async fn test_invalid_stream_id_rejected() {
    let server = MockServer::start().await;
    forbid_upstream(&server).await;

    let uri = format!("/api/v1/streams/{}/abc%2E%2E123/play", mock_domain(&server));
    let response = post_auth(build_test_app(&server), &uri, &session_token(TEST_PAT)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_invalid_domain_rejected() {
    let server = MockServer::start().await;
    let response = post_auth(
        build_test_app(&server),
        "/api/v1/streams/evil.com%2Fx/abc123/play",
        &session_token(TEST_PAT),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_domain_outside_allowlist_forbidden() {
    let server = MockServer::start().await;
    forbid_upstream(&server).await;

    let mut config = test_config(&server.uri());
    config.angelcam.stream_domain_allowlist = vec!["angelcam.com".to_string()];

    let uri = format!("/api/v1/streams/{}/abc123/play", mock_domain(&server));
    let response = post_auth(build_app(config), &uri, &session_token(TEST_PAT)).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_controls_require_credential() {
    let server = MockServer::start().await;
    forbid_upstream(&server).await;

    let uri = format!("/api/v1/streams/{}/abc123/play", mock_domain(&server));
    let request = axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = send(build_test_app(&server), request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}
