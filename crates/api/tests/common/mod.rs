#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use wiremock::MockServer;

use camrelay_angelcam::AngelcamApi;
use camrelay_api::auth::token::{encode_session_token, JwtConfig};
use camrelay_api::config::{AngelcamConfig, ServerConfig};
use camrelay_api::router::build_app_router;
use camrelay_api::state::AppState;

/// Personal-access-token used by tests that need an authenticated caller.
pub const TEST_PAT: &str = "0a1b2c3d4e5f67890a1b2c3d4e5f67890a1b2c3d";

/// Build a test `ServerConfig` pointing upstream at `api_url`.
///
/// Stream controls use plain `http` so they can target a local mock server.
pub fn test_config(api_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            expiry_mins: 15,
        },
        angelcam: AngelcamConfig {
            api_url: api_url.to_string(),
            stream_scheme: "http".to_string(),
            timeout_secs: 5,
            stream_domain_allowlist: vec![],
        },
    }
}

/// Build the full application router from `config`, with the same middleware
/// stack production uses.
pub fn build_app(config: ServerConfig) -> Router {
    let angelcam = AngelcamApi::with_client(
        reqwest::Client::new(),
        &config.angelcam.api_url,
        &config.angelcam.stream_scheme,
    );
    let state = AppState {
        config: Arc::new(config.clone()),
        angelcam: Arc::new(angelcam),
    };
    build_app_router(state, &config)
}

/// Build the application with its upstream pointed at `upstream`.
pub fn build_test_app(upstream: &MockServer) -> Router {
    build_app(test_config(&upstream.uri()))
}

/// Sign a session credential for `pat` with the test secret.
pub fn session_token(pat: &str) -> String {
    encode_session_token(pat, &test_config("http://unused").jwt)
        .expect("encoding should succeed")
}

/// `host:port` of a mock server, as used in `/streams/{domain}/...` paths.
pub fn mock_domain(server: &MockServer) -> String {
    server.address().to_string()
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// GET with `Authorization: Bearer <token>`.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// GET with a raw `Authorization` header value.
pub async fn get_with_header(app: Router, uri: &str, authorization: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("authorization", authorization)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST a raw string body with a JSON content type (for malformed JSON tests).
pub async fn post_raw_auth(app: Router, uri: &str, token: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    post_raw_auth(app, uri, token, &body.to_string()).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
