//! REST client for the Angelcam HTTP API.
//!
//! Wraps the shared-camera, cloud-recording and stream transport-control
//! endpoints using [`reqwest`]. Every call authenticates with the caller's
//! personal-access-token; the client itself holds no credentials.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder};
use serde_json::Value;

/// Production base URL of the Angelcam API.
pub const DEFAULT_API_URL: &str = "https://api.angelcam.com/v1";

/// Scheme used for stream transport-control hosts.
pub const DEFAULT_STREAM_SCHEME: &str = "https";

/// HTTP client for the Angelcam API and its recording stream hosts.
#[derive(Debug, Clone)]
pub struct AngelcamApi {
    client: reqwest::Client,
    api_url: String,
    stream_scheme: String,
}

/// Errors from the Angelcam REST layer.
#[derive(Debug, thiserror::Error)]
pub enum AngelcamApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, body decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Angelcam returned a non-success status code.
    #[error("Angelcam API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl AngelcamApiError {
    /// The upstream status code, if the request got as far as a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            AngelcamApiError::ApiError { status, .. } => Some(*status),
            AngelcamApiError::Request(err) => err.status().map(|s| s.as_u16()),
        }
    }
}

impl AngelcamApi {
    /// Create a client with its own connection pool.
    ///
    /// * `api_url` - Base API URL, e.g. `https://api.angelcam.com/v1`.
    /// * `stream_scheme` - `https` in production; tests point it at `http`.
    /// * `timeout` - Per-request timeout applied to every upstream call.
    pub fn new(
        api_url: &str,
        stream_scheme: &str,
        timeout: Duration,
    ) -> Result<Self, AngelcamApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, api_url, stream_scheme))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: &str, stream_scheme: &str) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            stream_scheme: stream_scheme.to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    // ---- identity ----

    /// Check that a personal-access-token is accepted by `GET /me/`.
    ///
    /// Only an exact `200 OK` counts as valid.
    pub async fn verify_token(&self, token: &str) -> Result<(), AngelcamApiError> {
        let response = self
            .api_request(Method::GET, "/me/", token)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(path = "/me/", status = status.as_u16(), "Angelcam token check");
        if status != reqwest::StatusCode::OK {
            return Err(Self::api_error(response).await);
        }
        Ok(())
    }

    // ---- shared cameras ----

    /// `GET /shared-cameras/`
    pub async fn list_shared_cameras(&self, token: &str) -> Result<Value, AngelcamApiError> {
        self.get_json("/shared-cameras/", token, &[]).await
    }

    /// `GET /shared-cameras/{id}/`
    pub async fn get_shared_camera(
        &self,
        token: &str,
        camera_id: u64,
    ) -> Result<Value, AngelcamApiError> {
        self.get_json(&format!("/shared-cameras/{camera_id}/"), token, &[])
            .await
    }

    // ---- cloud recording ----

    /// `GET /shared-cameras/{id}/recording/`
    pub async fn get_recording(
        &self,
        token: &str,
        camera_id: u64,
    ) -> Result<Value, AngelcamApiError> {
        self.get_json(&format!("/shared-cameras/{camera_id}/recording/"), token, &[])
            .await
    }

    /// `GET /shared-cameras/{id}/recording/timeline/?start=..&end=..`
    pub async fn get_recording_timeline(
        &self,
        token: &str,
        camera_id: u64,
        start: &str,
        end: &str,
    ) -> Result<Value, AngelcamApiError> {
        self.get_json(
            &format!("/shared-cameras/{camera_id}/recording/timeline/"),
            token,
            &[("start", start), ("end", end)],
        )
        .await
    }

    /// `GET /shared-cameras/{id}/recording/stream/`
    ///
    /// With `start` the upstream resolves a recorded stream beginning at that
    /// instant; without it the response describes the live stream.
    pub async fn get_recording_stream(
        &self,
        token: &str,
        camera_id: u64,
        start: Option<&str>,
    ) -> Result<Value, AngelcamApiError> {
        let query: Vec<(&str, &str)> = start.map(|s| ("start", s)).into_iter().collect();
        self.get_json(
            &format!("/shared-cameras/{camera_id}/recording/stream/"),
            token,
            &query,
        )
        .await
    }

    // ---- stream transport controls ----

    /// `POST {scheme}://{domain}/recording/streams/{id}/play/`
    pub async fn play_stream(
        &self,
        token: &str,
        domain: &str,
        stream_id: &str,
    ) -> Result<(), AngelcamApiError> {
        let request = self.stream_request(domain, stream_id, "play", token);
        Self::check_status(request.send().await?).await
    }

    /// `POST {scheme}://{domain}/recording/streams/{id}/pause/`
    pub async fn pause_stream(
        &self,
        token: &str,
        domain: &str,
        stream_id: &str,
    ) -> Result<(), AngelcamApiError> {
        let request = self.stream_request(domain, stream_id, "pause", token);
        Self::check_status(request.send().await?).await
    }

    /// `POST {scheme}://{domain}/recording/streams/{id}/speed/` with `{"speed": n}`.
    pub async fn set_stream_speed(
        &self,
        token: &str,
        domain: &str,
        stream_id: &str,
        speed: u32,
    ) -> Result<(), AngelcamApiError> {
        let request = self
            .stream_request(domain, stream_id, "speed", token)
            .json(&serde_json::json!({ "speed": speed }));
        Self::check_status(request.send().await?).await
    }

    // ---- private helpers ----

    fn api_request(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.api_url, path))
            .header(AUTHORIZATION, format!("PersonalAccessToken {token}"))
    }

    fn stream_request(
        &self,
        domain: &str,
        stream_id: &str,
        action: &str,
        token: &str,
    ) -> RequestBuilder {
        let url = format!(
            "{}://{}/recording/streams/{}/{}/",
            self.stream_scheme, domain, stream_id, action
        );
        tracing::debug!(%domain, %stream_id, %action, "Angelcam stream control");
        self.client
            .post(url)
            .header(AUTHORIZATION, format!("PersonalAccessToken {token}"))
    }

    /// GET a JSON document. Only `200 OK` is treated as success; any other
    /// status is surfaced as [`AngelcamApiError::ApiError`].
    async fn get_json(
        &self,
        path: &str,
        token: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, AngelcamApiError> {
        let response = self
            .api_request(Method::GET, path, token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(%path, status = status.as_u16(), "Angelcam response");
        if status != reqwest::StatusCode::OK {
            return Err(Self::api_error(response).await);
        }
        Ok(response.json::<Value>().await?)
    }

    /// Build an [`AngelcamApiError::ApiError`] from a failed response.
    async fn api_error(response: reqwest::Response) -> AngelcamApiError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        AngelcamApiError::ApiError { status, body }
    }

    /// Accept any 2xx status, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), AngelcamApiError> {
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKEN: &str = "pat-0123456789";

    fn api_for(server: &MockServer) -> AngelcamApi {
        AngelcamApi::with_client(reqwest::Client::new(), &server.uri(), "http")
    }

    fn stream_domain(server: &MockServer) -> String {
        server.address().to_string()
    }

    #[test]
    fn trailing_slash_trimmed_from_base_url() {
        let api = AngelcamApi::with_client(
            reqwest::Client::new(),
            "https://api.angelcam.com/v1/",
            DEFAULT_STREAM_SCHEME,
        );
        assert_eq!(api.api_url(), "https://api.angelcam.com/v1");
    }

    #[tokio::test]
    async fn verify_token_sends_personal_access_token_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me/"))
            .and(header("authorization", "PersonalAccessToken pat-0123456789"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 1})))
            .expect(1)
            .mount(&server)
            .await;

        assert!(api_for(&server).verify_token(TOKEN).await.is_ok());
    }

    #[tokio::test]
    async fn verify_token_rejects_non_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me/"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid token."))
            .mount(&server)
            .await;

        let err = api_for(&server).verify_token(TOKEN).await.unwrap_err();
        assert_matches!(err, AngelcamApiError::ApiError { status: 401, .. });
    }

    #[tokio::test]
    async fn verify_token_treats_other_success_codes_as_invalid() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me/"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let err = api_for(&server).verify_token(TOKEN).await.unwrap_err();
        assert_eq!(err.status(), Some(204));
    }

    #[tokio::test]
    async fn timeline_forwards_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shared-cameras/7/recording/timeline/"))
            .and(query_param("start", "2024-05-01T00:00:00Z"))
            .and(query_param("end", "2024-05-02T00:00:00Z"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"segments": []})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let body = api_for(&server)
            .get_recording_timeline(TOKEN, 7, "2024-05-01T00:00:00Z", "2024-05-02T00:00:00Z")
            .await
            .unwrap();
        assert_eq!(body["segments"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn get_json_surfaces_upstream_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shared-cameras/9/"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not found."))
            .mount(&server)
            .await;

        let err = api_for(&server)
            .get_shared_camera(TOKEN, 9)
            .await
            .unwrap_err();
        assert_matches!(err, AngelcamApiError::ApiError { status: 404, ref body } if body == "Not found.");
    }

    #[tokio::test]
    async fn non_json_success_body_is_a_request_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shared-cameras/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = api_for(&server)
            .list_shared_cameras(TOKEN)
            .await
            .unwrap_err();
        assert_matches!(err, AngelcamApiError::Request(_));
    }

    #[tokio::test]
    async fn play_posts_to_stream_host() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/recording/streams/abc123/play/"))
            .and(header("authorization", "PersonalAccessToken pat-0123456789"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let result = api_for(&server)
            .play_stream(TOKEN, &stream_domain(&server), "abc123")
            .await;
        assert!(result.is_ok(), "{result:?}");
    }

    #[tokio::test]
    async fn speed_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/recording/streams/abc123/speed/"))
            .and(body_json(serde_json::json!({ "speed": 4 })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let result = api_for(&server)
            .set_stream_speed(TOKEN, &stream_domain(&server), "abc123", 4)
            .await;
        assert!(result.is_ok(), "{result:?}");
    }

    #[tokio::test]
    async fn pause_failure_carries_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/recording/streams/abc123/pause/"))
            .respond_with(ResponseTemplate::new(410))
            .mount(&server)
            .await;

        let err = api_for(&server)
            .pause_stream(TOKEN, &stream_domain(&server), "abc123")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(410));
    }
}
