//! Session credential gate and the extractor that enforces it.
//!
//! [`decode_session`] runs on every request. It never rejects: a missing,
//! expired or forged credential simply leaves the request without an
//! [`UpstreamToken`]. Handlers that need the upstream token take a
//! [`RequireToken`] parameter, which turns its absence into a 401.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use camrelay_core::error::CoreError;
use jsonwebtoken::errors::ErrorKind;

use crate::auth::token::decode_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// Upstream personal-access-token decoded from the session credential,
/// stored in request extensions.
#[derive(Clone)]
pub struct UpstreamToken(pub String);

/// Strip an optional `Bearer ` prefix from an `Authorization` header value.
pub fn bearer_credential(header: &str) -> &str {
    header.strip_prefix("Bearer ").unwrap_or(header)
}

/// Decode the session credential, if any, and attach its upstream token.
pub async fn decode_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let credential = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| bearer_credential(v).to_string());

    if let Some(credential) = credential {
        match decode_session_token(&credential, &state.config.jwt) {
            Ok(pat) => {
                request.extensions_mut().insert(UpstreamToken(pat));
            }
            Err(err) => match err.kind() {
                ErrorKind::ExpiredSignature => tracing::warn!("Expired session token"),
                _ => tracing::warn!(error = %err, "Invalid session token"),
            },
        }
    }

    next.run(request).await
}

/// The caller's upstream personal-access-token. Rejects with 401 when the
/// gate attached none.
///
/// ```ignore
/// async fn my_handler(RequireToken(token): RequireToken) -> AppResult<Json<()>> {
///     state.angelcam.list_shared_cameras(&token).await?;
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireToken(pub String);

impl<S> FromRequestParts<S> for RequireToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UpstreamToken>()
            .map(|t| RequireToken(t.0.clone()))
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Authentication credentials were not provided".into(),
                ))
            })
    }
}
