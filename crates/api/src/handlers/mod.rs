pub mod auth;
pub mod cameras;
pub mod recordings;
pub mod streams;

use axum::Json;
use camrelay_angelcam::AngelcamApiError;
use camrelay_core::schema::validate_document;
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

/// Turn an upstream JSON result into a relay response.
///
/// A successful body is validated against `T` and returned enveloped;
/// a failed call maps to [`AppError::upstream`] with `failure` as the message.
pub(crate) fn relay<T>(
    upstream: Result<serde_json::Value, AngelcamApiError>,
    failure: &str,
) -> AppResult<Json<DataResponse<T>>>
where
    T: DeserializeOwned + Serialize + Validate,
{
    let body = upstream.map_err(|e| AppError::upstream(e, failure))?;
    let data: T = validate_document(body)?;
    Ok(Json(DataResponse { data }))
}
