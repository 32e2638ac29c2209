//! Query parameter types for relay handlers.
//!
//! Fields are optional at the extractor level so that a missing parameter
//! produces the relay's own JSON `BAD_REQUEST` rather than axum's rejection.

use serde::Deserialize;

use crate::error::AppError;

/// `?start=&end=` for recording timeline lookups.
#[derive(Debug, Deserialize)]
pub struct TimeRangeParams {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// `?start=` for recorded stream resolution.
#[derive(Debug, Deserialize)]
pub struct StartParams {
    pub start: Option<String>,
}

impl TimeRangeParams {
    /// Both bounds, or `BAD_REQUEST` if either is missing or blank.
    pub fn require(&self) -> Result<(&str, &str), AppError> {
        match (non_blank(&self.start), non_blank(&self.end)) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(AppError::BadRequest(
                "Start and end parameters are required.".into(),
            )),
        }
    }
}

impl StartParams {
    pub fn require(&self) -> Result<&str, AppError> {
        non_blank(&self.start)
            .ok_or_else(|| AppError::BadRequest("Start parameter is required.".into()))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
