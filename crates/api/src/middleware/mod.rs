//! Request middleware and extractors.
//!
//! - [`auth::decode_session`] -- Attaches the upstream token from a session credential.
//! - [`auth::RequireToken`] -- Rejects requests that carry no upstream token.
//! - [`json::ValidatedJson`] -- JSON body extractor with schema validation.
//! - [`json::ValidatedPath`], [`json::ValidatedQuery`] -- Path and query extractors with JSON rejections.

pub mod auth;
pub mod json;
