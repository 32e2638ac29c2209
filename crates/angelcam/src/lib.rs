//! Angelcam REST client library.
//!
//! Thin [`reqwest`] wrapper over the upstream endpoints the relay forwards
//! to. Responses come back as untyped JSON; shape validation happens in the
//! caller against `camrelay-core` schemas.

pub mod api;

pub use api::{AngelcamApi, AngelcamApiError};
