//! Declared shapes of upstream responses and inbound request bodies.
//!
//! Upstream JSON is never returned as-is: it is deserialized into one of the
//! types below and run through [`validator`] first. Fields not declared here
//! are dropped on the way back out.

pub mod camera;
pub mod recording;
pub mod requests;
pub mod stream;

use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

pub use camera::{Camera, CameraList};
pub use recording::{Recording, Segment, Timeline};
pub use requests::{LoginRequest, SpeedUpdate};
pub use stream::{LiveStream, Stream, StreamControls};

/// Why a JSON document failed the schema gate.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The document does not deserialize into the declared type (missing
    /// field, wrong JSON type, unparsable timestamp).
    #[error("unexpected shape: {0}")]
    Shape(#[from] serde_json::Error),

    /// The document deserialized but one or more field rules failed.
    #[error("invalid fields: {0}")]
    Invalid(#[from] ValidationErrors),
}

impl SchemaError {
    /// Field-level detail suitable for an error envelope.
    ///
    /// Shape errors carry no field map, so the serde message is reported
    /// under a `body` key.
    pub fn details(&self) -> serde_json::Value {
        match self {
            SchemaError::Shape(err) => serde_json::json!({ "body": [err.to_string()] }),
            SchemaError::Invalid(errs) => serde_json::to_value(errs).unwrap_or_default(),
        }
    }
}

/// Deserialize `body` into `T` and run its validation rules.
pub fn validate_document<T>(body: serde_json::Value) -> Result<T, SchemaError>
where
    T: DeserializeOwned + Validate,
{
    let parsed: T = serde_json::from_value(body)?;
    parsed.validate()?;
    Ok(parsed)
}
