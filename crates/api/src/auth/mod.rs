//! Authentication primitives.
//!
//! - [`token`] -- session credential (JWT) encoding and verification.

pub mod token;
