//! Domain types shared by the camrelay crates.
//!
//! Nothing in here performs I/O: the error type, the upstream response
//! schemas with their validation gate, and the checks applied to
//! caller-supplied stream targets.

pub mod error;
pub mod schema;
pub mod stream_target;
pub mod types;
