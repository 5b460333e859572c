//! Event Sink Implementations
//!
//! - JsonEventSink: NDJSON output for scripts
//! - the console sink lives with the binary's UI code

mod json;

pub use json::{event_json, JsonEventSink};
