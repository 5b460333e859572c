//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod completion_api;
pub mod content_server;
pub mod file_system;
pub mod response_cache;
pub mod run_events;

pub use completion_api::{CompletionApi, CompletionRequest};
pub use content_server::{ContentServer, JSON_API_MEDIA_TYPE};
pub use file_system::{FileSystem, FsError, FsResult};
pub use response_cache::{CacheError, CacheResult, ResponseCache};
pub use run_events::{NoopEventSink, RunEvent, RunEventSink, Stage};
