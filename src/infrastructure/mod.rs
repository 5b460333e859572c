//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - local file system
//! - `cache/` - on-disk response cache
//! - `llm/` - chat completions client
//! - `server/` - content server client
//! - `events/` - run event sinks

pub mod cache;
pub mod events;
pub mod fs;
pub mod llm;
pub mod server;

pub use cache::{CacheStats, DiskCache};
pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use llm::OpenAiClient;
pub use server::HttpContentServer;
