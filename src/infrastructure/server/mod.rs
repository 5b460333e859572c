//! Content server implementations

mod http;

pub use http::HttpContentServer;
