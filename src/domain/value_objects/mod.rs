//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod cache_key;
mod config_warning;
mod filename_fragment;
mod model_table;
mod retry_policy;

pub use cache_key::CacheKey;
pub use config_warning::ConfigWarning;
pub use filename_fragment::{underscore, FilenameFragment};
pub use model_table::{ModelTable, DEFAULT_RESERVED_EXAMPLE_TOKENS};
pub use retry_policy::RetryPolicy;
