//! Configuration module for Cardsmith
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CARDSMITH_*)
//! 3. Explicit `--config` file, else `./cardsmith.toml`, else user config
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{user_config_path, PROJECT_CONFIG_FILE};
pub use types::{
    ColorMode, Config, HttpConfig, LlmConfig, OutputConfig, PathsConfig, ServerConfig,
};
