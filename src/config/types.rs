//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    ConfigWarning, ModelTable, RetryPolicy, DEFAULT_RESERVED_EXAMPLE_TOKENS,
};
use crate::error::CardsmithResult;

use super::loader;

/// Language model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Optional system instruction sent with every prompt
    #[serde(default)]
    pub system_prompt: Option<String>,

    #[serde(default = "default_reserved_example_tokens")]
    pub reserved_example_tokens: u32,

    /// Context lengths, merged over the built-in table
    #[serde(default)]
    pub models: BTreeMap<String, u32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            system_prompt: None,
            reserved_example_tokens: default_reserved_example_tokens(),
            models: BTreeMap::new(),
        }
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_reserved_example_tokens() -> u32 {
    DEFAULT_RESERVED_EXAMPLE_TOKENS
}

/// Content server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_url")]
    pub url: String,

    /// Status code that means the card was accepted
    #[serde(default = "default_success_status")]
    pub success_status: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_server_url(),
            success_status: default_success_status(),
        }
    }
}

fn default_server_url() -> String {
    "http://localhost:4202/".to_string()
}

fn default_success_status() -> u16 {
    201
}

/// File locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Example card embedded in every prompt
    #[serde(default = "default_example")]
    pub example: PathBuf,

    /// Folder the content server loads card modules from
    #[serde(default = "default_cards_dir")]
    pub cards_dir: PathBuf,

    /// Parent folder of per-run artifact folders
    #[serde(default = "default_runs_dir")]
    pub runs_dir: PathBuf,

    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            example: default_example(),
            cards_dir: default_cards_dir(),
            runs_dir: default_runs_dir(),
            cache_dir: default_cache_dir(),
        }
    }
}

fn default_example() -> PathBuf {
    PathBuf::from("demo-cards/example.gts")
}

fn default_cards_dir() -> PathBuf {
    PathBuf::from("demo-cards")
}

fn default_runs_dir() -> PathBuf {
    PathBuf::from(".cardsmith/runs")
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from(".cardsmith/cache")
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    120
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub retry: RetryPolicy,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CardsmithResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CardsmithResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Explicit file, project config, user config, or defaults; then env overrides
    pub fn discover(
        project_root: &Path,
        explicit: Option<&Path>,
    ) -> CardsmithResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(project_root, explicit)
    }

    /// Apply environment variable overrides (CARDSMITH_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Built-in model table with configured entries and reserve applied
    pub fn model_table(&self) -> ModelTable {
        let mut table =
            ModelTable::builtin().with_reserved_example_tokens(self.llm.reserved_example_tokens);
        table.extend(self.llm.models.iter().map(|(k, v)| (k.clone(), *v)));
        table
    }

    /// System instruction, if one is configured and non-blank
    pub fn system_prompt(&self) -> Option<&str> {
        self.llm
            .system_prompt
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}
