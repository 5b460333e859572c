//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{CardsmithError, CardsmithResult};

use super::types::{ColorMode, Config};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "cardsmith.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CardsmithResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> CardsmithResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CardsmithError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the active configuration.
///
/// Order: explicit `--config` file, `./cardsmith.toml`, user config, defaults.
/// The first file found is used as a whole; environment overrides apply last.
pub fn discover(
    project_root: &Path,
    explicit: Option<&Path>,
) -> CardsmithResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project = project_root.join(PROJECT_CONFIG_FILE);
            if project.exists() {
                Some(project)
            } else {
                user_config_path().filter(|p| p.exists())
            }
        }
    };

    let (config, warnings) = match candidate {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (CARDSMITH_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(model) = get_env("CARDSMITH_MODEL").filter(|s| !s.is_empty()) {
        config.llm.model = model;
    }

    if let Some(url) = get_env("CARDSMITH_API_BASE_URL").filter(|s| !s.is_empty()) {
        config.llm.base_url = url;
    }

    if let Some(url) = get_env("CARDSMITH_SERVER_URL").filter(|s| !s.is_empty()) {
        config.server.url = url;
    }

    if let Some(status) = get_env("CARDSMITH_SUCCESS_STATUS").and_then(|s| s.trim().parse().ok())
    {
        config.server.success_status = status;
    }

    if let Some(attempts) = get_env("CARDSMITH_MAX_ATTEMPTS").and_then(|s| s.trim().parse().ok()) {
        config.retry.max_attempts = attempts;
    }

    if let Some(dir) = get_env("CARDSMITH_CACHE_DIR").filter(|s| !s.is_empty()) {
        config.paths.cache_dir = PathBuf::from(dir);
    }

    if let Some(color) = get_env("CARDSMITH_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    config
}

/// `<config dir>/cardsmith/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|d| d.join("cardsmith").join("config.toml"))
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "llm",
        "model",
        "base_url",
        "api_key_env",
        "system_prompt",
        "reserved_example_tokens",
        "models",
        "server",
        "url",
        "success_status",
        "retry",
        "max_attempts",
        "delay_ms",
        "paths",
        "example",
        "cards_dir",
        "runs_dir",
        "cache_dir",
        "http",
        "timeout_secs",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
