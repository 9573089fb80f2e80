//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Label drawn before the query when nothing else is configured.
pub const DEFAULT_PROMPT: &str = "QUERY> ";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/pucy/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Label drawn before the query.
    #[serde(default)]
    pub prompt: Option<String>,

    /// Disable colours.
    #[serde(default)]
    pub no_color: Option<bool>,

    /// Distinct queries kept in the filter cache. `0` means unbounded.
    #[serde(default)]
    pub cache_capacity: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Label drawn before the query.
    pub prompt: String,
    /// Colours disabled.
    pub no_color: bool,
    /// Filter cache bound; `0` is unbounded.
    pub cache_capacity: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            no_color: false,
            cache_capacity: 0,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/pucy/pucy.log` on Linux, the platform state
/// directory elsewhere, or `pucy.log` in the current directory as a fallback.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("pucy").join("pucy.log")
    } else {
        PathBuf::from("pucy.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/pucy/config.toml` on Linux, appropriate path on other platforms.
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pucy").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PUCY_CONFIG` environment variable
/// 3. Default path `~/.config/pucy/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("PUCY_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        prompt: config.prompt.unwrap_or(defaults.prompt),
        no_color: config.no_color.unwrap_or(defaults.no_color),
        cache_capacity: config.cache_capacity.unwrap_or(defaults.cache_capacity),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for `PUCY_PROMPT`. `NO_COLOR` is honoured later by
/// [`ColorConfig`](crate::view::ColorConfig).
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(prompt) = std::env::var("PUCY_PROMPT") {
        config.prompt = prompt;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Only flags the user explicitly set are passed as `Some`.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    prompt_override: Option<String>,
    no_color_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(prompt) = prompt_override {
        config.prompt = prompt;
    }

    if let Some(no_color) = no_color_override {
        config.no_color = no_color;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
