use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use brphone_core::{MatchSettings, Messages};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "brphone";
const CONFIG_FILENAME: &str = "config.toml";

pub const MAX_TIMEOUT_MS: u64 = 60_000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub matching: MatchSettings,
    pub messages: Messages,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid matching.timeout_ms value: {0}")]
    InvalidTimeout(u64),
    #[error("messages.{0} cannot be empty")]
    EmptyMessage(&'static str),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    matching: Option<MatchingFile>,
    messages: Option<MessagesFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MatchingFile {
    timeout_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MessagesFile {
    null_input: Option<String>,
    malformed_input: Option<String>,
    invalid_render_mode: Option<String>,
    incompatible_comparison: Option<String>,
    match_timed_out: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(timeout_ms) = parsed.matching.and_then(|matching| matching.timeout_ms) {
        if timeout_ms == 0 || timeout_ms > MAX_TIMEOUT_MS {
            return Err(ConfigError::InvalidTimeout(timeout_ms));
        }
        config.matching.timeout = Duration::from_millis(timeout_ms);
    }

    if let Some(messages) = parsed.messages {
        let target = &mut config.messages;
        apply_message(&mut target.null_input, messages.null_input, "null_input")?;
        apply_message(
            &mut target.malformed_input,
            messages.malformed_input,
            "malformed_input",
        )?;
        apply_message(
            &mut target.invalid_render_mode,
            messages.invalid_render_mode,
            "invalid_render_mode",
        )?;
        apply_message(
            &mut target.incompatible_comparison,
            messages.incompatible_comparison,
            "incompatible_comparison",
        )?;
        apply_message(
            &mut target.match_timed_out,
            messages.match_timed_out,
            "match_timed_out",
        )?;
    }

    Ok(config)
}

fn apply_message(slot: &mut String, value: Option<String>, field: &'static str) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyMessage(field));
    }
    *slot = trimmed.to_string();
    Ok(())
}
