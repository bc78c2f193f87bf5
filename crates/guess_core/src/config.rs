use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "guess_number.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_limit: u32,
    pub seed: Option<u64>,
    pub log_filter: String,
    pub window_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_limit: 50,
            seed: None,
            log_filter: "info".into(),
            window_title: "Guess the number".into(),
        }
    }
}

/// Values taken from the command line; they win over file and environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub default_limit: Option<u32>,
    pub seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub fn load_settings(overrides: &ConfigOverrides) -> Result<Settings, ConfigError> {
    let mut settings = match &overrides.config_path {
        Some(path) => read_settings_file(path)?,
        None => match default_config_paths().into_iter().find(|path| path.is_file()) {
            Some(path) => read_settings_file(&path)?,
            None => Settings::default(),
        },
    };

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());

    if let Some(limit) = overrides.default_limit {
        settings.default_limit = limit;
    }
    if let Some(seed) = overrides.seed {
        settings.seed = Some(seed);
    }

    Ok(settings)
}

fn read_settings_file(path: &Path) -> Result<Settings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = toml::from_str::<Settings>(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded settings file");
    Ok(settings)
}

fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("guess_number").join("settings.toml"));
    }
    paths
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("GUESS_NUMBER_DEFAULT_LIMIT") {
        match v.trim().parse::<u32>() {
            Ok(parsed) => settings.default_limit = parsed,
            Err(err) => tracing::warn!(value = %v, %err, "ignoring GUESS_NUMBER_DEFAULT_LIMIT"),
        }
    }
    if let Some(v) = lookup("GUESS_NUMBER_SEED") {
        match v.trim().parse::<u64>() {
            Ok(parsed) => settings.seed = Some(parsed),
            Err(err) => tracing::warn!(value = %v, %err, "ignoring GUESS_NUMBER_SEED"),
        }
    }
    if let Some(v) = lookup("GUESS_NUMBER_LOG") {
        if !v.trim().is_empty() {
            settings.log_filter = v;
        }
    }
}
