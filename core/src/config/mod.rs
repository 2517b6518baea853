use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::skills::{DEFAULT_DIST_DIR, DEFAULT_SKILLS_DIR};

const CONFIG_FILE: &str = "skillkit.toml";
pub const CONFIG_ENV: &str = "SKILLKIT_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub skills_dir: PathBuf,
    pub dist_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            skills_dir: PathBuf::from(DEFAULT_SKILLS_DIR),
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
        }
    }
}

/// Config file location: `$SKILLKIT_CONFIG` when set, otherwise `skillkit.toml`
/// in the working directory.
pub fn get_config_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(CONFIG_FILE),
    }
}

impl Config {
    pub fn load_or_default() -> Result<Self> {
        let config_path = get_config_path();
        if config_path.exists() {
            load_config(&config_path)
        } else {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn load_config(config_path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

    tracing::debug!(
        path = %config_path.display(),
        skills_dir = %config.skills_dir.display(),
        dist_dir = %config.dist_dir.display(),
        "Config loaded"
    );

    Ok(config)
}
