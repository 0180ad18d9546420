use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::Config;

const APP_DIR: &str = "comment-toggle";

pub fn config_dir() -> PathBuf {
    // Prefer ~/.config/comment-toggle on Unix-like systems so dotfile managers find it
    if let Some(home) = dirs::home_dir() {
        let xdg_config = home.join(".config").join(APP_DIR);
        if xdg_config.exists() || cfg!(unix) {
            return xdg_config;
        }
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

pub fn ensure_config_dir() -> Result<PathBuf> {
    let dir = config_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {:?}", dir))?;
    }
    Ok(dir)
}

/// Load the config from the default location, writing a default file first
/// if none exists. The flag is true when that default file was written.
pub fn load_config() -> Result<(Config, bool)> {
    let path = config_path();

    if !path.exists() {
        let config = Config::default();
        save_config(&config)?;
        return Ok((config, true));
    }

    Ok((load_config_from(&path)?, false))
}

/// Load the config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read config: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config: {:?}", path))?;

    tracing::debug!(
        path = %path.display(),
        variables = config.variables.len(),
        "loaded config"
    );
    Ok(config)
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }
    PathBuf::from(path)
}

pub fn save_config(config: &Config) -> Result<()> {
    ensure_config_dir()?;
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &Config, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;

    fs::write(path, content).with_context(|| format!("Failed to write config: {:?}", path))?;

    Ok(())
}
