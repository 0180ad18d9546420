use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    /// File extension (without the dot) to filetype name, e.g. `rs = "rust"`.
    #[serde(default)]
    pub filetypes: BTreeMap<String, String>,
    /// Free-form string variables, e.g. `rust-comment-style = "//"`.
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            filetypes: BTreeMap::new(),
            variables: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn var(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    pub fn set_var(&mut self, key: &str, value: &str) {
        self.variables.insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Filetype used when a path has no extension and no override applies.
    #[serde(default = "default_filetype")]
    pub default_filetype: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_filetype() -> String {
    "unknown".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_filetype: default_filetype(),
        }
    }
}
