use crate::error::{Result, TldrError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_UPSTREAM: &str = "https://github.com/tldr-pages/tldr.git";

/// Configuration for tldrpage, stored in `<cache home>/config.json`.
///
/// Every field is optional on disk. Command-line flags take precedence over
/// these values; unset values fall back to environment-derived defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TldrConfig {
    /// Git URL of the community page repository
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,

    /// Platform directory to search (e.g. "linux", "osx")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// Preferred two-letter language code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Style output when the terminal supports it
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_upstream_url() -> String {
    DEFAULT_UPSTREAM.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for TldrConfig {
    fn default() -> Self {
        Self {
            upstream_url: default_upstream_url(),
            platform: None,
            language: None,
            color: default_color(),
        }
    }
}

impl TldrConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TldrError::Io)?;
        let config: TldrConfig =
            serde_json::from_str(&content).map_err(TldrError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir).map_err(TldrError::Io)?;

        let content = serde_json::to_string_pretty(self).map_err(TldrError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(TldrError::Io)?;
        Ok(())
    }
}
