//! Application config — where things live and whom to tell.
//!
//! ```toml
//! themes_dir = "themes"
//! options_path = "options.toml"
//!
//! [reload]
//! base_url = "http://homeassistant.local:8123"
//! token_env = "HASS_TOKEN"
//! ```
//!
//! Every key is optional. Relative paths are taken relative to the config
//! file's directory.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Config or options file could not be loaded or saved.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize options: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Write(#[from] crate::writer::WriteError),
}

/// Default environment variable holding the reload token.
pub const DEFAULT_TOKEN_ENV: &str = "HASS_TOKEN";

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

/// Where to send the "themes changed" signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReloadConfig {
    /// Base URL of the dashboard host, e.g. `http://homeassistant.local:8123`.
    pub base_url: String,
    /// Environment variable the bearer token is read from.
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub themes_dir: PathBuf,
    pub options_path: PathBuf,
    /// No table means no reload notification.
    pub reload: Option<ReloadConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            themes_dir: PathBuf::from("themes"),
            options_path: PathBuf::from("options.toml"),
            reload: None,
        }
    }
}

impl AppConfig {
    /// Load from `path`. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Unreadable or unparseable files.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let config = match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Ok(config.rebased(base))
    }

    /// Parse config text without touching paths.
    ///
    /// # Errors
    ///
    /// Invalid TOML or mistyped keys.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Make relative paths relative to `base`.
    #[must_use]
    pub fn rebased(mut self, base: &Path) -> Self {
        let rebase = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.themes_dir = rebase(self.themes_dir);
        self.options_path = rebase(self.options_path);
        self
    }
}
