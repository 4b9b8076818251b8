//! Shell settings with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/cmdkit/cmdkit.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `CMDKIT_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("environment: {0}")]
    Environment(#[from] ConfigError),
}

/// Interactive shell settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShellSettings {
    /// Prompt printed before each line
    pub prompt: String,
    /// Message printed when a line names no registered command
    pub not_found_message: String,
    /// Colorize status output
    pub color: bool,
    /// Print a confirmation after a handler succeeds
    pub show_ok: bool,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            prompt: "> ".into(),
            not_found_message: "Can't find command!".into(),
            color: true,
            show_ok: false,
        }
    }
}

/// Partial settings as read from a file; `None` means "not specified".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawShellSettings {
    pub prompt: Option<String>,
    pub not_found_message: Option<String>,
    pub color: Option<bool>,
    pub show_ok: Option<bool>,
}

/// Get the XDG config directory for cmdkit.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cmdkit").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("cmdkit.toml"))
}

fn load_raw_settings(path: &Path) -> Result<RawShellSettings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl ShellSettings {
    /// Overlay wins field by field where it is specified.
    pub fn merge_with(&self, overlay: &RawShellSettings) -> Self {
        Self {
            prompt: overlay.prompt.clone().unwrap_or_else(|| self.prompt.clone()),
            not_found_message: overlay
                .not_found_message
                .clone()
                .unwrap_or_else(|| self.not_found_message.clone()),
            color: overlay.color.unwrap_or(self.color),
            show_ok: overlay.show_ok.unwrap_or(self.show_ok),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// A missing global file is skipped; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        let global = global_config_path().filter(|path| path.exists());
        Self::load_files(global.as_deref(), explicit)?.with_env_overrides()
    }

    /// File layers only: defaults, then `global`, then `explicit`.
    pub fn load_files(global: Option<&Path>, explicit: Option<&Path>) -> Result<Self, SettingsError> {
        let mut current = Self::default();

        for path in [global, explicit].into_iter().flatten() {
            debug!(path = %path.display(), "loading settings");
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        Ok(current)
    }

    /// Apply CMDKIT_* environment variables as explicit overrides.
    ///
    /// A variable that is set but does not convert to the field's type is an
    /// error rather than being skipped.
    pub fn with_env_overrides(mut self) -> Result<Self, SettingsError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("CMDKIT").try_parsing(true))
            .build()?;

        if let Some(val) = env_value(config.get_string("prompt"))? {
            self.prompt = val;
        }
        if let Some(val) = env_value(config.get_string("not_found_message"))? {
            self.not_found_message = val;
        }
        if let Some(val) = env_value(config.get_bool("color"))? {
            self.color = val;
        }
        if let Some(val) = env_value(config.get_bool("show_ok"))? {
            self.show_ok = val;
        }

        Ok(self)
    }
}

/// Unset keys are `None`; anything else that fails is reported.
fn env_value<T>(lookup: Result<T, ConfigError>) -> Result<Option<T>, SettingsError> {
    match lookup {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
