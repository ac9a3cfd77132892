//! Board configuration loaded from TOML.
//!
//! # Responsibility
//! - Provide defaults for every setting so an absent file is valid.
//! - Reject settings the board cannot honor before any state is built.
//!
//! # Invariants
//! - `default_mood` always parses as a [`Mood`] after validation.
//! - `burst_delay_ms` is strictly positive.

use crate::model::mood::Mood;
use crate::service::note_service::DEFAULT_BURST_DELAY_MS;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DEFAULT_STORE_FILE: &str = "aura.sqlite3";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: Option<PathBuf>,
        source: toml::de::Error,
    },
    Validation(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, .. } => write!(f, "failed to read config file `{}`", path.display()),
            Self::Parse {
                path: Some(path), ..
            } => write!(f, "failed to parse config file `{}`", path.display()),
            Self::Parse { path: None, .. } => write!(f, "failed to parse config"),
            Self::Validation(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Validation(_) => None,
        }
    }
}

/// User-facing board settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuraConfig {
    /// Name appended to the greeting; empty means no name.
    pub greeting_name: String,
    /// Palette applied at startup.
    pub default_mood: String,
    /// Delay between a bubble burst click and its removal.
    pub burst_delay_ms: u64,
    /// When false, every cue is routed to a silent backend.
    pub audio_enabled: bool,
    /// SQLite file holding the board entries.
    pub store_path: PathBuf,
    /// Log level override; build-mode default when unset.
    pub log_level: Option<String>,
    /// Absolute log directory; file logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for AuraConfig {
    fn default() -> Self {
        Self {
            greeting_name: String::new(),
            default_mood: Mood::Aurora.name().to_string(),
            burst_delay_ms: DEFAULT_BURST_DELAY_MS,
            audio_enabled: true,
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            log_level: None,
            log_dir: None,
        }
    }
}

impl AuraConfig {
    /// Reads and validates a TOML config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates TOML text.
    pub fn from_toml_str(raw: &str) -> ConfigResult<Self> {
        let config: Self =
            toml::from_str(raw).map_err(|source| ConfigError::Parse { path: None, source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if let Err(err) = self.default_mood.parse::<Mood>() {
            return Err(ConfigError::Validation(format!("default_mood: {err}")));
        }
        if self.burst_delay_ms == 0 {
            return Err(ConfigError::Validation(
                "burst_delay_ms must be greater than zero".to_string(),
            ));
        }
        if self.store_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "store_path cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Startup palette; falls back to aurora for unvalidated configs.
    pub fn mood(&self) -> Mood {
        self.default_mood.parse().unwrap_or(Mood::Aurora)
    }
}
