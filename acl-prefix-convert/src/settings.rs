use std::fs;
use std::path::Path;

use acl_core::ActionPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::translate::{DEFAULT_SEQ_STEP, DEFAULT_START_SEQ};

/// Tunable conversion settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub start_seq: u32,
    pub seq_step: u32,
    pub action_policy: ActionPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_seq: DEFAULT_START_SEQ,
            seq_step: DEFAULT_SEQ_STEP,
            action_policy: ActionPolicy::Strict,
        }
    }
}

impl Settings {
    fn validate(&self) -> Result<(), String> {
        if self.start_seq == 0 {
            return Err("start_seq must be at least 1".to_string());
        }
        if self.seq_step == 0 {
            return Err("seq_step must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Errors returned when loading settings files.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid settings in {path}: {reason}")]
    Invalid { path: String, reason: String },
}

/// Load settings from a TOML file. Keys the file omits keep their defaults.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_settings(&raw, path.display().to_string())
}

/// Built-in settings shipped with the binary.
pub fn default_settings() -> Settings {
    let embedded = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/settings/defaults.toml"
    ));
    parse_settings(embedded, "embedded settings".to_string()).unwrap_or_default()
}

fn parse_settings(raw: &str, path: String) -> Result<Settings, SettingsError> {
    let parsed: Settings = toml::from_str(raw).map_err(|source| SettingsError::Parse {
        path: path.clone(),
        source,
    })?;
    parsed
        .validate()
        .map_err(|reason| SettingsError::Invalid { path, reason })?;
    Ok(parsed)
}
