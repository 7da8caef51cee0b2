use std::path::{Path, PathBuf};

use serde::Deserialize;

use contactgen_core::{DEFAULT_OUTPUT_FILE, DEFAULT_ROW_COUNT, Variant};

use crate::CliError;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "contactgen.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub defaults: DefaultsSettings,
    pub logging: LoggingSettings,
}

/// Values offered when the operator leaves a prompt blank.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsSettings {
    pub rows: u64,
    pub output_file: PathBuf,
    pub variant: Variant,
    pub seed: Option<u64>,
}

impl Default for DefaultsSettings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROW_COUNT,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            variant: Variant::default(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

/// Load settings from `explicit`, else from [`DEFAULT_SETTINGS_FILE`] if it
/// exists, else built-in defaults. A missing explicit file is an error.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, CliError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = PathBuf::from(DEFAULT_SETTINGS_FILE);
            if !path.exists() {
                return Ok(Settings::default());
            }
            path
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|err| {
        CliError::InvalidConfig(format!("cannot read {}: {err}", path.display()))
    })?;
    parse_settings(&content)
}

pub fn parse_settings(content: &str) -> Result<Settings, CliError> {
    Ok(toml::from_str(content)?)
}
