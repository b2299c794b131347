//! Settings file discovery and parsing
//!
//! The settings file is optional. Without one every value falls back to its
//! built-in default; nothing is written to disk.

use super::{ConfigError, settings::Settings};
use crate::{log_debug, log_info, log_warn};
use std::{fs, io, path::PathBuf};

const SETTINGS_FILE_NAME: &str = "config.yaml";
const HOME_SETTINGS_FILE_NAME: &str = ".ssh-menu.yaml";

pub struct ConfigLoader {
    explicit_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(explicit_path: Option<PathBuf>) -> Self {
        Self { explicit_path }
    }

    /// Find the settings file in standard locations
    fn find_settings_path(&self) -> Result<Option<PathBuf>, ConfigError> {
        if let Some(path) = &self.explicit_path {
            log_debug!("Using settings file given on the command line: {:?}", path);
            if path.is_file() {
                return Ok(Some(path.clone()));
            }
            let err_msg = format!("Settings file '{}' not found", path.display());
            log_warn!("{}", err_msg);
            return Err(ConfigError::IoError(io::Error::new(io::ErrorKind::NotFound, err_msg)));
        }

        // Check first possible location: ~/.ssh-menu/config.yaml
        if let Some(app_dir) = super::app_dir() {
            let candidate = app_dir.join(SETTINGS_FILE_NAME);
            log_debug!("Checking: {:?}", candidate);
            if candidate.is_file() {
                return Ok(Some(candidate));
            }
        }

        // Check second possible location: ~/.ssh-menu.yaml
        if let Some(home_dir) = dirs::home_dir() {
            let candidate = home_dir.join(HOME_SETTINGS_FILE_NAME);
            log_debug!("Checking: {:?}", candidate);
            if candidate.is_file() {
                return Ok(Some(candidate));
            }
        }

        Ok(None)
    }

    /// Load settings, falling back to defaults when no file exists
    pub fn load_settings(&self) -> Result<Settings, ConfigError> {
        let Some(path) = self.find_settings_path()? else {
            log_info!("No settings file found, using defaults");
            return Ok(Settings::default());
        };

        log_info!("Loading settings from: {:?}", path);
        let content = fs::read_to_string(&path).map_err(|err| {
            log_warn!("Failed to read settings file: {}", err);
            err
        })?;

        parse_settings(&content).map_err(|err| {
            log_warn!("Error parsing settings file {:?}: {}", path, err);
            err
        })
    }
}

/// Parse settings YAML. An empty document means "all defaults".
pub(crate) fn parse_settings(content: &str) -> Result<Settings, ConfigError> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yml::from_str::<Settings>(content).map_err(|err| ConfigError::ParseError(err.to_string()))
}

#[cfg(test)]
#[path = "../test/config/loader.rs"]
mod tests;
