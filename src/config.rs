//! Configuration loading
//!
//! Reads an optional TOML file. A missing file means defaults; a broken one
//! means defaults plus a warning for the status line.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{Accent, Config, UiConfig};

use crate::error::AppError;

const CONFIG_DIR: &str = "meal-suggest";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus an optional warning for the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load from `override_path` if given, otherwise from the default location
pub fn load_config(override_path: Option<&Path>) -> ConfigResult {
    let path = match override_path {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) => path,
            None => return ConfigResult::default(),
        },
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::debug!("No config file at {}", path.display());
            return ConfigResult::default();
        }
        Err(err) => {
            return with_warning(path, AppError::from(err));
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(err) => with_warning(path, err),
    }
}

pub fn parse_config(content: &str) -> Result<Config, AppError> {
    toml::from_str(content).map_err(|e| AppError::Config(e.message().to_string()))
}

fn with_warning(path: &Path, err: AppError) -> ConfigResult {
    let warning = format!("{}: {} (using defaults)", path.display(), err);
    log::warn!("{}", warning);
    ConfigResult {
        config: Config::default(),
        warning: Some(warning),
    }
}
