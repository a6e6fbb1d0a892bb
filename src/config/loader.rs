use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::StatzError;

const CONFIG_DIR: &str = "textfilestatz";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the configuration from `explicit`, or from the default location
///
/// A missing file at the default location yields the defaults; a missing
/// explicit file is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, StatzError> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    let Some(path) = config_path() else {
        return Ok(Config::default());
    };

    match load_config_from_path(&path) {
        Err(StatzError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
        result => result,
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, StatzError> {
    let contents = fs::read_to_string(path)?;
    log::debug!("Loaded config from {}", path.display());
    parse_config(&contents)
}

pub fn parse_config(content: &str) -> Result<Config, StatzError> {
    toml::from_str(content).map_err(|e| StatzError::Config(e.to_string()))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
