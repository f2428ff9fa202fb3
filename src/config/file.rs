//! Configuration loading.

use crate::config::{Config, validate_config};
use crate::error::{Error, Result};
use std::path::Path;

impl Config {
    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| Error::ConfigParse { source: e })?;
        validate_config(&config)?;
        Ok(config)
    }
}

/// Load configuration from a TOML file.
///
/// Returns default config if the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Config::from_toml_str(&contents)
}
