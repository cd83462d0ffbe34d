//! Configuration loading from TOML files

mod constants;

pub use constants::{
    CreationConstants, DecayConstants, FeedConstants, PetConstants, PlayConstants, RestConstants,
    RetryConstants,
};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate pet constants from a TOML file
pub fn load_constants(path: &Path) -> Result<PetConstants, ConfigError> {
    let constants: PetConstants = load_toml(path)?;
    constants.validate()?;
    log::debug!("Loaded pet constants from {}", path.display());
    Ok(constants)
}

/// Parse and validate pet constants from a TOML string
pub fn parse_constants(content: &str) -> Result<PetConstants, ConfigError> {
    let constants: PetConstants = parse_toml(content)?;
    constants.validate()?;
    Ok(constants)
}
