//! Resolver configuration loading from disk.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, ConfigFile, ResolverConfig};

/// Load resolver configuration, falling back to defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<ResolverConfig, AppError> {
    let Some(path) = path else {
        return Ok(ResolverConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            AppError::config_error(format!("Config file not found: {}", path.display()))
        } else {
            AppError::Io(err)
        }
    })?;
    parse_config_content(&content)
}

/// Parse and validate configuration from string content.
pub fn parse_config_content(content: &str) -> Result<ResolverConfig, AppError> {
    let file: ConfigFile = toml::from_str(content)?;
    file.resolver.validate()?;
    Ok(file.resolver)
}
