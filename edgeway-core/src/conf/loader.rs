use crate::conf::{ConfigError, EdgewayConfig, validate_config};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/edgeway.toml";

/// Read, parse and validate a config file.
pub fn load_config(path: &Path) -> Result<EdgewayConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    let config: EdgewayConfig = toml::from_str(&raw).map_err(|e| ConfigError::parse(path, e))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load `path` when given. Otherwise fall back to [`DEFAULT_CONFIG_PATH`] if it
/// exists, and to built-in defaults if it does not.
pub fn load_config_or_default(path: Option<&Path>) -> Result<EdgewayConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.is_file() {
                load_config(default_path)
            } else {
                Ok(EdgewayConfig::default())
            }
        }
    }
}
