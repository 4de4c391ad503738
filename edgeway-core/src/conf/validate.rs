use crate::conf::{ConfigError, EdgewayConfig};
use tracing_subscriber::EnvFilter;

pub fn validate_config(config: &EdgewayConfig) -> Result<(), ConfigError> {
    validate_index_document(&config.normalizer.index_document)?;

    EnvFilter::try_new(&config.logging.level).map_err(|source| ConfigError::InvalidLogLevel {
        value: config.logging.level.clone(),
        source,
    })?;

    Ok(())
}

/// The index document must be a single file name with an extension, so that a
/// rewritten uri is left alone on a second pass.
fn validate_index_document(value: &str) -> Result<(), ConfigError> {
    let reason = if value.is_empty() {
        Some("must not be empty")
    } else if value.contains('/') {
        Some("must be a file name, not a path")
    } else if !value.contains('.') {
        Some("must have an extension")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ConfigError::InvalidIndexDocument {
            value: value.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
