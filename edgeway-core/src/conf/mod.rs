mod error;
mod loader;
#[cfg(test)]
mod tests;
mod types;
mod validate;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_PATH, load_config, load_config_or_default};
pub use types::{EdgewayConfig, LoggingConfig, NormalizerConfig};
pub use validate::validate_config;
