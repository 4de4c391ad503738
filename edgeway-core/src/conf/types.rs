use crate::logging::{LogFormat, LogLevel};
use crate::normalization::DEFAULT_INDEX_DOCUMENT;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EdgewayConfig {
    pub logging: LoggingConfig,
    pub normalizer: NormalizerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, used when `RUST_LOG` is unset.
    pub level: String,

    /// Output format. Unset means pretty on a terminal, JSON otherwise.
    pub format: Option<LogFormat>,

    /// Level at which normalizer transitions are emitted.
    pub transitions: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: None,
            transitions: LogLevel::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    /// Document appended to directory-like uris.
    pub index_document: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            index_document: DEFAULT_INDEX_DOCUMENT.to_string(),
        }
    }
}
