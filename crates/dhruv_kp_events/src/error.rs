//! Error types for event scoring and calendar generation.

use dhruv_kp_base::KpError;
use thiserror::Error;

/// Errors from event scoring, configuration and calendar generation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EventError {
    /// Error from the base KP layer.
    #[error(transparent)]
    Kp(#[from] KpError),
    /// Event id not present in the catalog.
    #[error("unknown event category: {0}")]
    UnknownEvent(String),
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Configuration text could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),
    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(String),
}

impl From<toml::de::Error> for EventError {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e.to_string())
    }
}

impl From<std::io::Error> for EventError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
