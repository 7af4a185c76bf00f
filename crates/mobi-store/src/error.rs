//! Store-layer error types.

use mobi_commerce::error::CommerceError;
use thiserror::Error;

/// Errors surfaced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A domain validation failure, passed through for inline display.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Config file could not be read.
    #[error("Failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// Config file could not be parsed as TOML.
    #[error("Failed to parse TOML config: {0}")]
    ConfigToml(#[from] toml::de::Error),

    /// Config file could not be parsed as JSON.
    #[error("Failed to parse JSON config: {0}")]
    ConfigJson(#[from] serde_json::Error),
}
