//! SDK error type.

use std::path::PathBuf;

use storefront_auth::AuthError;
use storefront_commerce::CommerceError;
use storefront_data::FetchError;
use thiserror::Error;

/// Errors surfaced by the SDK.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Could not read or write a config file.
    #[error("config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file has invalid TOML.
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config could not be rendered as TOML.
    #[error("cannot render TOML config: {0}")]
    TomlRender(#[from] toml::ser::Error),

    /// Config file has invalid JSON.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Config values are out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Domain input error.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Transport or HTTP failure.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Authentication failure.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Result alias for SDK operations.
pub type Result<T> = std::result::Result<T, StorefrontError>;
