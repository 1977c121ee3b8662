//! Venue configuration errors.

use super::catalog_error::CatalogError;
use super::error_code::{self, TavolaErrorCode};

/// Errors raised while loading `tavola.toml` or its catalog override.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config at {path}: {message}")]
    Io { path: String, message: String },

    #[error("Config parse error: {message}")]
    Parse { message: String },

    #[error("Config names unknown active tier '{tier}'")]
    BadActiveTier { tier: String },

    #[error("Catalog override is malformed: {0}")]
    BadCatalog(#[from] CatalogError),
}

impl TavolaErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::CONFIG_IO,
            Self::Parse { .. } => error_code::CONFIG_PARSE,
            Self::BadActiveTier { .. } => error_code::CONFIG_BAD_TIER,
            Self::BadCatalog(e) => e.error_code(),
        }
    }
}
