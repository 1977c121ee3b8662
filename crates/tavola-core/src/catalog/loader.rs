//! Catalog ingestion from a JSON source.
//!
//! Venues that override the built-in ladder author their catalog as a JSON
//! array of tier entries (the same shape the host front-end consumes). The
//! loader parses and validates once at startup; query-time code never sees
//! an unvalidated catalog.

use std::path::Path;

use crate::errors::ConfigError;

use super::catalog::TierCatalog;
use super::tier_config::TierConfig;

/// Parse and validate a catalog from a JSON array of tier entries.
pub fn catalog_from_json(json: &str) -> Result<TierCatalog, ConfigError> {
    let tiers: Vec<TierConfig> =
        serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
    Ok(TierCatalog::new(tiers)?)
}

/// Read, parse, and validate a catalog JSON file.
pub fn catalog_from_json_file(path: &Path) -> Result<TierCatalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    catalog_from_json(&content)
}
