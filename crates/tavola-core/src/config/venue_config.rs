//! VenueConfig: venue settings from the tavola.toml file.
//!
//! This is the single place the host resolves the active tier. The engine
//! itself only ever receives the tier as an explicit parameter; nothing
//! below this layer reads ambient state.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{catalog_from_json_file, TierCatalog, TierConfig};
use crate::errors::ConfigError;
use crate::types::TierLevel;

const DEFAULT_UPGRADE_URL: &str = "https://tavola.dev/pricing";

/// Venue configuration from tavola.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueConfig {
    /// Display name of the venue.
    pub venue_name: Option<String>,
    /// Active tier id (e.g. "pre-ordering"). Default: "digital-menu".
    pub active_tier: Option<String>,
    /// Billing page the upgrade call-to-action points at.
    pub upgrade_url: Option<String>,
    /// Path to a JSON catalog override. Default: the built-in catalog.
    pub catalog_path: Option<String>,
    /// Inline catalog override; takes precedence over `catalog_path`.
    #[serde(rename = "tier")]
    pub tiers: Option<Vec<TierConfig>>,
}

impl VenueConfig {
    /// Load config from a tavola.toml file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;

        info!(
            path = %path.display(),
            active_tier = config.active_tier.as_deref().unwrap_or("digital-menu"),
            "Venue config loaded"
        );
        Ok(config)
    }

    /// The configured active tier, defaulting to the lowest tier.
    pub fn effective_active_tier(&self) -> Result<TierLevel, ConfigError> {
        match self.active_tier.as_deref() {
            None => Ok(TierLevel::DigitalMenu),
            Some(raw) => TierLevel::parse(raw).ok_or_else(|| ConfigError::BadActiveTier {
                tier: raw.to_string(),
            }),
        }
    }

    /// The upgrade URL, defaulting to the hosted pricing page.
    pub fn effective_upgrade_url(&self) -> &str {
        self.upgrade_url.as_deref().unwrap_or(DEFAULT_UPGRADE_URL)
    }

    /// Resolve the tier catalog.
    ///
    /// Priority: inline `[[tier]]` tables > `catalog_path` JSON file >
    /// built-in catalog. Every branch runs full catalog validation.
    pub fn resolve_catalog(&self) -> Result<TierCatalog, ConfigError> {
        if let Some(tiers) = &self.tiers {
            return Ok(TierCatalog::new(tiers.clone())?);
        }
        if let Some(path) = &self.catalog_path {
            return catalog_from_json_file(Path::new(path));
        }
        Ok(TierCatalog::builtin())
    }
}
