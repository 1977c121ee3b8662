//! Per-tier configuration entry.

use serde::{Deserialize, Serialize};

use crate::limits::TierLimits;
use crate::types::collections::FxHashMap;
use crate::types::{FeatureKey, TierLevel};

/// Display branding for a tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierBranding {
    /// Short badge text shown on gated surfaces.
    pub badge: String,
    /// Icon identifier (the host maps this to an actual asset).
    pub icon: String,
}

/// One catalog entry: identity, ordering, display metadata, feature grants,
/// and usage limits for a single tier.
///
/// A key absent from `features` counts as not granted — absence is never an
/// error. The catalog validates the grants at construction time; entries are
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierConfig {
    /// Tier identifier.
    pub id: TierLevel,
    /// Position in the upgrade ladder; unique, contiguous from 0.
    pub rank: u8,
    /// Display name, used in upgrade call-to-action labels.
    pub name: String,
    /// Monthly price in whole dollars.
    pub price: u32,
    /// One-line marketing tagline.
    #[serde(default)]
    pub tagline: String,
    /// Badge and icon branding.
    #[serde(default)]
    pub branding: TierBranding,
    /// Per-feature grants. Absent keys count as `false`.
    #[serde(default)]
    pub features: FxHashMap<FeatureKey, bool>,
    /// Usage limits at this tier.
    #[serde(default)]
    pub limits: TierLimits,
}

impl TierConfig {
    /// Whether this tier grants `feature`. Absent keys count as `false`.
    pub fn grants(&self, feature: FeatureKey) -> bool {
        self.features.get(&feature).copied().unwrap_or(false)
    }
}
