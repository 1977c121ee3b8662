//! The validated, immutable tier catalog.

use std::cmp::Ordering;

use tracing::info;

use crate::errors::{CatalogError, EntitlementError};
use crate::types::{FeatureKey, TierLevel};

use super::tier_config::TierConfig;

/// The canonical, ordered set of tier definitions.
///
/// Immutable after construction: swapping catalogs means building a new
/// instance, never editing in place, so consumers that compare by identity
/// stay referentially stable. Construction validates the upgrade ladder
/// (unique contiguous ranks from 0) and the monotonic-entitlement invariant
/// (a grant is never revoked at a higher rank).
#[derive(Debug, Clone, PartialEq)]
pub struct TierCatalog {
    /// Sorted by rank ascending.
    tiers: Vec<TierConfig>,
}

impl TierCatalog {
    /// Build a catalog from entries, validating the upgrade ladder.
    pub fn new(mut tiers: Vec<TierConfig>) -> Result<Self, CatalogError> {
        if tiers.is_empty() {
            return Err(CatalogError::Empty);
        }

        tiers.sort_by_key(|t| t.rank);

        for (expected, tier) in tiers.iter().enumerate() {
            if tiers.iter().filter(|t| t.id == tier.id).count() > 1 {
                return Err(CatalogError::DuplicateTier { tier: tier.id });
            }
            let expected = expected as u8;
            if tier.rank != expected {
                return Err(CatalogError::BadRanks {
                    tier: tier.id,
                    expected,
                    found: tier.rank,
                });
            }
        }

        // Monotonic entitlement: once granted, never revoked above.
        for feature in FeatureKey::ALL {
            let mut granted_at: Option<TierLevel> = None;
            for tier in &tiers {
                if tier.grants(feature) {
                    granted_at.get_or_insert(tier.id);
                } else if let Some(lower) = granted_at {
                    return Err(CatalogError::NonMonotonicFeature {
                        feature,
                        granted_at: lower,
                        revoked_at: tier.id,
                    });
                }
            }
        }

        info!(tier_count = tiers.len(), "Tier catalog validated");
        Ok(Self { tiers })
    }

    /// Look up the config for a tier.
    pub fn config(&self, tier: TierLevel) -> Result<&TierConfig, EntitlementError> {
        self.tiers
            .iter()
            .find(|t| t.id == tier)
            .ok_or(EntitlementError::UnknownTier {
                tier: tier.as_str().to_string(),
            })
    }

    /// Rank of a tier within this catalog.
    pub fn rank(&self, tier: TierLevel) -> Result<u8, EntitlementError> {
        self.config(tier).map(|t| t.rank)
    }

    /// The tier one rank above `tier`, or `None` at the top of the ladder.
    pub fn next_tier(&self, tier: TierLevel) -> Result<Option<TierLevel>, EntitlementError> {
        let rank = self.rank(tier)?;
        Ok(self
            .tiers
            .get(rank as usize + 1)
            .map(|t| t.id))
    }

    /// Compare two tiers by rank.
    pub fn compare(&self, a: TierLevel, b: TierLevel) -> Result<Ordering, EntitlementError> {
        Ok(self.rank(a)?.cmp(&self.rank(b)?))
    }

    /// All tiers in rank order (for pricing-comparison surfaces).
    pub fn tiers(&self) -> impl Iterator<Item = &TierConfig> {
        self.tiers.iter()
    }

    /// Number of tiers.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Whether `tier` exists in this catalog.
    pub fn contains(&self, tier: TierLevel) -> bool {
        self.tiers.iter().any(|t| t.id == tier)
    }

    /// The highest-ranked tier.
    pub fn highest(&self) -> TierLevel {
        // Invariant: non-empty, sorted by rank.
        self.tiers[self.tiers.len() - 1].id
    }

    /// Tiers strictly above `rank`, ascending.
    pub(crate) fn above(&self, rank: u8) -> impl Iterator<Item = &TierConfig> {
        self.tiers.iter().skip(rank as usize + 1)
    }
}
